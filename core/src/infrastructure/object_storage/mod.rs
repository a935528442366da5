use bytes::Bytes;

use crate::domain::{
    common::{ObjectStorageConfig, entities::app_errors::CoreError},
    storage::{entities::StoredImage, ports::ImageStore},
};

pub mod local;
pub mod minio;

pub use local::LocalImageStore;
pub use minio::MinioImageStore;

/// Image store selected from configuration at startup.
#[derive(Clone)]
pub enum ImageStoreBackend {
    Local(LocalImageStore),
    Minio(MinioImageStore),
}

impl ImageStoreBackend {
    pub fn from_config(config: &ObjectStorageConfig) -> Self {
        match config {
            ObjectStorageConfig::Local { directory } => {
                ImageStoreBackend::Local(LocalImageStore::new(directory.clone()))
            }
            ObjectStorageConfig::Minio(minio) => {
                ImageStoreBackend::Minio(MinioImageStore::new(minio))
            }
        }
    }
}

impl ImageStore for ImageStoreBackend {
    async fn put_image(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<StoredImage, CoreError> {
        match self {
            ImageStoreBackend::Local(store) => {
                store.put_image(object_key, payload, content_type).await
            }
            ImageStoreBackend::Minio(store) => {
                store.put_image(object_key, payload, content_type).await
            }
        }
    }

    async fn delete_image(&self, reference: &str) -> Result<(), CoreError> {
        match self {
            ImageStoreBackend::Local(store) => store.delete_image(reference).await,
            ImageStoreBackend::Minio(store) => store.delete_image(reference).await,
        }
    }
}
