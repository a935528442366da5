use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::domain::{
    common::entities::app_errors::CoreError,
    storage::{entities::StoredImage, ports::ImageStore, services::checksum_sha256},
};

/// Image store writing one file per image into a directory.
/// References are file names relative to that directory.
#[derive(Debug, Clone)]
pub struct LocalImageStore {
    directory: PathBuf,
}

impl LocalImageStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, reference: &str) -> Result<PathBuf, CoreError> {
        let is_plain_name = !reference.is_empty()
            && reference != "."
            && reference != ".."
            && !reference.contains(['/', '\\']);
        if !is_plain_name {
            return Err(CoreError::Invalid(format!(
                "invalid image reference: {reference}"
            )));
        }

        Ok(self.directory.join(reference))
    }
}

impl ImageStore for LocalImageStore {
    #[instrument(skip(self, payload), fields(directory = %self.directory.display()))]
    async fn put_image(
        &self,
        object_key: &str,
        payload: Bytes,
        _content_type: &str,
    ) -> Result<StoredImage, CoreError> {
        let path = self.path_for(object_key)?;
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|e| CoreError::PersistenceError(format!("Failed to create image directory: {e}")))?;

        tokio::fs::write(&path, &payload)
            .await
            .map_err(|e| CoreError::PersistenceError(format!("Failed to write image: {e}")))?;

        debug!(path = %path.display(), size = payload.len(), "Image written");

        Ok(StoredImage {
            reference: object_key.to_string(),
            size_bytes: payload.len() as u64,
            checksum_sha256: checksum_sha256(&payload),
        })
    }

    #[instrument(skip(self), fields(directory = %self.directory.display()))]
    async fn delete_image(&self, reference: &str) -> Result<(), CoreError> {
        let path = self.path_for(reference)?;

        tokio::fs::remove_file(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound,
            _ => CoreError::PersistenceError(format!("Failed to delete image: {e}")),
        })
    }
}
