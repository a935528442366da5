use std::future::Future;

use bytes::Bytes;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::StoredImage;

/// Port for the annotated image storage (local directory or MinIO/S3)
pub trait ImageStore: Send + Sync {
    /// Upload an image under the given object key
    fn put_image(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;

    /// Delete an image by the reference returned from `put_image`
    fn delete_image(&self, reference: &str) -> impl Future<Output = Result<(), CoreError>> + Send;
}
