use aws_sdk_s3::{
    Client,
    config::{BehaviorVersion, Credentials, Region},
    primitives::ByteStream,
};
use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{MinioConfig, entities::app_errors::CoreError},
    storage::{entities::StoredImage, ports::ImageStore, services::checksum_sha256},
};

/// Image store backed by a MinIO (or any S3-compatible) bucket.
/// References are object keys inside the configured bucket.
#[derive(Clone)]
pub struct MinioImageStore {
    client: Client,
    bucket: String,
}

impl MinioImageStore {
    pub fn new(config: &MinioConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            &config.secret_key,
            None,
            None,
            "nutrilens",
        );

        let endpoint = endpoint_url(&config.endpoint, config.use_ssl);

        tracing::info!(
            endpoint = %endpoint,
            region = %config.region,
            bucket = %config.bucket,
            use_ssl = config.use_ssl,
            "Initializing MinIO client"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(true)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
        }
    }
}

/// Adds the scheme implied by `use_ssl` when the endpoint has none and strips
/// any trailing slash.
fn endpoint_url(endpoint: &str, use_ssl: bool) -> String {
    let endpoint = endpoint.trim_end_matches('/');
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }

    let scheme = if use_ssl { "https" } else { "http" };
    format!("{scheme}://{endpoint}")
}

fn classify_error(message: &str) -> &'static str {
    if message.contains("dispatch failure") {
        "HTTP client dispatch failure - check endpoint URL and network connectivity"
    } else if message.contains("timeout") {
        "Request timeout - check network connection and MinIO server status"
    } else if message.contains("connection") {
        "Connection error - check MinIO endpoint and network"
    } else {
        "Unknown error"
    }
}

impl ImageStore for MinioImageStore {
    #[instrument(skip(self, payload), fields(bucket = %self.bucket))]
    async fn put_image(
        &self,
        object_key: &str,
        payload: Bytes,
        content_type: &str,
    ) -> Result<StoredImage, CoreError> {
        let size_bytes = payload.len() as u64;
        let checksum_sha256 = checksum_sha256(&payload);

        tracing::debug!(
            object_key = %object_key,
            size = size_bytes,
            content_type = %content_type,
            "Uploading image to storage"
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type(content_type)
            .body(ByteStream::from(payload))
            .send()
            .await
            .map_err(|e| {
                let error_kind = classify_error(&e.to_string());
                tracing::error!(
                    error = %e,
                    error_kind = %error_kind,
                    object_key = %object_key,
                    payload_size = size_bytes,
                    "Failed to upload image"
                );
                CoreError::PersistenceError(format!("Failed to upload image: {e} ({error_kind})"))
            })?;

        tracing::info!(object_key = %object_key, "Image uploaded successfully");

        Ok(StoredImage {
            reference: object_key.to_string(),
            size_bytes,
            checksum_sha256,
        })
    }

    #[instrument(skip(self), fields(bucket = %self.bucket))]
    async fn delete_image(&self, reference: &str) -> Result<(), CoreError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(reference)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, object_key = %reference, "Failed to delete image");
                CoreError::PersistenceError(format!("Failed to delete image: {e}"))
            })?;

        tracing::info!(object_key = %reference, "Image deleted successfully");

        Ok(())
    }
}
