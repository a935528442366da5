use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Receipt returned by an image store after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StoredImage {
    /// Backend-specific reference used to fetch or delete the image later.
    pub reference: String,
    pub size_bytes: u64,
    pub checksum_sha256: String,
}
