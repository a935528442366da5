use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
#[cfg(test)]
pub(crate) mod fakes;
pub mod services;

/// Number of analyses kept in the history before the oldest are evicted.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

#[derive(Clone, Debug)]
pub struct NutrilensConfig {
    pub classifier: ClassifierConfig,
    pub object_storage: ObjectStorageConfig,
    pub history: HistoryConfig,
    pub profiles: ProfileStoreConfig,
    pub overlay: OverlayConfig,
}

#[derive(Clone, Debug, Default)]
pub struct ClassifierConfig {
    /// ONNX export of the dish classifier. `None` selects the mock classifier.
    pub model_path: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub enum ObjectStorageConfig {
    Local { directory: PathBuf },
    Minio(MinioConfig),
}

#[derive(Clone, Debug)]
pub struct MinioConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
    pub bucket: String,
    pub use_ssl: bool,
}

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub path: PathBuf,
    pub capacity: usize,
}

#[derive(Clone, Debug)]
pub struct ProfileStoreConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug)]
pub struct OverlayConfig {
    pub font_path: Option<PathBuf>,
    pub font_size: f32,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            font_path: None,
            font_size: 20.0,
        }
    }
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}
