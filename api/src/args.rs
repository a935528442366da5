use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, ValueEnum};
use nutrilens_core::domain::{
    allergy::overlay::FONT_SIZE_RANGE,
    common::{
        ClassifierConfig, HistoryConfig, MinioConfig, NutrilensConfig, ObjectStorageConfig,
        OverlayConfig, ProfileStoreConfig,
    },
};

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens-api", version, about = "Food recognition and nutrition API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub history: HistoryArgs,

    #[command(flatten)]
    pub profiles: ProfileArgs,

    #[command(flatten)]
    pub overlay: OverlayArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix for every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ClassifierArgs {
    /// ONNX model for the dish classifier. Without it the mock classifier is used.
    #[arg(long = "model-path", env = "MODEL_PATH")]
    pub model_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackend {
    Local,
    Minio,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(
        long = "storage-backend",
        env = "STORAGE_BACKEND",
        value_enum,
        default_value_t = StorageBackend::Local
    )]
    pub backend: StorageBackend,

    #[arg(long = "image-dir", env = "IMAGE_DIR", default_value = "data/images")]
    pub image_dir: PathBuf,

    #[arg(long = "minio-endpoint", env = "MINIO_ENDPOINT", default_value = "http://localhost:9000")]
    pub minio_endpoint: String,

    #[arg(long = "minio-region", env = "MINIO_REGION", default_value = "us-east-1")]
    pub minio_region: String,

    #[arg(long = "minio-access-key", env = "MINIO_ACCESS_KEY", default_value = "minioadmin")]
    pub minio_access_key: String,

    #[arg(long = "minio-secret-key", env = "MINIO_SECRET_KEY", default_value = "minioadmin")]
    pub minio_secret_key: String,

    #[arg(long = "minio-bucket", env = "MINIO_BUCKET", default_value = "nutrilens")]
    pub minio_bucket: String,

    #[arg(long = "minio-use-ssl", env = "MINIO_USE_SSL")]
    pub minio_use_ssl: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct HistoryArgs {
    #[arg(id = "history_path", long = "history-path", env = "HISTORY_PATH", default_value = "data/analysis_history.json")]
    pub path: PathBuf,

    #[arg(long = "history-capacity", env = "HISTORY_CAPACITY", default_value_t = 50)]
    pub capacity: usize,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ProfileArgs {
    #[arg(id = "profiles_path", long = "profiles-path", env = "PROFILES_PATH", default_value = "data/user_profiles.json")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct OverlayArgs {
    /// TrueType font for allergy warnings. Falls back to a built-in bitmap font.
    #[arg(long = "overlay-font-path", env = "OVERLAY_FONT_PATH")]
    pub font_path: Option<PathBuf>,

    #[arg(
        long = "overlay-font-size",
        env = "OVERLAY_FONT_SIZE",
        default_value_t = 20.0,
        value_parser = parse_font_size
    )]
    pub font_size: f32,
}

fn parse_font_size(value: &str) -> Result<f32, String> {
    let size: f32 = value.parse().map_err(|e| format!("{e}"))?;
    if !FONT_SIZE_RANGE.contains(&size) {
        return Err(format!(
            "font size must be between {} and {} pixels",
            FONT_SIZE_RANGE.start(),
            FONT_SIZE_RANGE.end()
        ));
    }

    Ok(size)
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        let object_storage = match args.storage.backend {
            StorageBackend::Local => ObjectStorageConfig::Local {
                directory: args.storage.image_dir,
            },
            StorageBackend::Minio => ObjectStorageConfig::Minio(MinioConfig {
                endpoint: args.storage.minio_endpoint,
                region: args.storage.minio_region,
                access_key: args.storage.minio_access_key,
                secret_key: args.storage.minio_secret_key,
                bucket: args.storage.minio_bucket,
                use_ssl: args.storage.minio_use_ssl,
            }),
        };

        NutrilensConfig {
            classifier: ClassifierConfig {
                model_path: args.classifier.model_path,
            },
            object_storage,
            history: HistoryConfig {
                path: args.history.path,
                capacity: args.history.capacity,
            },
            profiles: ProfileStoreConfig {
                path: args.profiles.path,
            },
            overlay: OverlayConfig {
                font_path: args.overlay.font_path,
                font_size: args.overlay.font_size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_local_storage_and_fifty_entries() {
        let args = Args::try_parse_from(["nutrilens-api"]).expect("defaults parse");
        let config = NutrilensConfig::from(args);

        assert_eq!(config.history.capacity, 50);
        assert!(matches!(
            config.object_storage,
            ObjectStorageConfig::Local { .. }
        ));
        assert_eq!(config.overlay.font_size, 20.0);
        assert!(config.classifier.model_path.is_none());
    }

    #[test]
    fn minio_backend_carries_connection_settings() {
        let args = Args::try_parse_from([
            "nutrilens-api",
            "--storage-backend",
            "minio",
            "--minio-bucket",
            "meals",
            "--minio-use-ssl",
        ])
        .expect("parse");

        match NutrilensConfig::from(args).object_storage {
            ObjectStorageConfig::Minio(minio) => {
                assert_eq!(minio.bucket, "meals");
                assert!(minio.use_ssl);
            }
            other => panic!("unexpected storage config: {other:?}"),
        }
    }

    #[test]
    fn overlay_font_size_outside_range_is_rejected() {
        for size in ["1e9", "0", "-4", "NaN"] {
            let parsed = Args::try_parse_from(["nutrilens-api", "--overlay-font-size", size]);
            assert!(parsed.is_err(), "accepted font size {size}");
        }

        let args = Args::try_parse_from(["nutrilens-api", "--overlay-font-size", "32"])
            .expect("parse");
        assert_eq!(args.overlay.font_size, 32.0);
    }
}
