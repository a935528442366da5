use std::{
    io::ErrorKind,
    marker::PhantomData,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::domain::common::entities::app_errors::CoreError;

/// A JSON array of `T` kept in a single file.
///
/// Read-modify-write cycles are serialized by an async mutex and every write
/// goes through a temporary file that is renamed over the target, so readers
/// never observe a torn file. A missing file reads as empty; a corrupt one is
/// an error.
pub struct JsonFileStore<T> {
    path: PathBuf,
    lock: Mutex<()>,
    _entries: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Send,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _entries: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Vec<T>, CoreError> {
        let _guard = self.lock.lock().await;
        self.read_entries().await
    }

    /// Applies `mutate` to the current entries and persists the result.
    /// Nothing is written when `mutate` fails.
    pub async fn update<F, R>(&self, mutate: F) -> Result<R, CoreError>
    where
        F: FnOnce(&mut Vec<T>) -> Result<R, CoreError> + Send,
        R: Send,
    {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries().await?;
        let output = mutate(&mut entries)?;
        self.write_entries(&entries).await?;

        Ok(output)
    }

    async fn read_entries(&self) -> Result<Vec<T>, CoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "Failed to read store");
                return Err(CoreError::PersistenceError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )));
            }
        };

        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&raw).map_err(|e| {
            error!(path = %self.path.display(), error = %e, "Store file is corrupt");
            CoreError::PersistenceError(format!("corrupt store {}: {e}", self.path.display()))
        })
    }

    async fn write_entries(&self, entries: &[T]) -> Result<(), CoreError> {
        let persistence_error = |action: &str, e: &dyn std::fmt::Display| {
            error!(path = %self.path.display(), error = %e, "Failed to {action} store");
            CoreError::PersistenceError(format!(
                "failed to {action} {}: {e}",
                self.path.display()
            ))
        };

        let payload =
            serde_json::to_vec_pretty(entries).map_err(|e| persistence_error("serialize", &e))?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| persistence_error("create directory for", &e))?;
        }

        let temporary = self.temporary_path();
        tokio::fs::write(&temporary, &payload)
            .await
            .map_err(|e| persistence_error("write", &e))?;
        tokio::fs::rename(&temporary, &self.path)
            .await
            .map_err(|e| persistence_error("replace", &e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Store written");
        Ok(())
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
