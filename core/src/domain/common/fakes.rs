//! In-memory adapters for service tests.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use bytes::Bytes;
use uuid::Uuid;

use crate::domain::{
    common::{DEFAULT_HISTORY_CAPACITY, entities::app_errors::CoreError},
    food_analysis::{entities::AnalysisRecord, ports::HistoryRepository},
    storage::{entities::StoredImage, ports::ImageStore, services::checksum_sha256},
    user_profile::{entities::UserProfile, ports::UserProfileRepository},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}

#[derive(Default)]
pub struct InMemoryImageStore {
    images: Mutex<HashMap<String, Bytes>>,
    fail_puts: bool,
}

impl InMemoryImageStore {
    pub fn failing() -> Self {
        Self {
            fail_puts: true,
            ..Self::default()
        }
    }

    pub fn get(&self, reference: &str) -> Option<Bytes> {
        lock(&self.images).get(reference).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.images).len()
    }
}

impl ImageStore for InMemoryImageStore {
    async fn put_image(
        &self,
        object_key: &str,
        payload: Bytes,
        _content_type: &str,
    ) -> Result<StoredImage, CoreError> {
        if self.fail_puts {
            return Err(CoreError::PersistenceError("image store offline".into()));
        }

        let stored = StoredImage {
            reference: object_key.to_string(),
            size_bytes: payload.len() as u64,
            checksum_sha256: checksum_sha256(&payload),
        };
        lock(&self.images).insert(object_key.to_string(), payload);

        Ok(stored)
    }

    async fn delete_image(&self, reference: &str) -> Result<(), CoreError> {
        lock(&self.images)
            .remove(reference)
            .map(|_| ())
            .ok_or(CoreError::NotFound)
    }
}

pub struct InMemoryHistory {
    records: Mutex<Vec<AnalysisRecord>>,
    capacity: usize,
    fail_appends: bool,
}

impl InMemoryHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            capacity,
            fail_appends: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_appends: true,
            ..Self::default()
        }
    }
}

impl Default for InMemoryHistory {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl HistoryRepository for InMemoryHistory {
    async fn append(&self, record: AnalysisRecord) -> Result<Vec<AnalysisRecord>, CoreError> {
        if self.fail_appends {
            return Err(CoreError::PersistenceError("history file locked".into()));
        }

        let mut records = lock(&self.records);
        records.insert(0, record);
        let evicted = if records.len() > self.capacity {
            records.split_off(self.capacity)
        } else {
            Vec::new()
        };

        Ok(evicted)
    }

    async fn list(&self) -> Result<Vec<AnalysisRecord>, CoreError> {
        Ok(lock(&self.records).clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, CoreError> {
        Ok(lock(&self.records).iter().find(|r| r.id == id).cloned())
    }

    async fn clear(&self) -> Result<Vec<AnalysisRecord>, CoreError> {
        Ok(std::mem::take(&mut *lock(&self.records)))
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(lock(&self.records).len())
    }
}

#[derive(Default)]
pub struct InMemoryProfiles {
    profiles: Mutex<Vec<UserProfile>>,
}

impl UserProfileRepository for InMemoryProfiles {
    async fn create(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        let mut profiles = lock(&self.profiles);
        if profiles.iter().any(|p| p.has_email(&profile.email)) {
            return Err(CoreError::AlreadyExists);
        }
        profiles.push(profile.clone());

        Ok(profile)
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<UserProfile>, CoreError> {
        Ok(lock(&self.profiles).iter().find(|p| p.has_email(email)).cloned())
    }
}
