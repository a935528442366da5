use std::path::PathBuf;

use tracing::instrument;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        user_profile::{entities::UserProfile, ports::UserProfileRepository},
    },
    infrastructure::json_store::JsonFileStore,
};

pub struct JsonFileUserProfileRepository {
    store: JsonFileStore<UserProfile>,
}

impl JsonFileUserProfileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

impl UserProfileRepository for JsonFileUserProfileRepository {
    #[instrument(skip(self, profile), fields(email = %profile.email))]
    async fn create(&self, profile: UserProfile) -> Result<UserProfile, CoreError> {
        self.store
            .update(move |profiles| {
                if profiles.iter().any(|p| p.has_email(&profile.email)) {
                    return Err(CoreError::AlreadyExists);
                }
                profiles.push(profile.clone());
                Ok(profile)
            })
            .await
    }

    async fn get_by_email(&self, email: &str) -> Result<Option<UserProfile>, CoreError> {
        let profiles = self.store.load().await?;
        Ok(profiles.into_iter().find(|p| p.has_email(email)))
    }
}
