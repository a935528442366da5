use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    user_profile::{
        entities::UserProfile,
        ports::{UserProfileRepository, UserProfileService},
        value_objects::CreateUserProfileInput,
    },
};

impl<C, IS, H, P> UserProfileService for Service<C, IS, H, P>
where
    C: Send + Sync,
    IS: Send + Sync,
    H: Send + Sync,
    P: UserProfileRepository,
{
    #[instrument(skip(self, input), fields(email = %input.email))]
    async fn register_profile(
        &self,
        input: CreateUserProfileInput,
    ) -> Result<UserProfile, CoreError> {
        let name = input.name.trim();
        let email = input.email.trim();
        if name.is_empty() {
            return Err(CoreError::Invalid("name must not be empty".into()));
        }
        if email.is_empty() {
            return Err(CoreError::Invalid("email must not be empty".into()));
        }

        let profile = UserProfile::new(
            name.to_string(),
            email.to_string(),
            input.age,
            input.gender.trim().to_string(),
            input.allergies.trim().to_string(),
            input.medications.trim().to_string(),
        );

        let profile = self.profile_repository.create(profile).await?;
        info!(profile_id = %profile.id, "Profile registered");

        Ok(profile)
    }

    #[instrument(skip(self))]
    async fn get_profile(&self, email: String) -> Result<UserProfile, CoreError> {
        self.profile_repository
            .get_by_email(email.trim())
            .await?
            .ok_or(CoreError::NotFound)
    }
}
