use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user_profile::{entities::UserProfile, value_objects::CreateUserProfileInput},
};

pub trait UserProfileService: Send + Sync {
    fn register_profile(
        &self,
        input: CreateUserProfileInput,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_profile(
        &self,
        email: String,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;
}

pub trait UserProfileRepository: Send + Sync {
    /// Stores a new profile. Fails with `AlreadyExists` when the email is taken.
    fn create(
        &self,
        profile: UserProfile,
    ) -> impl Future<Output = Result<UserProfile, CoreError>> + Send;

    fn get_by_email(
        &self,
        email: &str,
    ) -> impl Future<Output = Result<Option<UserProfile>, CoreError>> + Send;
}
