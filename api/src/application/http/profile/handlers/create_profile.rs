use axum::extract::State;
use nutrilens_core::domain::user_profile::{
    entities::UserProfile, ports::UserProfileService, value_objects::CreateUserProfileInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    profile::validators::CreateProfileValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfileResponse {
    pub data: UserProfile,
}

#[utoipa::path(
    post,
    path = "",
    tag = "profile",
    summary = "Register profile",
    description = "Creates a user profile. The email identifies the profile and must be unique.",
    request_body = CreateProfileValidator,
    responses(
        (status = 201, body = ProfileResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 409, body = ApiErrorResponse),
    ),
)]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProfileValidator>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .register_profile(CreateUserProfileInput {
            name: payload.name,
            email: payload.email,
            age: payload.age,
            gender: payload.gender,
            allergies: payload.allergies,
            medications: payload.medications,
        })
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::Conflict(_) => {
                ApiError::Conflict("A profile with this email already exists".to_string())
            }
            other => other,
        })?;

    Ok(Response::Created(ProfileResponse { data: profile }))
}
