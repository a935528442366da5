use axum::extract::{Path, State};
use nutrilens_core::domain::user_profile::ports::UserProfileService;

use crate::application::http::{
    profile::handlers::create_profile::ProfileResponse,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/{email}",
    tag = "profile",
    summary = "Get profile",
    params(
        ("email" = String, Path, description = "Profile email, case-insensitive"),
    ),
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_profile(
    Path(email): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(email)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::NotFound(_) => ApiError::NotFound("Profile not found".to_string()),
            other => other,
        })?;

    Ok(Response::OK(ProfileResponse { data: profile }))
}
