use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use nutrilens_core::domain::user_profile::{entities::UserProfile, ports::UserProfileService};
use tracing::debug;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// Profile of the caller, stored in request extensions
#[derive(Clone, Debug)]
pub struct ProfileContext(pub UserProfile);

/// Resolves the `X-User-Email` header to a registered profile.
/// Missing header is 401, unknown email is 404.
pub async fn profile_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let email = req
        .headers()
        .get(USER_EMAIL_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Unauthorized("Missing X-User-Email header".to_string()))?;

    let profile = state
        .service
        .get_profile(email)
        .await
        .map_err(|e| match ApiError::from(e) {
            ApiError::NotFound(_) => ApiError::NotFound("No profile for this email".to_string()),
            other => other,
        })?;

    debug!(profile_id = %profile.id, "Resolved caller profile");
    req.extensions_mut().insert(ProfileContext(profile));

    Ok(next.run(req).await)
}
