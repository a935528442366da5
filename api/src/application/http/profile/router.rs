use super::handlers::{
    create_profile::{__path_create_profile, create_profile},
    get_profile::{__path_get_profile, get_profile},
};
use crate::application::http::server::app_state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_profile, get_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles", state.args.server.root_path),
            post(create_profile),
        )
        .route(
            &format!("{}/profiles/{{email}}", state.args.server.root_path),
            get(get_profile),
        )
}
