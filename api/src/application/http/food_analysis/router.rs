use super::handlers::{
    analyze_food_image::{__path_analyze_food_image, analyze_food_image},
    clear_analysis_history::{__path_clear_analysis_history, clear_analysis_history},
    get_analysis::{__path_get_analysis, get_analysis},
    get_analysis_history::{__path_get_analysis_history, get_analysis_history},
};
use crate::application::{http::server::app_state::AppState, profile_middleware::profile_middleware};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    analyze_food_image,
    get_analysis_history,
    get_analysis,
    clear_analysis_history
))]
pub struct FoodAnalysisApiDoc;

pub fn food_analysis_routes(state: AppState) -> Router<AppState> {
    let root_path = state.args.server.root_path.clone();

    let analyze = post(analyze_food_image).route_layer(middleware::from_fn_with_state(
        state.clone(),
        profile_middleware,
    ));

    Router::new()
        .route(
            &format!("{}/analyses", root_path),
            get(get_analysis_history)
                .delete(clear_analysis_history)
                .merge(analyze),
        )
        .route(
            &format!("{}/analyses/{{analysis_id}}", root_path),
            get(get_analysis),
        )
}
