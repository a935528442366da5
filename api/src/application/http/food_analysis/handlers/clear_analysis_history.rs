use axum::extract::State;
use nutrilens_core::domain::food_analysis::ports::FoodAnalysisService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ClearAnalysisHistoryResponse {
    pub removed: usize,
}

#[utoipa::path(
    delete,
    path = "",
    tag = "food-analysis",
    summary = "Clear analysis history",
    description = "Removes every saved analysis together with its stored image.",
    responses(
        (status = 200, body = ClearAnalysisHistoryResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn clear_analysis_history(
    State(state): State<AppState>,
) -> Result<Response<ClearAnalysisHistoryResponse>, ApiError> {
    let removed = state
        .service
        .clear_analysis_history()
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ClearAnalysisHistoryResponse { removed }))
}
