use axum::extract::{Path, State, rejection::PathRejection};
use nutrilens_core::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{entities::AnalysisRecord, ports::FoodAnalysisService},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::http::server::{
    api_entities::{
        api_error::{ApiError, ApiErrorResponse},
        response::Response,
    },
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAnalysisResponse {
    pub data: AnalysisRecord,
}

#[utoipa::path(
    get,
    path = "/{analysis_id}",
    tag = "food-analysis",
    summary = "Get analysis",
    params(
        ("analysis_id" = Uuid, Path, description = "Analysis ID"),
    ),
    responses(
        (status = 200, body = GetAnalysisResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn get_analysis(
    analysis_id: Result<Path<Uuid>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response<GetAnalysisResponse>, ApiError> {
    let Path(analysis_id) = analysis_id?;
    let record = state
        .service
        .get_analysis(analysis_id)
        .await
        .map_err(|e| match e {
            CoreError::NotFound => {
                ApiError::NotFound("Analysis not found".to_string())
            }
            other => ApiError::from(other),
        })?;

    Ok(Response::OK(GetAnalysisResponse { data: record }))
}
