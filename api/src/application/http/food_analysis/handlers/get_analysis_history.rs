use axum::extract::{Query, State, rejection::QueryRejection};
use nutrilens_core::domain::food_analysis::{
    entities::AnalysisRecord, ports::FoodAnalysisService,
    value_objects::GetAnalysisHistoryFilter,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::{
    food_analysis::validators::GetAnalysisHistoryParams,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAnalysisHistoryResponse {
    pub data: Vec<AnalysisRecord>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "food-analysis",
    summary = "List analysis history",
    description = "Returns saved analyses, most recent first.",
    params(GetAnalysisHistoryParams),
    responses(
        (status = 200, body = GetAnalysisHistoryResponse),
        (status = 400, body = ApiErrorResponse),
    ),
)]
pub async fn get_analysis_history(
    State(state): State<AppState>,
    params: Result<Query<GetAnalysisHistoryParams>, QueryRejection>,
) -> Result<Response<GetAnalysisHistoryResponse>, ApiError> {
    let Query(params) = params?;
    params
        .validate()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let capacity = state.args.history.capacity;
    if let Some(limit) = params.limit
        && limit as usize > capacity
    {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {capacity}"
        )));
    }

    let records = state
        .service
        .get_analysis_history(GetAnalysisHistoryFilter {
            user: params.user,
            offset: params.offset.map(|offset| offset as usize),
            limit: params.limit.map(|limit| limit as usize),
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetAnalysisHistoryResponse { data: records }))
}
