use axum::{
    Extension,
    extract::{Multipart, State},
};
use bytes::Bytes;
use nutrilens_core::domain::food_analysis::{
    entities::AnalysisOutcome, ports::FoodAnalysisService, value_objects::AnalyzeFoodInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    http::{
        food_analysis::validators::AnalyzeFoodImageForm,
        server::{
            api_entities::{
                api_error::{ApiError, ApiErrorResponse},
                response::Response,
            },
            app_state::AppState,
        },
    },
    profile_middleware::ProfileContext,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct AnalyzeFoodResponse {
    pub data: AnalysisOutcome,
}

#[utoipa::path(
    post,
    path = "",
    tag = "food-analysis",
    summary = "Analyze food from image",
    description = "Classifies the dish in the uploaded image, estimates its nutrition for the given portion, checks it against the caller's allergies and, unless `save` is false, stores the annotated image and the record in the history.",
    request_body(content = AnalyzeFoodImageForm, content_type = "multipart/form-data"),
    params(
        ("X-User-Email" = String, Header, description = "Email of a registered profile"),
    ),
    responses(
        (status = 200, body = AnalyzeFoodResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 401, body = ApiErrorResponse),
        (status = 404, body = ApiErrorResponse),
    ),
)]
pub async fn analyze_food_image(
    State(state): State<AppState>,
    Extension(ProfileContext(profile)): Extension<ProfileContext>,
    mut multipart: Multipart,
) -> Result<Response<AnalyzeFoodResponse>, ApiError> {
    let mut image_data: Option<Bytes> = None;
    let mut portion_pct: Option<u32> = None;
    let mut save_to_history = true;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;
                image_data = Some(data);
            }
            "portion_pct" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read portion_pct: {}", e))
                })?;
                portion_pct = Some(value.trim().parse().map_err(|_| {
                    ApiError::BadRequest("portion_pct must be a whole number".to_string())
                })?);
            }
            "save" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read save: {}", e)))?;
                save_to_history = value.trim().parse().map_err(|_| {
                    ApiError::BadRequest("save must be true or false".to_string())
                })?;
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;
    let portion_pct =
        portion_pct.ok_or_else(|| ApiError::BadRequest("Missing portion_pct field".to_string()))?;

    let outcome = state
        .service
        .analyze_food(AnalyzeFoodInput {
            image_data,
            portion_pct,
            profile,
            save_to_history,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(AnalyzeFoodResponse { data: outcome }))
}
