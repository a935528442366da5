use crate::application::http::{
    food_analysis::router::FoodAnalysisApiDoc, health::HealthApiDoc, profile::router::ProfileApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NutriLens API"
    ),
    nest(
        (path = "/analyses", api = FoodAnalysisApiDoc),
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
