use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, IntoParams, ToSchema, Validate)]
#[into_params(parameter_in = Query)]
pub struct GetAnalysisHistoryParams {
    /// Only analyses created by this profile name.
    #[schema(example = "Ada")]
    pub user: Option<String>,
    #[schema(example = 0)]
    pub offset: Option<u32>,
    /// At most the configured history capacity.
    #[schema(example = 20)]
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: Option<u32>,
}

/// Multipart form accepted by `POST /analyses`. Documentation only; the
/// handler reads the fields from the multipart stream.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeFoodImageForm {
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Portion size in percent of a standard serving, 25..=200.
    #[schema(example = 100)]
    pub portion_pct: u32,
    /// Whether to keep the analysis in the history. Defaults to `true`.
    #[schema(example = true)]
    pub save: Option<bool>,
}
