use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::{
    classification::entities::ClassificationResult,
    nutrition::{NutritionEstimate, PortionScale},
    user_profile::entities::UserProfile,
};

#[derive(Debug, Clone)]
pub struct AnalyzeFoodInput {
    pub image_data: Bytes,
    pub portion_pct: u32,
    pub profile: UserProfile,
    pub save_to_history: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GetAnalysisHistoryFilter {
    /// Only records created by this profile name (case-insensitive).
    pub user: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

/// Everything the pipeline computed before the record is assembled.
#[derive(Debug, Clone)]
pub struct AnalysisFindings {
    pub user: String,
    pub classification: ClassificationResult,
    pub nutrition: NutritionEstimate,
    pub portion: PortionScale,
    pub allergy_detected: Vec<String>,
    pub timestamp: DateTime<Utc>,
}
