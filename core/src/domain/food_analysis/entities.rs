use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    classification::entities::ClassifierMode, common::generate_uuid_v7, dish::entities::DishLabel,
    food_analysis::value_objects::AnalysisFindings,
};

/// One completed analysis as kept in the history. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Profile name of the user who ran the analysis.
    pub user: String,
    pub dish: DishLabel,
    pub confidence: f64,
    pub calories: u32,
    pub carbs_g: u32,
    pub protein_g: u32,
    pub fat_g: u32,
    pub portion_pct: u32,
    /// Reference to the stored annotated image; absent when it was not stored.
    #[serde(default)]
    pub image_ref: Option<String>,
    #[serde(default)]
    pub allergy_detected: Vec<String>,
}

impl AnalysisRecord {
    pub fn from_findings(findings: AnalysisFindings) -> Self {
        let AnalysisFindings {
            user,
            classification,
            nutrition,
            portion,
            allergy_detected,
            timestamp,
        } = findings;

        Self {
            id: generate_uuid_v7(),
            timestamp,
            user,
            dish: classification.dish,
            confidence: classification.confidence,
            calories: nutrition.calories,
            carbs_g: nutrition.carbs_g,
            protein_g: nutrition.protein_g,
            fat_g: nutrition.fat_g,
            portion_pct: portion.percent(),
            image_ref: None,
            allergy_detected,
        }
    }

    pub fn belongs_to(&self, user: &str) -> bool {
        self.user.eq_ignore_ascii_case(user.trim())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PersistenceStatus {
    Saved,
    /// The caller asked not to keep the analysis.
    Skipped,
    Failed { reason: String },
}

/// Result of one pipeline run, returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisOutcome {
    pub record: AnalysisRecord,
    pub health_tip: String,
    pub classifier: ClassifierMode,
    pub persistence: PersistenceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        classification::entities::ClassificationResult,
        nutrition::{NutritionEstimate, PortionScale},
    };

    fn findings() -> AnalysisFindings {
        AnalysisFindings {
            user: "Ada".into(),
            classification: ClassificationResult::new(DishLabel::Bread, 93.5, ClassifierMode::Mock),
            nutrition: NutritionEstimate::from_calories(400).scale(PortionScale::default()),
            portion: PortionScale::default(),
            allergy_detected: vec!["gluten".into()],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn record_copies_findings_without_image() {
        let record = AnalysisRecord::from_findings(findings());

        assert_eq!(record.dish, DishLabel::Bread);
        assert_eq!(record.calories, 400);
        assert_eq!(record.carbs_g, 50);
        assert_eq!(record.protein_g, 20);
        assert_eq!(record.fat_g, 13);
        assert_eq!(record.portion_pct, 100);
        assert_eq!(record.image_ref, None);
        assert_eq!(record.allergy_detected, vec!["gluten".to_string()]);
        assert_eq!(record.id.get_version_num(), 7);
    }

    #[test]
    fn record_json_uses_flat_field_names() {
        let record = AnalysisRecord::from_findings(findings());
        let json = serde_json::to_value(&record).expect("serialize");

        for field in [
            "id",
            "timestamp",
            "user",
            "dish",
            "confidence",
            "calories",
            "carbs_g",
            "protein_g",
            "fat_g",
            "portion_pct",
            "image_ref",
            "allergy_detected",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["dish"], "Bread");
    }

    #[test]
    fn persistence_status_is_tagged() {
        let failed = PersistenceStatus::Failed {
            reason: "disk full".into(),
        };

        assert_eq!(
            serde_json::to_value(&failed).expect("serialize"),
            serde_json::json!({ "status": "failed", "reason": "disk full" })
        );
        assert_eq!(
            serde_json::to_value(PersistenceStatus::Saved).expect("serialize"),
            serde_json::json!({ "status": "saved" })
        );
    }
}
