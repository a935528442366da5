use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::dish::entities::DishLabel;

/// Which classifier produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    Trained,
    Mock,
}

impl ClassifierMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClassifierMode::Trained => "trained",
            ClassifierMode::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClassificationResult {
    pub dish: DishLabel,
    /// Percentage in 0..=100.
    pub confidence: f64,
    pub mode: ClassifierMode,
}

impl ClassificationResult {
    pub fn new(dish: DishLabel, confidence: f64, mode: ClassifierMode) -> Self {
        let confidence = if confidence.is_nan() {
            0.0
        } else {
            confidence.clamp(0.0, 100.0)
        };

        Self {
            dish,
            confidence,
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confidence_is_kept_within_percentage_bounds() {
        let high = ClassificationResult::new(DishLabel::Apple, 100.4, ClassifierMode::Trained);
        let low = ClassificationResult::new(DishLabel::Apple, -2.0, ClassifierMode::Trained);
        let nan = ClassificationResult::new(DishLabel::Apple, f64::NAN, ClassifierMode::Trained);

        assert_eq!(high.confidence, 100.0);
        assert_eq!(low.confidence, 0.0);
        assert_eq!(nan.confidence, 0.0);
    }
}
