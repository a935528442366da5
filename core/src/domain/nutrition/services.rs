use std::sync::{Mutex, PoisonError};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::domain::{dish::entities::DishLabel, nutrition::entities::NutritionEstimate};

pub const MIN_BASE_CALORIES: u32 = 220;
pub const MAX_BASE_CALORIES: u32 = 650;

/// Produces calorie and macro estimates for a classified dish.
///
/// The base calorie value is a synthetic placeholder drawn uniformly from
/// 220..=650 kcal; it does not depend on the dish.
pub struct NutritionEstimator<R = StdRng> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> NutritionEstimator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    pub fn estimate(&self, dish: DishLabel) -> NutritionEstimate {
        let base = self
            .rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(MIN_BASE_CALORIES..=MAX_BASE_CALORIES);

        debug!(dish = %dish, base_calories = base, "Estimated base calories");

        NutritionEstimate::from_calories(base)
    }
}

impl NutritionEstimator<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}
