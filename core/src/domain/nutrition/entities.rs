use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::nutrition::value_objects::PortionScale;

/// Share of calories from each macro, and the kcal per gram used to turn
/// that share into grams.
const CARBS_PERCENT: u32 = 50;
const PROTEIN_PERCENT: u32 = 20;
const FAT_PERCENT: u32 = 30;
const KCAL_PER_GRAM_CARBS: u32 = 4;
const KCAL_PER_GRAM_PROTEIN: u32 = 4;
const KCAL_PER_GRAM_FAT: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct NutritionEstimate {
    pub calories: u32,
    pub carbs_g: u32,
    pub protein_g: u32,
    pub fat_g: u32,
}

fn grams(calories: u32, percent: u32, kcal_per_gram: u32) -> u32 {
    let grams = u64::from(calories) * u64::from(percent) / (100 * u64::from(kcal_per_gram));
    u32::try_from(grams).unwrap_or(u32::MAX)
}

impl NutritionEstimate {
    /// Splits a calorie total into macros with fixed ratios, truncating
    /// each gram value.
    pub fn from_calories(calories: u32) -> Self {
        Self {
            calories,
            carbs_g: grams(calories, CARBS_PERCENT, KCAL_PER_GRAM_CARBS),
            protein_g: grams(calories, PROTEIN_PERCENT, KCAL_PER_GRAM_PROTEIN),
            fat_g: grams(calories, FAT_PERCENT, KCAL_PER_GRAM_FAT),
        }
    }

    /// Calories implied by the macro grams.
    pub fn macro_calories(&self) -> u32 {
        self.carbs_g * KCAL_PER_GRAM_CARBS
            + self.protein_g * KCAL_PER_GRAM_PROTEIN
            + self.fat_g * KCAL_PER_GRAM_FAT
    }

    /// Each field scaled independently by the portion.
    pub fn scale(&self, portion: PortionScale) -> Self {
        Self {
            calories: portion.apply(self.calories),
            carbs_g: portion.apply(self.carbs_g),
            protein_g: portion.apply(self.protein_g),
            fat_g: portion.apply(self.fat_g),
        }
    }
}
