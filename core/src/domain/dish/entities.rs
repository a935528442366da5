use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

/// Dishes the classifier can recognise. Declaration order matches the
/// model's output index order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
pub enum DishLabel {
    Apple,
    Burger,
    Avocado,
    Bread,
    Milk,
    Pizza,
}

impl DishLabel {
    pub const ALL: [DishLabel; 6] = [
        DishLabel::Apple,
        DishLabel::Burger,
        DishLabel::Avocado,
        DishLabel::Bread,
        DishLabel::Milk,
        DishLabel::Pizza,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DishLabel::Apple => "Apple",
            DishLabel::Burger => "Burger",
            DishLabel::Avocado => "Avocado",
            DishLabel::Bread => "Bread",
            DishLabel::Milk => "Milk",
            DishLabel::Pizza => "Pizza",
        }
    }

    /// Label for a model output index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for DishLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DishLabel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::Invalid(format!("unknown dish label '{}'", s)))
    }
}
