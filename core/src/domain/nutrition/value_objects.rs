use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

pub const MIN_PORTION_PCT: u32 = 25;
pub const MAX_PORTION_PCT: u32 = 200;

/// User-chosen portion size as a percentage of a standard serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "u32", into = "u32")]
pub struct PortionScale(u32);

impl PortionScale {
    pub fn new(percent: u32) -> Result<Self, CoreError> {
        if !(MIN_PORTION_PCT..=MAX_PORTION_PCT).contains(&percent) {
            return Err(CoreError::InvalidPortion(percent));
        }

        Ok(Self(percent))
    }

    pub fn percent(&self) -> u32 {
        self.0
    }

    /// `floor(value * percent / 100)`.
    pub fn apply(&self, value: u32) -> u32 {
        let scaled = u64::from(value) * u64::from(self.0) / 100;
        u32::try_from(scaled).unwrap_or(u32::MAX)
    }
}

impl Default for PortionScale {
    fn default() -> Self {
        Self(100)
    }
}

impl TryFrom<u32> for PortionScale {
    type Error = CoreError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PortionScale> for u32 {
    fn from(value: PortionScale) -> Self {
        value.0
    }
}
