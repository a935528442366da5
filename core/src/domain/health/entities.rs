use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::classification::entities::ClassifierMode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReadinessStatus {
    pub classifier: ClassifierMode,
    pub history_entries: usize,
}
