use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    /// Unique key, compared case-insensitively.
    pub email: String,
    pub age: u32,
    pub gender: String,
    /// Comma-separated allergen list as entered by the user.
    pub allergies: String,
    pub medications: String,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    pub fn new(
        name: String,
        email: String,
        age: u32,
        gender: String,
        allergies: String,
        medications: String,
    ) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: generate_uuid_v7(),
            name,
            email,
            age,
            gender,
            allergies,
            medications,
            created_at: now,
        }
    }

    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
