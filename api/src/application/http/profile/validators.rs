use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProfileValidator {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    #[schema(example = "Ada")]
    pub name: String,

    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[validate(range(min = 1, max = 130, message = "age must be between 1 and 130"))]
    #[schema(example = 36)]
    pub age: u32,

    #[serde(default)]
    #[validate(length(max = 50))]
    pub gender: String,

    /// Comma-separated allergens, e.g. `gluten, dairy`.
    #[serde(default)]
    #[validate(length(max = 500))]
    #[schema(example = "gluten, dairy")]
    pub allergies: String,

    #[serde(default)]
    #[validate(length(max = 500))]
    pub medications: String,
}
