use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Invalid portion: {0}% is outside 25..=200")]
    InvalidPortion(u32),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Not found")]
    NotFound,

    #[error("Already exists")]
    AlreadyExists,

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
