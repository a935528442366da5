pub mod allergy;
pub mod classification;
pub mod common;
pub mod dish;
pub mod food_analysis;
pub mod health;
pub mod nutrition;
pub mod storage;
pub mod user_profile;
