pub mod food_analysis;
pub mod health;
pub mod profile;
pub mod server;
