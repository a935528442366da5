pub mod classifier;
pub mod history;
pub mod json_store;
pub mod object_storage;
pub mod user_profile;
