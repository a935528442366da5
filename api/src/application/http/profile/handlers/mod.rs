pub mod create_profile;
pub mod get_profile;
