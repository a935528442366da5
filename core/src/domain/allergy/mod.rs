pub mod overlay;
pub mod services;
pub mod value_objects;

pub use overlay::{OverlayFont, annotate_allergy_warning};
pub use services::check_allergies;
pub use value_objects::AllergyProfile;
