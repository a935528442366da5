pub mod entities;
pub mod services;
pub mod value_objects;

pub use entities::NutritionEstimate;
pub use services::NutritionEstimator;
pub use value_objects::PortionScale;
