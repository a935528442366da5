pub mod catalog;
pub mod entities;

pub use catalog::DishCatalog;
pub use entities::DishLabel;
