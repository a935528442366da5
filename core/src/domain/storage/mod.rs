pub mod entities;
pub mod ports;
pub mod services;

pub use entities::StoredImage;
pub use ports::ImageStore;
