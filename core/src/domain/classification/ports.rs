use image::RgbImage;

use crate::domain::{
    classification::entities::{ClassificationResult, ClassifierMode},
    common::entities::app_errors::CoreError,
};

/// Side length of the square grid the model consumes.
pub const MODEL_INPUT_SIZE: u32 = 224;

/// Normalised NHWC tensor, `[1, 224, 224, 3]`, values in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTensor {
    pub shape: [usize; 4],
    pub data: Vec<f32>,
}

/// A loaded image model returning one probability per dish label.
#[cfg_attr(test, mockall::automock)]
pub trait InferenceModel: Send + Sync {
    fn infer(&self, input: &ImageTensor) -> Result<Vec<f32>, CoreError>;
}

/// Turns a decoded image into a dish classification.
#[cfg_attr(test, mockall::automock)]
pub trait DishClassifier: Send + Sync {
    fn mode(&self) -> ClassifierMode;

    fn classify(&self, image: &RgbImage) -> Result<ClassificationResult, CoreError>;
}
