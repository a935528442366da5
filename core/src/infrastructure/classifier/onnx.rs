use std::{
    path::Path,
    sync::{Mutex, PoisonError},
};

use ort::{
    session::{Session, builder::GraphOptimizationLevel},
    value::Tensor,
};
use tracing::{info, instrument};

use crate::domain::{
    classification::ports::{ImageTensor, InferenceModel},
    common::entities::app_errors::CoreError,
};

fn model_error(e: impl std::fmt::Display) -> CoreError {
    CoreError::ModelUnavailable(e.to_string())
}

/// ONNX Runtime session for the dish classifier. Loaded once at startup;
/// inference calls are serialized through the session mutex.
pub struct OnnxInferenceModel {
    session: Mutex<Session>,
}

impl OnnxInferenceModel {
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        if !path.is_file() {
            return Err(CoreError::ModelUnavailable(format!(
                "model file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(model_error)?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(model_error)?
            .commit_from_file(path)
            .map_err(model_error)?;

        info!(path = %path.display(), "Dish classifier model loaded");

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl InferenceModel for OnnxInferenceModel {
    fn infer(&self, input: &ImageTensor) -> Result<Vec<f32>, CoreError> {
        let tensor =
            Tensor::from_array((input.shape, input.data.clone())).map_err(model_error)?;

        let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
        let outputs = session.run(ort::inputs![tensor]).map_err(model_error)?;

        if outputs.len() == 0 {
            return Err(CoreError::ModelUnavailable("model produced no outputs".into()));
        }
        let (_, probabilities) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(model_error)?;

        Ok(probabilities.to_vec())
    }
}
