use tracing::warn;

use crate::domain::{classification::services::ClassifierBackend, common::ClassifierConfig};

pub mod onnx;

pub use onnx::OnnxInferenceModel;

pub type DefaultClassifier = ClassifierBackend<OnnxInferenceModel>;

/// Picks the classifier once at startup. A missing or unloadable model
/// selects the mock classifier.
pub fn load_classifier(config: &ClassifierConfig) -> DefaultClassifier {
    let Some(path) = config.model_path.as_deref() else {
        warn!("No classifier model configured, using mock classification");
        return ClassifierBackend::mock();
    };

    match OnnxInferenceModel::load(path) {
        Ok(model) => ClassifierBackend::trained(model),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Classifier model unavailable, using mock classification");
            ClassifierBackend::mock()
        }
    }
}
