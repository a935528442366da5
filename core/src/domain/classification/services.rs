use std::sync::{Mutex, PoisonError};

use image::RgbImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, warn};

use crate::domain::{
    classification::{
        entities::{ClassificationResult, ClassifierMode},
        ports::{DishClassifier, InferenceModel},
        preprocessing::to_model_input,
    },
    common::entities::app_errors::CoreError,
    dish::entities::DishLabel,
};

const MOCK_CONFIDENCE_MIN: f64 = 85.0;
const MOCK_CONFIDENCE_MAX: f64 = 98.0;

/// Classifier backed by a loaded image model.
pub struct TrainedModelClassifier<M> {
    model: M,
}

impl<M: InferenceModel> TrainedModelClassifier<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }
}

impl<M: InferenceModel> DishClassifier for TrainedModelClassifier<M> {
    fn mode(&self) -> ClassifierMode {
        ClassifierMode::Trained
    }

    fn classify(&self, image: &RgbImage) -> Result<ClassificationResult, CoreError> {
        let input = to_model_input(image)?;
        let probabilities = self.model.infer(&input)?;

        let (index, probability) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .ok_or_else(|| CoreError::ModelUnavailable("model returned no outputs".to_string()))?;

        let dish = DishLabel::from_index(index).ok_or_else(|| {
            CoreError::ModelUnavailable(format!(
                "model output index {} has no dish label",
                index
            ))
        })?;

        debug!(dish = %dish, probability, "Model classification");

        Ok(ClassificationResult::new(
            dish,
            f64::from(probability) * 100.0,
            ClassifierMode::Trained,
        ))
    }
}

/// Stand-in used when no trained model is available: a uniformly random
/// dish with a confidence drawn from 85..=98.
pub struct MockClassifier<R = StdRng> {
    rng: Mutex<R>,
}

impl<R: Rng + Send> MockClassifier<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl MockClassifier<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng + Send> DishClassifier for MockClassifier<R> {
    fn mode(&self) -> ClassifierMode {
        ClassifierMode::Mock
    }

    fn classify(&self, _image: &RgbImage) -> Result<ClassificationResult, CoreError> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        let dish = DishLabel::ALL[rng.gen_range(0..DishLabel::ALL.len())];
        let confidence = rng.gen_range(MOCK_CONFIDENCE_MIN..=MOCK_CONFIDENCE_MAX);

        Ok(ClassificationResult::new(
            dish,
            confidence,
            ClassifierMode::Mock,
        ))
    }
}

/// Classifier chosen once at startup.
///
/// The trained variant keeps a mock fallback so a failing inference call
/// degrades to a mock classification instead of failing the analysis.
/// Image errors are never masked.
pub enum ClassifierBackend<M, R = StdRng> {
    Trained {
        primary: TrainedModelClassifier<M>,
        fallback: MockClassifier<R>,
    },
    Mock(MockClassifier<R>),
}

impl<M: InferenceModel> ClassifierBackend<M, StdRng> {
    pub fn trained(model: M) -> Self {
        ClassifierBackend::Trained {
            primary: TrainedModelClassifier::new(model),
            fallback: MockClassifier::from_entropy(),
        }
    }

    pub fn mock() -> Self {
        ClassifierBackend::Mock(MockClassifier::from_entropy())
    }
}

impl<M: InferenceModel, R: Rng + Send> DishClassifier for ClassifierBackend<M, R> {
    fn mode(&self) -> ClassifierMode {
        match self {
            ClassifierBackend::Trained { .. } => ClassifierMode::Trained,
            ClassifierBackend::Mock(_) => ClassifierMode::Mock,
        }
    }

    fn classify(&self, image: &RgbImage) -> Result<ClassificationResult, CoreError> {
        match self {
            ClassifierBackend::Trained { primary, fallback } => match primary.classify(image) {
                Err(CoreError::ModelUnavailable(reason)) => {
                    warn!(reason = %reason, "Inference failed, using mock classification");
                    fallback.classify(image)
                }
                other => other,
            },
            ClassifierBackend::Mock(mock) => mock.classify(image),
        }
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::domain::classification::ports::MockInferenceModel;

    fn sample_image() -> RgbImage {
        RgbImage::from_pixel(32, 32, Rgb([200, 40, 40]))
    }

    #[test]
    fn trained_classifier_picks_highest_probability() {
        let mut model = MockInferenceModel::new();
        model
            .expect_infer()
            .withf(|input| input.shape == [1, 224, 224, 3])
            .times(1)
            .returning(|_| Ok(vec![0.05, 0.1, 0.05, 0.1, 0.1, 0.6]));

        let result = TrainedModelClassifier::new(model)
            .classify(&sample_image())
            .expect("classifies");

        assert_eq!(result.dish, DishLabel::Pizza);
        assert_eq!(result.mode, ClassifierMode::Trained);
        assert!((result.confidence - 60.0).abs() < 1e-3);
    }

    #[test]
    fn empty_model_output_is_reported_as_unavailable() {
        let mut model = MockInferenceModel::new();
        model.expect_infer().returning(|_| Ok(vec![]));

        let result = TrainedModelClassifier::new(model).classify(&sample_image());

        assert!(matches!(result, Err(CoreError::ModelUnavailable(_))));
    }

    #[test]
    fn output_wider_than_label_set_is_reported_as_unavailable() {
        let mut model = MockInferenceModel::new();
        model
            .expect_infer()
            .returning(|_| Ok(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.1, 0.9]));

        let result = TrainedModelClassifier::new(model).classify(&sample_image());

        assert!(matches!(result, Err(CoreError::ModelUnavailable(_))));
    }

    #[test]
    fn seeded_mock_stays_within_label_set_and_confidence_band() {
        let classifier = MockClassifier::new(StdRng::seed_from_u64(42));

        for _ in 0..200 {
            let result = classifier.classify(&sample_image()).expect("mock result");

            assert!(DishLabel::ALL.contains(&result.dish));
            assert!((85.0..=98.0).contains(&result.confidence));
            assert_eq!(result.mode, ClassifierMode::Mock);
        }
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let first = MockClassifier::new(StdRng::seed_from_u64(7));
        let second = MockClassifier::new(StdRng::seed_from_u64(7));

        for _ in 0..10 {
            assert_eq!(
                first.classify(&sample_image()),
                second.classify(&sample_image())
            );
        }
    }

    #[test]
    fn backend_falls_back_to_mock_when_inference_fails() {
        let mut model = MockInferenceModel::new();
        model
            .expect_infer()
            .returning(|_| Err(CoreError::ModelUnavailable("session crashed".to_string())));

        let backend = ClassifierBackend::Trained {
            primary: TrainedModelClassifier::new(model),
            fallback: MockClassifier::new(StdRng::seed_from_u64(1)),
        };

        let result = backend.classify(&sample_image()).expect("fallback result");

        assert_eq!(backend.mode(), ClassifierMode::Trained);
        assert_eq!(result.mode, ClassifierMode::Mock);
        assert!((85.0..=98.0).contains(&result.confidence));
    }

    #[test]
    fn backend_does_not_mask_invalid_images() {
        let mut model = MockInferenceModel::new();
        model.expect_infer().times(0);

        let backend = ClassifierBackend::Trained {
            primary: TrainedModelClassifier::new(model),
            fallback: MockClassifier::new(StdRng::seed_from_u64(1)),
        };

        let result = backend.classify(&RgbImage::new(0, 0));

        assert!(matches!(result, Err(CoreError::InvalidImage(_))));
    }

    #[test]
    fn mock_backend_reports_mock_mode() {
        let backend: ClassifierBackend<MockInferenceModel, StdRng> =
            ClassifierBackend::Mock(MockClassifier::new(StdRng::seed_from_u64(3)));

        assert_eq!(backend.mode(), ClassifierMode::Mock);
        assert_eq!(
            backend.classify(&sample_image()).expect("mock").mode,
            ClassifierMode::Mock
        );
    }
}
