use std::sync::Arc;

use crate::domain::{allergy::OverlayFont, dish::DishCatalog, nutrition::NutritionEstimator};

/// Shared application service. Every domain service trait is implemented on
/// this type; its generic parameters are the adapters chosen at startup.
pub struct Service<C, IS, H, P> {
    pub(crate) classifier: Arc<C>,
    pub(crate) image_store: Arc<IS>,
    pub(crate) history_repository: Arc<H>,
    pub(crate) profile_repository: Arc<P>,
    pub(crate) nutrition_estimator: Arc<NutritionEstimator>,
    pub(crate) catalog: Arc<DishCatalog>,
    pub(crate) overlay_font: Arc<OverlayFont>,
}

impl<C, IS, H, P> Service<C, IS, H, P> {
    pub fn new(
        classifier: C,
        image_store: IS,
        history_repository: H,
        profile_repository: P,
        nutrition_estimator: NutritionEstimator,
        catalog: DishCatalog,
        overlay_font: OverlayFont,
    ) -> Self {
        Self {
            classifier: Arc::new(classifier),
            image_store: Arc::new(image_store),
            history_repository: Arc::new(history_repository),
            profile_repository: Arc::new(profile_repository),
            nutrition_estimator: Arc::new(nutrition_estimator),
            catalog: Arc::new(catalog),
            overlay_font: Arc::new(overlay_font),
        }
    }
}

impl<C, IS, H, P> Clone for Service<C, IS, H, P> {
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            image_store: Arc::clone(&self.image_store),
            history_repository: Arc::clone(&self.history_repository),
            profile_repository: Arc::clone(&self.profile_repository),
            nutrition_estimator: Arc::clone(&self.nutrition_estimator),
            catalog: Arc::clone(&self.catalog),
            overlay_font: Arc::clone(&self.overlay_font),
        }
    }
}
