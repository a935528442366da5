use tracing::info;

use crate::{
    domain::{
        allergy::OverlayFont,
        classification::ports::DishClassifier,
        common::{NutrilensConfig, entities::app_errors::CoreError, services::Service},
        dish::DishCatalog,
        food_analysis::ports::HistoryRepository,
        nutrition::NutritionEstimator,
    },
    infrastructure::{
        classifier::{DefaultClassifier, load_classifier},
        history::JsonFileHistoryRepository,
        object_storage::ImageStoreBackend,
        user_profile::JsonFileUserProfileRepository,
    },
};

pub type NutrilensService = Service<
    DefaultClassifier,
    ImageStoreBackend,
    JsonFileHistoryRepository,
    JsonFileUserProfileRepository,
>;

/// Wires the configured adapters into the application service.
pub async fn create_service(config: NutrilensConfig) -> Result<NutrilensService, CoreError> {
    if config.history.capacity == 0 {
        return Err(CoreError::Invalid(
            "history capacity must be at least 1".into(),
        ));
    }

    let classifier = load_classifier(&config.classifier);
    let image_store = ImageStoreBackend::from_config(&config.object_storage);
    let history_repository =
        JsonFileHistoryRepository::new(config.history.path.clone(), config.history.capacity);
    let profile_repository = JsonFileUserProfileRepository::new(config.profiles.path.clone());
    let overlay_font = OverlayFont::load(&config.overlay);

    // An unreadable history file fails startup.
    let history_entries = history_repository.count().await?;

    info!(
        classifier = classifier.mode().as_str(),
        history = %config.history.path.display(),
        history_capacity = config.history.capacity,
        history_entries,
        profiles = %config.profiles.path.display(),
        builtin_font = overlay_font.is_builtin(),
        "Service initialized"
    );

    Ok(Service::new(
        classifier,
        image_store,
        history_repository,
        profile_repository,
        NutritionEstimator::from_entropy(),
        DishCatalog::standard(),
        overlay_font,
    ))
}
