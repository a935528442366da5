use std::sync::Arc;

use bytes::Bytes;
use tokio::task;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    allergy::{annotate_allergy_warning, check_allergies},
    classification::{
        entities::ClassificationResult, ports::DishClassifier, preprocessing::decode_image,
    },
    common::{entities::app_errors::CoreError, generate_timestamp, services::Service},
    food_analysis::{
        composer::{compose, encode_png},
        entities::{AnalysisOutcome, AnalysisRecord, PersistenceStatus},
        ports::{FoodAnalysisService, HistoryRepository},
        value_objects::{AnalysisFindings, AnalyzeFoodInput, GetAnalysisHistoryFilter},
    },
    nutrition::{NutritionEstimate, PortionScale},
    storage::ports::ImageStore,
    user_profile::ports::UserProfileRepository,
};

/// Result of the CPU-bound part of an analysis.
struct Inspected {
    classification: ClassificationResult,
    nutrition: NutritionEstimate,
    allergy_detected: Vec<String>,
    /// Annotated image as PNG, only encoded when the analysis is saved.
    png: Option<Result<Bytes, CoreError>>,
}

impl<C, IS, H, P> Service<C, IS, H, P>
where
    C: DishClassifier + 'static,
{
    /// Decodes, classifies, estimates and annotates on the blocking pool.
    async fn inspect(
        &self,
        image_data: Bytes,
        portion: PortionScale,
        allergies: String,
        encode: bool,
    ) -> Result<Inspected, CoreError> {
        let classifier = Arc::clone(&self.classifier);
        let estimator = Arc::clone(&self.nutrition_estimator);
        let catalog = Arc::clone(&self.catalog);
        let font = Arc::clone(&self.overlay_font);

        task::spawn_blocking(move || -> Result<Inspected, CoreError> {
            let mut image = decode_image(&image_data)?;

            let classification = classifier.classify(&image)?;
            let nutrition = estimator.estimate(classification.dish).scale(portion);

            let allergy_detected = check_allergies(&catalog, classification.dish, &allergies);
            annotate_allergy_warning(&mut image, &allergy_detected, &font);

            Ok(Inspected {
                classification,
                nutrition,
                allergy_detected,
                png: encode.then(|| encode_png(&image)),
            })
        })
        .await
        .map_err(|e| CoreError::Internal(format!("analysis task failed: {e}")))?
    }
}

impl<C, IS, H, P> Service<C, IS, H, P>
where
    IS: ImageStore,
{
    /// Deletes the stored images of records that left the history.
    /// Failures are logged; the records are already gone.
    async fn discard_images(&self, records: &[AnalysisRecord]) {
        for record in records {
            let Some(reference) = record.image_ref.as_deref() else {
                continue;
            };

            if let Err(e) = self.image_store.delete_image(reference).await {
                warn!(
                    analysis_id = %record.id,
                    reference = %reference,
                    error = %e,
                    "Failed to delete stored image"
                );
            }
        }
    }
}

impl<C, IS, H, P> FoodAnalysisService for Service<C, IS, H, P>
where
    C: DishClassifier + 'static,
    IS: ImageStore,
    H: HistoryRepository,
    P: UserProfileRepository,
{
    #[instrument(
        skip(self, input),
        fields(
            user = %input.profile.name,
            portion_pct = input.portion_pct,
            save_to_history = input.save_to_history,
        )
    )]
    async fn analyze_food(&self, input: AnalyzeFoodInput) -> Result<AnalysisOutcome, CoreError> {
        let portion = PortionScale::new(input.portion_pct)?;

        let Inspected {
            classification,
            nutrition,
            allergy_detected,
            png,
        } = self.inspect(
            input.image_data,
            portion,
            input.profile.allergies.clone(),
            input.save_to_history,
        )
        .await?;

        let (timestamp, _) = generate_timestamp();
        let findings = AnalysisFindings {
            user: input.profile.name.clone(),
            classification,
            nutrition,
            portion,
            allergy_detected,
            timestamp,
        };
        let health_tip = self.catalog.health_tip(classification.dish).to_string();

        let Some(png) = png else {
            let record = AnalysisRecord::from_findings(findings);
            info!(
                analysis_id = %record.id,
                dish = %record.dish,
                "Analysis completed without saving"
            );

            return Ok(AnalysisOutcome {
                record,
                health_tip,
                classifier: classification.mode,
                persistence: PersistenceStatus::Skipped,
            });
        };

        let composed = compose(self.image_store.as_ref(), findings, png).await;
        let mut record = composed.record;
        let mut failure = composed.persistence.err();

        match self.history_repository.append(record.clone()).await {
            Ok(evicted) => self.discard_images(&evicted).await,
            Err(e) => {
                // The record is not in the history, so its image would be orphaned.
                self.discard_images(std::slice::from_ref(&record)).await;
                record = AnalysisRecord {
                    image_ref: None,
                    ..record
                };
                failure = Some(e);
            }
        }

        let persistence = match failure {
            None => PersistenceStatus::Saved,
            Some(e) => {
                warn!(analysis_id = %record.id, error = %e, "Analysis was not fully persisted");
                PersistenceStatus::Failed {
                    reason: e.to_string(),
                }
            }
        };

        info!(
            analysis_id = %record.id,
            dish = %record.dish,
            confidence = record.confidence,
            calories = record.calories,
            allergies = record.allergy_detected.len(),
            "Analysis completed"
        );

        Ok(AnalysisOutcome {
            record,
            health_tip,
            classifier: classification.mode,
            persistence,
        })
    }

    #[instrument(skip(self))]
    async fn get_analysis_history(
        &self,
        filter: GetAnalysisHistoryFilter,
    ) -> Result<Vec<AnalysisRecord>, CoreError> {
        let records = self.history_repository.list().await?;

        let records = records
            .into_iter()
            .filter(|record| {
                filter
                    .user
                    .as_deref()
                    .is_none_or(|user| record.belongs_to(user))
            })
            .skip(filter.offset.unwrap_or(0))
            .take(filter.limit.unwrap_or(usize::MAX))
            .collect();

        Ok(records)
    }

    #[instrument(skip(self))]
    async fn get_analysis(&self, analysis_id: Uuid) -> Result<AnalysisRecord, CoreError> {
        self.history_repository
            .get(analysis_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self))]
    async fn clear_analysis_history(&self) -> Result<usize, CoreError> {
        let removed = self.history_repository.clear().await?;
        self.discard_images(&removed).await;

        info!(removed = removed.len(), "Analysis history cleared");
        Ok(removed.len())
    }
}
