use std::path::PathBuf;

use tracing::{debug, instrument};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        food_analysis::{entities::AnalysisRecord, ports::HistoryRepository},
    },
    infrastructure::json_store::JsonFileStore,
};

/// Analysis history persisted as a most-recent-first JSON array.
pub struct JsonFileHistoryRepository {
    store: JsonFileStore<AnalysisRecord>,
    capacity: usize,
}

impl JsonFileHistoryRepository {
    pub fn new(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            store: JsonFileStore::new(path),
            capacity: capacity.max(1),
        }
    }
}

impl HistoryRepository for JsonFileHistoryRepository {
    #[instrument(skip(self, record), fields(analysis_id = %record.id))]
    async fn append(&self, record: AnalysisRecord) -> Result<Vec<AnalysisRecord>, CoreError> {
        let capacity = self.capacity;
        let evicted = self
            .store
            .update(move |records| {
                records.insert(0, record);
                Ok(if records.len() > capacity {
                    records.split_off(capacity)
                } else {
                    Vec::new()
                })
            })
            .await?;

        if !evicted.is_empty() {
            debug!(evicted = evicted.len(), "Oldest analyses evicted from history");
        }

        Ok(evicted)
    }

    async fn list(&self) -> Result<Vec<AnalysisRecord>, CoreError> {
        self.store.load().await
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, CoreError> {
        let records = self.store.load().await?;
        Ok(records.into_iter().find(|record| record.id == id))
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<Vec<AnalysisRecord>, CoreError> {
        self.store.update(|records| Ok(std::mem::take(records))).await
    }

    async fn count(&self) -> Result<usize, CoreError> {
        Ok(self.store.load().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::{
        classification::entities::{ClassificationResult, ClassifierMode},
        dish::entities::DishLabel,
        food_analysis::value_objects::AnalysisFindings,
        nutrition::{NutritionEstimate, PortionScale},
    };

    fn record(calories: u32) -> AnalysisRecord {
        AnalysisRecord::from_findings(AnalysisFindings {
            user: "Ada".into(),
            classification: ClassificationResult::new(DishLabel::Milk, 88.0, ClassifierMode::Mock),
            nutrition: NutritionEstimate::from_calories(calories),
            portion: PortionScale::default(),
            allergy_detected: vec!["dairy".into()],
            timestamp: Utc::now(),
        })
    }

    fn repository(dir: &tempfile::TempDir) -> JsonFileHistoryRepository {
        JsonFileHistoryRepository::new(dir.path().join("history.json"), 50)
    }

    #[tokio::test]
    async fn fifty_first_append_evicts_the_oldest() {
        let dir = tempfile::tempdir().expect("tempdir");
        let history = repository(&dir);

        let records: Vec<_> = (0..51).map(|i| record(220 + i)).collect();
        let mut evicted = Vec::new();
        for record in records.clone() {
            evicted.extend(history.append(record).await.expect("append"));
        }

        let stored = history.list().await.expect("list");
        assert_eq!(stored.len(), 50);
        assert_eq!(stored[0], records[50]);
        assert!(!stored.contains(&records[0]));
        assert_eq!(evicted, vec![records[0].clone()]);
    }

    #[tokio::test]
    async fn list_is_stable_without_writes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let history = repository(&dir);
        for calories in [300, 400, 500] {
            history.append(record(calories)).await.expect("append");
        }

        let first = history.list().await.expect("list");
        let second = history.list().await.expect("list");

        assert_eq!(first, second);
        assert_eq!(first.iter().map(|r| r.calories).collect::<Vec<_>>(), vec![500, 400, 300]);
    }

    #[tokio::test]
    async fn history_survives_reopening() {
        let dir = tempfile::tempdir().expect("tempdir");
        let saved = record(333);
        repository(&dir).append(saved.clone()).await.expect("append");

        let reopened = repository(&dir);

        assert_eq!(reopened.get(saved.id).await, Ok(Some(saved)));
        assert_eq!(reopened.count().await, Ok(1));
    }

    #[tokio::test]
    async fn clear_returns_everything_removed() {
        let dir = tempfile::tempdir().expect("tempdir");
        let history = repository(&dir);
        history.append(record(250)).await.expect("append");
        history.append(record(260)).await.expect("append");

        let removed = history.clear().await.expect("clear");

        assert_eq!(removed.len(), 2);
        assert_eq!(history.count().await, Ok(0));
        assert_eq!(history.clear().await, Ok(Vec::new()));
    }

    #[tokio::test]
    async fn records_without_optional_fields_still_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("history.json");
        std::fs::write(
            &path,
            r#"[{
                "id": "01890a5d-ac96-774b-bcce-b302099a8057",
                "timestamp": "2024-05-01T12:00:00Z",
                "user": "Ada",
                "dish": "Apple",
                "confidence": 91.5,
                "calories": 300,
                "carbs_g": 37,
                "protein_g": 15,
                "fat_g": 10,
                "portion_pct": 100
            }]"#,
        )
        .expect("write");

        let records = JsonFileHistoryRepository::new(&path, 50)
            .list()
            .await
            .expect("list");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].image_ref, None);
        assert!(records[0].allergy_detected.is_empty());
    }
}
