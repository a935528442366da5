use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_analysis::{
        entities::{AnalysisOutcome, AnalysisRecord},
        value_objects::{AnalyzeFoodInput, GetAnalysisHistoryFilter},
    },
};

pub trait FoodAnalysisService: Send + Sync {
    fn analyze_food(
        &self,
        input: AnalyzeFoodInput,
    ) -> impl Future<Output = Result<AnalysisOutcome, CoreError>> + Send;

    fn get_analysis_history(
        &self,
        filter: GetAnalysisHistoryFilter,
    ) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;

    fn get_analysis(
        &self,
        analysis_id: Uuid,
    ) -> impl Future<Output = Result<AnalysisRecord, CoreError>> + Send;

    /// Removes every record and its stored image. Returns how many were removed.
    fn clear_analysis_history(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}

/// Bounded, most-recent-first analysis history.
pub trait HistoryRepository: Send + Sync {
    /// Inserts at the head and returns the records evicted from the tail.
    fn append(
        &self,
        record: AnalysisRecord,
    ) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;

    fn list(&self) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;

    fn get(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<AnalysisRecord>, CoreError>> + Send;

    /// Removes all records and returns them.
    fn clear(&self) -> impl Future<Output = Result<Vec<AnalysisRecord>, CoreError>> + Send;

    fn count(&self) -> impl Future<Output = Result<usize, CoreError>> + Send;
}
