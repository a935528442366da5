use crate::domain::{
    classification::ports::DishClassifier,
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::ports::HistoryRepository,
    health::{entities::ReadinessStatus, ports::HealthCheckService},
};

impl<C, IS, H, P> HealthCheckService for Service<C, IS, H, P>
where
    C: DishClassifier,
    IS: Send + Sync,
    H: HistoryRepository,
    P: Send + Sync,
{
    async fn readiness(&self) -> Result<ReadinessStatus, CoreError> {
        Ok(ReadinessStatus {
            classifier: self.classifier.mode(),
            history_entries: self.history_repository.count().await?,
        })
    }
}
