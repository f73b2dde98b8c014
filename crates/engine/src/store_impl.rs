//! Collaborator trait implementations for the SQLite-backed store.

use crate::traits::{SessionHistory, WorkoutCatalog};
use catalog::{CatalogError, CatalogStore, Category, HistoryStats, Workout, WorkoutFilter};
use chrono::NaiveDate;

impl WorkoutCatalog for CatalogStore {
    async fn workouts(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>, CatalogError> {
        self.query_workouts(filter).await
    }

    async fn workout(&self, id: &str) -> Result<Workout, CatalogError> {
        self.get_workout(id).await
    }

    async fn companion_pool(
        &self,
        category: Category,
        target: &str,
    ) -> Result<Vec<Workout>, CatalogError> {
        CatalogStore::companion_pool(self, category, target).await
    }
}

impl SessionHistory for CatalogStore {
    async fn stats(&self, workout_id: &str) -> Result<HistoryStats, CatalogError> {
        self.history_stats(workout_id).await
    }

    async fn completed_since(
        &self,
        workout_id: &str,
        cutoff: NaiveDate,
    ) -> Result<bool, CatalogError> {
        CatalogStore::completed_since(self, workout_id, cutoff).await
    }
}
