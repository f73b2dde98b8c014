//! Collaborator seams between the engine and storage.
//!
//! The engine only performs reads, expressed through these two traits.
//! `CatalogStore` implements both (see `store_impl`); tests swap in
//! in-memory fakes to drive the engine without a database.

use catalog::{CatalogError, Category, HistoryStats, Workout, WorkoutFilter};
use chrono::NaiveDate;
use std::future::Future;

type Result<T> = std::result::Result<T, CatalogError>;

/// Read access to the workout catalog.
pub trait WorkoutCatalog: Send + Sync {
    /// Query workouts matching the filter. Order does not matter to the
    /// engine.
    fn workouts(
        &self,
        filter: &WorkoutFilter,
    ) -> impl Future<Output = Result<Vec<Workout>>> + Send;

    /// Fetch one workout by id.
    fn workout(&self, id: &str) -> impl Future<Output = Result<Workout>> + Send;

    /// Companion candidates for a main workout: recommendable warmups or
    /// cooldowns matching the target (or Full Body), shortest five first.
    fn companion_pool(
        &self,
        category: Category,
        target: &str,
    ) -> impl Future<Output = Result<Vec<Workout>>> + Send;
}

/// Read access to the append-only session history.
pub trait SessionHistory: Send + Sync {
    /// Lifetime completion statistics for a workout.
    fn stats(&self, workout_id: &str) -> impl Future<Output = Result<HistoryStats>> + Send;

    /// Whether the workout was completed on or after `cutoff`
    /// (inclusive).
    fn completed_since(
        &self,
        workout_id: &str,
        cutoff: NaiveDate,
    ) -> impl Future<Output = Result<bool>> + Send;
}
