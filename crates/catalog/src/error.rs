//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while reading or writing the catalog database.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No workout exists with the given id
    #[error("workout not found: {id}")]
    WorkoutNotFound { id: String },

    /// No history entry exists with the given row id
    #[error("history entry not found: {0}")]
    HistoryEntryNotFound(i64),

    /// No planner slot exists with the given row id
    #[error("plan slot not found: {0}")]
    PlanSlotNotFound(i64),

    /// No playlist exists with the given row id
    #[error("playlist not found: {0}")]
    PlaylistNotFound(i64),

    /// A playlist with this name already exists for the same week
    #[error("playlist '{name}' already exists for that week")]
    PlaylistExists { name: String },

    /// A workout with this source-video id is already in the catalog
    #[error("a workout with video id {video_id} already exists")]
    DuplicateVideo { video_id: String },

    /// The workout is already on the named list (favorites / watch-later)
    #[error("workout {workout_id} is already in {list}")]
    AlreadyListed {
        list: &'static str,
        workout_id: String,
    },

    /// The workout is not on the named list
    #[error("workout {workout_id} is not in {list}")]
    NotListed {
        list: &'static str,
        workout_id: String,
    },

    /// A referenced companion id does not point at a workout of the
    /// expected category
    #[error("{expected} not found: {id}")]
    CompanionNotFound { expected: &'static str, id: String },

    /// A field had a value outside its allowed set
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// An update request carried no fields to change
    #[error("no fields to update")]
    EmptyUpdate,

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Convenience alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
