//! # Catalog Crate
//!
//! Domain types and SQLite storage for the workout tracker.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Workout, HistoryEntry, PlanSlot, enums)
//! - **store**: `CatalogStore`, the pooled SQLite handle with all table
//!   operations
//! - **error**: Error types for catalog access
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::{CatalogStore, WorkoutFilter};
//!
//! let store = CatalogStore::open("fitrecs.db").await?;
//!
//! let recommendable = store
//!     .query_workouts(&WorkoutFilter::recommendable())
//!     .await?;
//! println!("{} recommendable workouts", recommendable.len());
//! ```

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CatalogError, Result};
pub use store::{CatalogStore, ListKind};
pub use types::{
    // Type alias
    WorkoutId,
    // Enumerations
    Category,
    Equipment,
    Intensity,
    LinkStatus,
    PlanDay,
    // Workouts
    ChannelCount,
    NewWorkout,
    Workout,
    WorkoutFilter,
    WorkoutPatch,
    // History
    HistoryEntry,
    HistoryQuery,
    HistoryRecord,
    HistoryStats,
    NewHistoryEntry,
    // Planner
    NewPlanSlot,
    PlanRecord,
    PlanSlot,
    // Lists
    ListEntry,
    Playlist,
    // Helpers
    month_week_bounds,
    week_start,
};
