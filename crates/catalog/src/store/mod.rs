//! SQLite-backed storage for the workout catalog.
//!
//! `CatalogStore` wraps a `SqlitePool` and is cheap to clone; writers
//! serialize through the pool and the recommendation path performs reads
//! only. Operations are grouped by table:
//! - `workouts`: catalog queries, insert, partial update, channel overview
//! - `history`: append-only session log plus completion statistics
//! - `planner`: weekly plan slots with upsert semantics
//! - `lists`: favorites, watch-later and playlists

mod history;
mod lists;
mod planner;
mod workouts;

pub use lists::ListKind;

use crate::error::Result;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Handle to the catalog database.
#[derive(Clone)]
pub struct CatalogStore {
    pool: SqlitePool,
}

impl CatalogStore {
    /// Open (creating if necessary) the database at `path` and bring the
    /// schema up to date.
    pub async fn open(path: &str) -> Result<Self> {
        let url = format!("sqlite://{path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    /// Fresh in-memory database, fully migrated. A single connection is
    /// required: separate pool connections would each get their own
    /// isolated in-memory database.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
