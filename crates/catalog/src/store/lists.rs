//! Favorites, watch-later and weekly playlists.
//!
//! Favorites and watch-later share the same shape (a unique workout
//! reference plus the date it was added), so they go through one pair of
//! helpers parameterized by table name.

use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::types::{ListEntry, Playlist};
use chrono::NaiveDate;

/// The two membership lists a workout can be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Favorites,
    WatchLater,
}

impl ListKind {
    fn table(self) -> &'static str {
        match self {
            ListKind::Favorites => "favorites",
            ListKind::WatchLater => "watch_later",
        }
    }

    fn label(self) -> &'static str {
        match self {
            ListKind::Favorites => "favorites",
            ListKind::WatchLater => "watch later",
        }
    }
}

const PLAYLIST_SELECT: &str = r#"
    SELECT
        p.id, p.name, p.week_start, p.created_date,
        (SELECT COUNT(*) FROM weekly_planner wp WHERE wp.week_start = p.week_start)
            AS workout_count
    FROM playlists p
"#;

fn list_select(kind: ListKind) -> String {
    format!(
        r#"
        SELECT
            l.id, l.workout_id, l.added_date,
            w.title, w.video_url, w.duration_min, w.intensity,
            w.primary_target, w.channel_name, w.category
        FROM {table} l
        JOIN workouts w ON l.workout_id = w.id
        "#,
        table = kind.table()
    )
}

impl CatalogStore {
    /// All entries on a list, most recently added first.
    pub async fn list_entries(&self, kind: ListKind) -> Result<Vec<ListEntry>> {
        let sql = format!("{} ORDER BY l.added_date DESC", list_select(kind));
        let rows = sqlx::query_as::<_, ListEntry>(&sql)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Add a workout to a list. Conflict when it is already there.
    pub async fn add_to_list(&self, kind: ListKind, workout_id: &str) -> Result<ListEntry> {
        self.get_workout(workout_id).await?;

        let sql = format!(
            "SELECT id FROM {} WHERE workout_id = ?",
            kind.table()
        );
        let existing: Option<(i64,)> = sqlx::query_as(&sql)
            .bind(workout_id)
            .fetch_optional(self.pool())
            .await?;
        if existing.is_some() {
            return Err(CatalogError::AlreadyListed {
                list: kind.label(),
                workout_id: workout_id.to_string(),
            });
        }

        let sql = format!(
            "INSERT INTO {} (workout_id, added_date) VALUES (?, datetime('now'))",
            kind.table()
        );
        sqlx::query(&sql).bind(workout_id).execute(self.pool()).await?;

        let sql = format!("{} WHERE l.workout_id = ?", list_select(kind));
        let entry = sqlx::query_as::<_, ListEntry>(&sql)
            .bind(workout_id)
            .fetch_one(self.pool())
            .await?;
        Ok(entry)
    }

    /// Remove a workout from a list.
    pub async fn remove_from_list(&self, kind: ListKind, workout_id: &str) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE workout_id = ?", kind.table());
        let result = sqlx::query(&sql)
            .bind(workout_id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(CatalogError::NotListed {
                list: kind.label(),
                workout_id: workout_id.to_string(),
            });
        }
        Ok(())
    }

    /// Create a playlist for a week. `(name, week)` is unique.
    pub async fn create_playlist(&self, name: &str, week_start: NaiveDate) -> Result<Playlist> {
        self.ensure_playlist_name_free(name, week_start, None).await?;

        let result = sqlx::query(
            "INSERT INTO playlists (name, week_start, created_date) VALUES (?, ?, datetime('now'))",
        )
        .bind(name)
        .bind(week_start)
        .execute(self.pool())
        .await?;

        self.get_playlist(result.last_insert_rowid()).await
    }

    /// Fetch one playlist by row id.
    pub async fn get_playlist(&self, id: i64) -> Result<Playlist> {
        let sql = format!("{PLAYLIST_SELECT} WHERE p.id = ?");
        sqlx::query_as::<_, Playlist>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(CatalogError::PlaylistNotFound(id))
    }

    /// Rename a playlist. Conflict when the new name is already taken for
    /// the same week.
    pub async fn rename_playlist(&self, id: i64, name: &str) -> Result<Playlist> {
        let playlist = self.get_playlist(id).await?;
        self.ensure_playlist_name_free(name, playlist.week_start, Some(id))
            .await?;

        sqlx::query("UPDATE playlists SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool())
            .await?;

        self.get_playlist(id).await
    }

    /// Playlists, optionally restricted to one week, newest first.
    pub async fn playlists(&self, week_start: Option<NaiveDate>) -> Result<Vec<Playlist>> {
        let rows = match week_start {
            Some(week) => {
                let sql =
                    format!("{PLAYLIST_SELECT} WHERE p.week_start = ? ORDER BY p.created_date DESC");
                sqlx::query_as::<_, Playlist>(&sql)
                    .bind(week)
                    .fetch_all(self.pool())
                    .await?
            }
            None => {
                let sql = format!("{PLAYLIST_SELECT} ORDER BY p.created_date DESC");
                sqlx::query_as::<_, Playlist>(&sql)
                    .fetch_all(self.pool())
                    .await?
            }
        };
        Ok(rows)
    }

    async fn ensure_playlist_name_free(
        &self,
        name: &str,
        week_start: NaiveDate,
        exclude_id: Option<i64>,
    ) -> Result<()> {
        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM playlists WHERE name = ? AND week_start = ?")
                .bind(name)
                .bind(week_start)
                .fetch_optional(self.pool())
                .await?;
        match existing {
            Some((id,)) if exclude_id != Some(id) => Err(CatalogError::PlaylistExists {
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }

    pub async fn delete_playlist(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(CatalogError::PlaylistNotFound(id));
        }
        Ok(())
    }
}
