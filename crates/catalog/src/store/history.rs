//! Append-only session history and the statistics derived from it.

use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::types::{HistoryEntry, HistoryQuery, HistoryRecord, HistoryStats, NewHistoryEntry};
use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};

const HISTORY_SELECT: &str = r#"
    SELECT
        h.id, h.date, h.workout_id, h.warmup_id, h.cooldown_id, h.notes,
        w.title AS workout_title,
        wm.title AS warmup_title,
        wc.title AS cooldown_title
    FROM workout_history h
    LEFT JOIN workouts w ON h.workout_id = w.id
    LEFT JOIN workouts wm ON h.warmup_id = wm.id
    LEFT JOIN workouts wc ON h.cooldown_id = wc.id
"#;

impl CatalogStore {
    /// Append a completed session. The workout must exist; the optional
    /// warmup/cooldown ids must reference entries of the right category.
    pub async fn log_session(&self, new: &NewHistoryEntry) -> Result<HistoryEntry> {
        self.get_workout(&new.workout_id).await?;
        self.ensure_companion(new.warmup_id.as_deref(), "warmup")
            .await?;
        self.ensure_companion(new.cooldown_id.as_deref(), "cooldown")
            .await?;

        let result = sqlx::query(
            r#"
            INSERT INTO workout_history (date, workout_id, warmup_id, cooldown_id, notes)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.date)
        .bind(&new.workout_id)
        .bind(&new.warmup_id)
        .bind(&new.cooldown_id)
        .bind(&new.notes)
        .execute(self.pool())
        .await?;

        let id = result.last_insert_rowid();
        self.get_session(id).await
    }

    /// Verify that an optional companion reference points at a workout
    /// of the expected category.
    pub(crate) async fn ensure_companion(
        &self,
        id: Option<&str>,
        expected: &'static str,
    ) -> Result<()> {
        let Some(id) = id else { return Ok(()) };
        let found: Option<(String,)> =
            sqlx::query_as("SELECT id FROM workouts WHERE id = ? AND category = ?")
                .bind(id)
                .bind(expected)
                .fetch_optional(self.pool())
                .await?;
        match found {
            Some(_) => Ok(()),
            None => Err(CatalogError::CompanionNotFound {
                expected,
                id: id.to_string(),
            }),
        }
    }

    async fn get_session(&self, id: i64) -> Result<HistoryEntry> {
        sqlx::query_as::<_, HistoryEntry>("SELECT * FROM workout_history WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or(CatalogError::HistoryEntryNotFound(id))
    }

    /// List history entries, newest first, joined with workout titles.
    pub async fn history(&self, query: &HistoryQuery) -> Result<Vec<HistoryRecord>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(HISTORY_SELECT);
        qb.push(" WHERE 1=1");
        if let Some(start) = query.start_date {
            qb.push(" AND h.date >= ").push_bind(start);
        }
        if let Some(end) = query.end_date {
            qb.push(" AND h.date <= ").push_bind(end);
        }
        if let Some(workout_id) = &query.workout_id {
            qb.push(" AND h.workout_id = ").push_bind(workout_id.clone());
        }
        qb.push(" ORDER BY h.date DESC, h.id DESC");

        let rows = qb
            .build_query_as::<HistoryRecord>()
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Update the free-text notes of an entry. This is the only field of
    /// a history entry that is ever mutated.
    pub async fn update_session_notes(&self, id: i64, notes: Option<&str>) -> Result<HistoryEntry> {
        self.get_session(id).await?;
        sqlx::query("UPDATE workout_history SET notes = ? WHERE id = ?")
            .bind(notes)
            .bind(id)
            .execute(self.pool())
            .await?;
        self.get_session(id).await
    }

    /// Remove one entry (explicit user action only).
    pub async fn delete_session(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM workout_history WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(CatalogError::HistoryEntryNotFound(id));
        }
        Ok(())
    }

    /// Remove every entry (explicit user action only).
    pub async fn clear_history(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM workout_history")
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }

    /// Completion count and first/last completion dates for a workout.
    pub async fn history_stats(&self, workout_id: &str) -> Result<HistoryStats> {
        let stats = sqlx::query_as::<_, HistoryStats>(
            r#"
            SELECT
                COUNT(*) AS count,
                MIN(date) AS first_date,
                MAX(date) AS last_date
            FROM workout_history
            WHERE workout_id = ?
            "#,
        )
        .bind(workout_id)
        .fetch_one(self.pool())
        .await?;
        Ok(stats)
    }

    /// Whether the workout was completed on or after `cutoff`. The
    /// boundary is inclusive: a completion exactly on the cutoff date
    /// counts.
    pub async fn completed_since(&self, workout_id: &str, cutoff: NaiveDate) -> Result<bool> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM workout_history WHERE workout_id = ? AND date >= ?",
        )
        .bind(workout_id)
        .bind(cutoff)
        .fetch_one(self.pool())
        .await?;
        Ok(count > 0)
    }
}
