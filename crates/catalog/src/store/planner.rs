//! Weekly planner slots: one optional workout per weekday, upsert on save.

use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::types::{NewPlanSlot, PlanRecord};
use chrono::NaiveDate;


const PLAN_SELECT: &str = r#"
    SELECT
        wp.id, wp.week_start, wp.day, wp.workout_id, wp.warmup_id,
        wp.cooldown_id, wp.completed,
        w.title AS workout_title,
        w.duration_min, w.intensity, w.primary_target,
        wm.title AS warmup_title,
        wc.title AS cooldown_title
    FROM weekly_planner wp
    JOIN workouts w ON wp.workout_id = w.id
    LEFT JOIN workouts wm ON wp.warmup_id = wm.id
    LEFT JOIN workouts wc ON wp.cooldown_id = wc.id
"#;

const DAY_ORDER: &str = r#"
    CASE wp.day
        WHEN 'monday' THEN 1
        WHEN 'tuesday' THEN 2
        WHEN 'wednesday' THEN 3
        WHEN 'thursday' THEN 4
        WHEN 'friday' THEN 5
    END
"#;

impl CatalogStore {
    /// The plan for one week, Monday through Friday. A missing day is a
    /// rest day.
    pub async fn week_plan(&self, week_start: NaiveDate) -> Result<Vec<PlanRecord>> {
        let sql = format!("{PLAN_SELECT} WHERE wp.week_start = ? ORDER BY {DAY_ORDER}");
        let rows = sqlx::query_as::<_, PlanRecord>(&sql)
            .bind(week_start)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Every slot in the weeks between `first_week` and `last_week`
    /// inclusive, for the month view.
    pub async fn plans_between(
        &self,
        first_week: NaiveDate,
        last_week: NaiveDate,
    ) -> Result<Vec<PlanRecord>> {
        let sql = format!(
            "{PLAN_SELECT} WHERE wp.week_start >= ? AND wp.week_start <= ? \
             ORDER BY wp.week_start, {DAY_ORDER}"
        );
        let rows = sqlx::query_as::<_, PlanRecord>(&sql)
            .bind(first_week)
            .bind(last_week)
            .fetch_all(self.pool())
            .await?;
        Ok(rows)
    }

    /// Save a day's plan. Overwrites any existing slot for the same
    /// `(week, day)` and resets its completed flag.
    pub async fn upsert_slot(&self, new: &NewPlanSlot) -> Result<PlanRecord> {
        self.get_workout(&new.workout_id).await?;
        self.ensure_companion(new.warmup_id.as_deref(), "warmup")
            .await?;
        self.ensure_companion(new.cooldown_id.as_deref(), "cooldown")
            .await?;

        sqlx::query(
            r#"
            INSERT OR REPLACE INTO weekly_planner
                (week_start, day, workout_id, warmup_id, cooldown_id, completed)
            VALUES (?, ?, ?, ?, ?, 0)
            "#,
        )
        .bind(new.week_start)
        .bind(new.day)
        .bind(&new.workout_id)
        .bind(&new.warmup_id)
        .bind(&new.cooldown_id)
        .execute(self.pool())
        .await?;

        let sql = format!("{PLAN_SELECT} WHERE wp.week_start = ? AND wp.day = ?");
        let slot = sqlx::query_as::<_, PlanRecord>(&sql)
            .bind(new.week_start)
            .bind(new.day)
            .fetch_one(self.pool())
            .await?;
        Ok(slot)
    }

    /// Mark a slot done (or not done).
    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<PlanRecord> {
        let result = sqlx::query("UPDATE weekly_planner SET completed = ? WHERE id = ?")
            .bind(completed)
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(CatalogError::PlanSlotNotFound(id));
        }

        let sql = format!("{PLAN_SELECT} WHERE wp.id = ?");
        let slot = sqlx::query_as::<_, PlanRecord>(&sql)
            .bind(id)
            .fetch_one(self.pool())
            .await?;
        Ok(slot)
    }

    /// Delete one slot, turning that day back into a rest day.
    pub async fn delete_slot(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM weekly_planner WHERE id = ?")
            .bind(id)
            .execute(self.pool())
            .await?;
        if result.rows_affected() == 0 {
            return Err(CatalogError::PlanSlotNotFound(id));
        }
        Ok(())
    }

    /// Clear every slot of a week.
    pub async fn clear_week(&self, week_start: NaiveDate) -> Result<u64> {
        let result = sqlx::query("DELETE FROM weekly_planner WHERE week_start = ?")
            .bind(week_start)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected())
    }
}
