//! Catalog queries and admin mutations on the workouts table.

use super::CatalogStore;
use crate::error::{CatalogError, Result};
use crate::types::{Category, ChannelCount, NewWorkout, Workout, WorkoutFilter, WorkoutPatch};
use sqlx::{QueryBuilder, Sqlite};

impl CatalogStore {
    /// Query the catalog with an arbitrary combination of filters.
    ///
    /// Rows come back ordered by title so the library view reads
    /// alphabetically; the recommendation engine does not care either way.
    pub async fn query_workouts(&self, filter: &WorkoutFilter) -> Result<Vec<Workout>> {
        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM workouts WHERE 1=1");

        if let Some(category) = filter.category {
            qb.push(" AND category = ").push_bind(category);
        }
        if let Some(target) = &filter.target {
            qb.push(" AND (primary_target = ")
                .push_bind(target.clone())
                .push(" OR target_tag1 = ")
                .push_bind(target.clone())
                .push(" OR target_tag2 = ")
                .push_bind(target.clone())
                .push(")");
        }
        if let Some(tag) = &filter.special_tag {
            qb.push(" AND (target_tag1 = ")
                .push_bind(tag.clone())
                .push(" OR target_tag2 = ")
                .push_bind(tag.clone())
                .push(")");
        }
        if let Some(intensity) = filter.intensity {
            qb.push(" AND intensity = ").push_bind(intensity);
        }
        if let Some(equipment) = filter.equipment {
            qb.push(" AND equipment = ").push_bind(equipment);
        }
        if let Some(vetted) = filter.vetted {
            qb.push(" AND vetted = ").push_bind(vetted);
        }
        if let Some(dnr) = filter.do_not_recommend {
            qb.push(" AND do_not_recommend = ").push_bind(dnr);
        }
        if let Some(status) = filter.link_status {
            qb.push(" AND link_status = ").push_bind(status);
        }
        if let Some(min) = filter.min_duration {
            qb.push(" AND duration_min >= ").push_bind(min);
        }
        if let Some(max) = filter.max_duration {
            qb.push(" AND duration_min <= ").push_bind(max);
        }
        if !filter.channels.is_empty() {
            qb.push(" AND channel_name IN (");
            let mut parts = qb.separated(", ");
            for channel in &filter.channels {
                parts.push_bind(channel.clone());
            }
            qb.push(")");
        }
        if let Some(channel) = &filter.channel_name {
            qb.push(" AND channel_name = ").push_bind(channel.clone());
        }
        qb.push(" ORDER BY title");

        let workouts = qb
            .build_query_as::<Workout>()
            .fetch_all(self.pool())
            .await?;
        Ok(workouts)
    }

    /// Fetch a single workout by id.
    pub async fn get_workout(&self, id: &str) -> Result<Workout> {
        sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| CatalogError::WorkoutNotFound { id: id.to_string() })
    }

    /// Look up a workout by its source-video id.
    pub async fn find_by_video_id(&self, video_id: &str) -> Result<Option<Workout>> {
        Ok(
            sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE video_id = ?")
                .bind(video_id)
                .fetch_optional(self.pool())
                .await?,
        )
    }

    /// Insert a new catalog entry. Fails when another workout already
    /// carries the same source-video id.
    pub async fn insert_workout(&self, new: &NewWorkout) -> Result<Workout> {
        let existing: Option<(String,)> =
            sqlx::query_as("SELECT id FROM workouts WHERE video_id = ?")
                .bind(&new.video_id)
                .fetch_optional(self.pool())
                .await?;
        if existing.is_some() {
            return Err(CatalogError::DuplicateVideo {
                video_id: new.video_id.clone(),
            });
        }

        sqlx::query(
            r#"
            INSERT INTO workouts (
                id, video_id, title, channel_name, channel_code, video_url,
                category, primary_target, target_tag1, target_tag2,
                intensity, duration_min, equipment,
                vetted, do_not_recommend, rating, repeat_cooldown_days,
                link_status, last_checked, notes
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.id)
        .bind(&new.video_id)
        .bind(&new.title)
        .bind(&new.channel_name)
        .bind(&new.channel_code)
        .bind(&new.video_url)
        .bind(new.category)
        .bind(&new.primary_target)
        .bind(&new.target_tag1)
        .bind(&new.target_tag2)
        .bind(new.intensity)
        .bind(new.duration_min)
        .bind(new.equipment)
        .bind(new.vetted)
        .bind(new.do_not_recommend)
        .bind(new.rating)
        .bind(new.repeat_cooldown_days)
        .bind(new.link_status)
        .bind(new.last_checked)
        .bind(&new.notes)
        .execute(self.pool())
        .await?;

        self.get_workout(&new.id).await
    }

    /// Apply a partial update against an existing workout and return the
    /// updated row. An empty patch is an error, not a no-op.
    pub async fn update_workout(&self, id: &str, patch: &WorkoutPatch) -> Result<Workout> {
        // 404 before 400: a patch against a missing id reports not-found.
        self.get_workout(id).await?;

        let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("UPDATE workouts SET ");
        let mut fields = qb.separated(", ");
        let mut touched = false;

        macro_rules! set_field {
            ($col:literal, $value:expr) => {
                if let Some(value) = $value {
                    fields.push(concat!($col, " = "));
                    fields.push_bind_unseparated(value.clone());
                    touched = true;
                }
            };
        }

        set_field!("title", &patch.title);
        set_field!("channel_name", &patch.channel_name);
        set_field!("channel_code", &patch.channel_code);
        set_field!("video_url", &patch.video_url);
        set_field!("category", &patch.category);
        set_field!("primary_target", &patch.primary_target);
        set_field!("target_tag1", &patch.target_tag1);
        set_field!("target_tag2", &patch.target_tag2);
        set_field!("intensity", &patch.intensity);
        set_field!("duration_min", &patch.duration_min);
        set_field!("equipment", &patch.equipment);
        set_field!("vetted", &patch.vetted);
        set_field!("do_not_recommend", &patch.do_not_recommend);
        set_field!("rating", &patch.rating);
        set_field!("repeat_cooldown_days", &patch.repeat_cooldown_days);
        set_field!("link_status", &patch.link_status);
        set_field!("last_checked", &patch.last_checked);

        // An empty notes string clears the column.
        if let Some(notes) = &patch.notes {
            fields.push("notes = ");
            let value = if notes.is_empty() {
                None
            } else {
                Some(notes.clone())
            };
            fields.push_bind_unseparated(value);
            touched = true;
        }

        if !touched {
            return Err(CatalogError::EmptyUpdate);
        }

        qb.push(" WHERE id = ").push_bind(id.to_string());
        qb.build().execute(self.pool()).await?;

        self.get_workout(id).await
    }

    /// Channel overview: every channel with its total catalog count,
    /// never filtered.
    pub async fn channels(&self) -> Result<Vec<ChannelCount>> {
        let rows = sqlx::query_as::<_, ChannelCount>(
            r#"
            SELECT channel_name, COUNT(*) AS workout_count
            FROM workouts
            GROUP BY channel_name
            ORDER BY channel_name ASC
            "#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }

    /// Companion candidates for a main workout: vetted, recommendable
    /// warmups or cooldowns targeting the same muscle group (or Full
    /// Body), shortest five first.
    pub async fn companion_pool(&self, category: Category, target: &str) -> Result<Vec<Workout>> {
        let pool = sqlx::query_as::<_, Workout>(
            r#"
            SELECT * FROM workouts
            WHERE category = ?
              AND vetted = 1
              AND do_not_recommend = 0
              AND link_status = 'ok'
              AND (primary_target = ? OR primary_target = 'Full Body')
            ORDER BY duration_min ASC
            LIMIT 5
            "#,
        )
        .bind(category)
        .bind(target)
        .fetch_all(self.pool())
        .await?;
        Ok(pool)
    }

    /// Generate the next free workout id for a channel code, in the form
    /// `YF-<CODE><NN>`.
    pub async fn next_workout_id(&self, channel_code: &str) -> Result<String> {
        let prefix = format!("YF-{channel_code}");
        let latest: Option<(String,)> = sqlx::query_as(
            "SELECT id FROM workouts WHERE id LIKE ? ORDER BY id DESC LIMIT 1",
        )
        .bind(format!("{prefix}%"))
        .fetch_optional(self.pool())
        .await?;

        let next = match latest {
            Some((id,)) => {
                let digits: String = id
                    .chars()
                    .rev()
                    .take_while(|c| c.is_ascii_digit())
                    .collect::<String>()
                    .chars()
                    .rev()
                    .collect();
                digits.parse::<u32>().map_or(1, |n| n + 1)
            }
            None => 1,
        };
        Ok(format!("{prefix}{next:02}"))
    }
}
