//! Core domain types for the workout catalog.
//!
//! A video-based workout carries everything the recommendation engine
//! filters and scores on: category, target muscle groups, intensity,
//! duration, equipment, vetting flags, rating and repeat cooldown.
//! Enum-valued columns are stored as lowercase TEXT and round-trip through
//! `sqlx::Type`; `FromStr` accepts the same lowercase spellings, so query
//! input parses with `.parse()`.

use crate::error::CatalogError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable primary key of a workout (e.g. `YF-FM04`), referenced by
/// history, planner, favorites and watch-later rows.
pub type WorkoutId = String;

// =============================================================================
// Enumerations
// =============================================================================

/// What kind of session a catalog entry is.
///
/// `Yoga` is canonical: it is assigned at ingestion time (or by the
/// backfill migration), so filtering never needs keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Category {
    Workout,
    Warmup,
    Cooldown,
    Yoga,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Equipment {
    None,
    Bands,
    Dumbbells,
    Other,
}

/// Health of the source-video link, maintained by an external checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum LinkStatus {
    Ok,
    Suspected,
    Dead,
    Private,
}

macro_rules! lowercase_from_str {
    ($ty:ident, $field:literal, { $($text:literal => $variant:ident),+ $(,)? }) => {
        impl FromStr for $ty {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(CatalogError::InvalidValue {
                        field: $field.to_string(),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let text = match self {
                    $($ty::$variant => $text,)+
                };
                f.write_str(text)
            }
        }
    };
}

lowercase_from_str!(Category, "category", {
    "workout" => Workout,
    "warmup" => Warmup,
    "cooldown" => Cooldown,
    "yoga" => Yoga,
});

lowercase_from_str!(Intensity, "intensity", {
    "low" => Low,
    "medium" => Medium,
    "high" => High,
});

lowercase_from_str!(Equipment, "equipment", {
    "none" => None,
    "bands" => Bands,
    "dumbbells" => Dumbbells,
    "other" => Other,
});

lowercase_from_str!(LinkStatus, "link_status", {
    "ok" => Ok,
    "suspected" => Suspected,
    "dead" => Dead,
    "private" => Private,
});

// =============================================================================
// Workouts
// =============================================================================

/// A catalog entry for one workout video.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Workout {
    pub id: WorkoutId,
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub channel_code: Option<String>,
    pub video_url: String,
    pub category: Category,
    pub primary_target: String,
    pub target_tag1: Option<String>,
    pub target_tag2: Option<String>,
    pub intensity: Intensity,
    pub duration_min: i64,
    pub equipment: Equipment,
    pub vetted: bool,
    pub do_not_recommend: bool,
    /// Personal rating, 1 (meh) to 4 (favorite)
    pub rating: Option<i64>,
    /// Minimum day-gap before this workout may be recommended again;
    /// zero or negative disables the cooldown entirely
    pub repeat_cooldown_days: i64,
    pub link_status: LinkStatus,
    pub last_checked: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl Workout {
    /// True when the requested target matches either secondary tag.
    pub fn has_tag(&self, target: &str) -> bool {
        self.target_tag1.as_deref() == Some(target) || self.target_tag2.as_deref() == Some(target)
    }
}

/// Insert payload for a new workout (all fields supplied by the caller;
/// the importer fills defaults before it gets here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWorkout {
    pub id: WorkoutId,
    pub video_id: String,
    pub title: String,
    pub channel_name: String,
    pub channel_code: Option<String>,
    pub video_url: String,
    pub category: Category,
    pub primary_target: String,
    pub target_tag1: Option<String>,
    pub target_tag2: Option<String>,
    pub intensity: Intensity,
    pub duration_min: i64,
    pub equipment: Equipment,
    #[serde(default)]
    pub vetted: bool,
    #[serde(default)]
    pub do_not_recommend: bool,
    pub rating: Option<i64>,
    #[serde(default = "default_cooldown_days")]
    pub repeat_cooldown_days: i64,
    #[serde(default = "default_link_status")]
    pub link_status: LinkStatus,
    pub last_checked: Option<NaiveDate>,
    pub notes: Option<String>,
}

fn default_cooldown_days() -> i64 {
    5
}

fn default_link_status() -> LinkStatus {
    LinkStatus::Ok
}

/// Field-wise partial update of a workout. `None` leaves the column
/// untouched; for `notes` an empty string clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutPatch {
    pub title: Option<String>,
    pub channel_name: Option<String>,
    pub channel_code: Option<String>,
    pub video_url: Option<String>,
    pub category: Option<Category>,
    pub primary_target: Option<String>,
    pub target_tag1: Option<String>,
    pub target_tag2: Option<String>,
    pub intensity: Option<Intensity>,
    pub duration_min: Option<i64>,
    pub equipment: Option<Equipment>,
    pub vetted: Option<bool>,
    pub do_not_recommend: Option<bool>,
    pub rating: Option<i64>,
    pub repeat_cooldown_days: Option<i64>,
    pub link_status: Option<LinkStatus>,
    pub last_checked: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Query filter over the workouts table. Every field is optional and
/// only constrains the query when present; `target` matches the primary
/// target OR either secondary tag, `special_tag` only the tags.
#[derive(Debug, Clone, Default)]
pub struct WorkoutFilter {
    pub category: Option<Category>,
    pub target: Option<String>,
    pub special_tag: Option<String>,
    pub intensity: Option<Intensity>,
    pub equipment: Option<Equipment>,
    pub vetted: Option<bool>,
    pub do_not_recommend: Option<bool>,
    pub link_status: Option<LinkStatus>,
    pub min_duration: Option<i64>,
    pub max_duration: Option<i64>,
    pub channels: Vec<String>,
    pub channel_name: Option<String>,
}

impl WorkoutFilter {
    /// The hard filters every recommendation candidate must pass.
    pub fn recommendable() -> Self {
        Self {
            vetted: Some(true),
            do_not_recommend: Some(false),
            link_status: Some(LinkStatus::Ok),
            ..Self::default()
        }
    }
}

/// One row of the channel overview: channel name and how many catalog
/// entries it has.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ChannelCount {
    pub channel_name: String,
    pub workout_count: i64,
}

// =============================================================================
// Session history
// =============================================================================

/// Append-only record of a completed session.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct HistoryEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub workout_id: WorkoutId,
    pub warmup_id: Option<WorkoutId>,
    pub cooldown_id: Option<WorkoutId>,
    pub notes: Option<String>,
}

/// History entry joined with the titles of the referenced workouts,
/// as returned to listing callers.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct HistoryRecord {
    pub id: i64,
    pub date: NaiveDate,
    pub workout_id: WorkoutId,
    pub warmup_id: Option<WorkoutId>,
    pub cooldown_id: Option<WorkoutId>,
    pub notes: Option<String>,
    pub workout_title: Option<String>,
    pub warmup_title: Option<String>,
    pub cooldown_title: Option<String>,
}

/// Insert payload for logging a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewHistoryEntry {
    pub date: NaiveDate,
    pub workout_id: WorkoutId,
    pub warmup_id: Option<WorkoutId>,
    pub cooldown_id: Option<WorkoutId>,
    pub notes: Option<String>,
}

/// Optional constraints for history listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub workout_id: Option<WorkoutId>,
}

/// Per-workout completion statistics derived from the history table.
#[derive(Debug, Clone, Default, Serialize, sqlx::FromRow)]
pub struct HistoryStats {
    pub count: i64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

// =============================================================================
// Weekly planner
// =============================================================================

/// Plannable weekday. Weekends are rest days and have no slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum PlanDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

lowercase_from_str!(PlanDay, "day", {
    "monday" => Monday,
    "tuesday" => Tuesday,
    "wednesday" => Wednesday,
    "thursday" => Thursday,
    "friday" => Friday,
});

/// One planned day in a week. Unique per `(week_start, day)`.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PlanSlot {
    pub id: i64,
    pub week_start: NaiveDate,
    pub day: PlanDay,
    pub workout_id: WorkoutId,
    pub warmup_id: Option<WorkoutId>,
    pub cooldown_id: Option<WorkoutId>,
    pub completed: bool,
}

/// Plan slot joined with display fields of the planned workout.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlanRecord {
    pub id: i64,
    pub week_start: NaiveDate,
    pub day: PlanDay,
    pub workout_id: WorkoutId,
    pub warmup_id: Option<WorkoutId>,
    pub cooldown_id: Option<WorkoutId>,
    pub completed: bool,
    pub workout_title: String,
    pub duration_min: i64,
    pub intensity: Intensity,
    pub primary_target: String,
    pub warmup_title: Option<String>,
    pub cooldown_title: Option<String>,
}

/// Upsert payload for a plan slot; saving over an existing `(week, day)`
/// replaces it and resets the completed flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPlanSlot {
    pub week_start: NaiveDate,
    pub day: PlanDay,
    pub workout_id: WorkoutId,
    pub warmup_id: Option<WorkoutId>,
    pub cooldown_id: Option<WorkoutId>,
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Monday of the weeks containing the first and last day of a month.
/// Used by the planner month view to find every overlapping week.
pub fn month_week_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    let last = next_month.pred_opt()?;
    Some((week_start(first), week_start(last)))
}

// =============================================================================
// Lists & playlists
// =============================================================================

/// A favorites or watch-later row joined with workout display fields.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ListEntry {
    pub id: i64,
    pub workout_id: WorkoutId,
    pub added_date: NaiveDateTime,
    pub title: String,
    pub video_url: String,
    pub duration_min: i64,
    pub intensity: Intensity,
    pub primary_target: String,
    pub channel_name: String,
    pub category: Category,
}

/// A named playlist anchored to a week. `workout_count` is the number of
/// planner slots scheduled for that week.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub week_start: NaiveDate,
    pub created_date: NaiveDateTime,
    pub workout_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_parse_lowercase_only() {
        assert_eq!("yoga".parse::<Category>().unwrap(), Category::Yoga);
        assert_eq!("high".parse::<Intensity>().unwrap(), Intensity::High);
        assert_eq!("bands".parse::<Equipment>().unwrap(), Equipment::Bands);
        assert_eq!("dead".parse::<LinkStatus>().unwrap(), LinkStatus::Dead);
        assert!("Yoga".parse::<Category>().is_err());
        assert!("extreme".parse::<Intensity>().is_err());
    }

    #[test]
    fn enums_display_round_trips() {
        for cat in [
            Category::Workout,
            Category::Warmup,
            Category::Cooldown,
            Category::Yoga,
        ] {
            assert_eq!(cat.to_string().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn week_start_is_monday() {
        // 2026-08-30 is a Sunday
        let sunday = NaiveDate::from_ymd_opt(2026, 8, 30).unwrap();
        assert_eq!(
            week_start(sunday),
            NaiveDate::from_ymd_opt(2026, 8, 24).unwrap()
        );
        let monday = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn month_bounds_cover_overlapping_weeks() {
        // February 2026 starts on a Sunday and ends on a Saturday
        let (first, last) = month_week_bounds(2026, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2026, 1, 26).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2026, 2, 23).unwrap());
    }

    #[test]
    fn has_tag_checks_both_tags() {
        let workout = Workout {
            id: "YF-AA01".into(),
            video_id: "abc12345678".into(),
            title: "Upper Body Blast".into(),
            channel_name: "Test Channel".into(),
            channel_code: None,
            video_url: "https://example.com".into(),
            category: Category::Workout,
            primary_target: "Upper Body".into(),
            target_tag1: Some("Arms".into()),
            target_tag2: Some("Shoulders".into()),
            intensity: Intensity::Medium,
            duration_min: 30,
            equipment: Equipment::None,
            vetted: true,
            do_not_recommend: false,
            rating: None,
            repeat_cooldown_days: 5,
            link_status: LinkStatus::Ok,
            last_checked: None,
            notes: None,
        };
        assert!(workout.has_tag("Arms"));
        assert!(workout.has_tag("Shoulders"));
        assert!(!workout.has_tag("Legs"));
    }
}
