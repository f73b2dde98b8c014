//! # CSV Importer
//!
//! Bulk ingestion of the catalog and history spreadsheets.
//!
//! Two entry points mirror the two export files:
//!
//! - [`import_workouts`] loads catalog rows, normalizing every field
//!   and classifying legacy yoga uploads by keyword.
//! - [`import_history`] loads completed-session rows, validating each
//!   referenced workout.
//!
//! Both are tolerant of dirty rows: a row that cannot be imported is
//! counted and reported in the [`ImportSummary`], never aborting the
//! rest of the file.

mod error;
pub mod normalize;

pub use error::{ImportError, Result};

use catalog::{CatalogError, CatalogStore, Category, NewHistoryEntry, NewWorkout};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use normalize::{
    channel_code_from_url, extract_channel_code, extract_video_id, is_yoga_content,
    normalize_category, normalize_equipment, normalize_flag, normalize_intensity,
    normalize_link_status, parse_date, parse_rating,
};

/// Outcome of one import run.
#[derive(Debug, Default, Serialize)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
}

impl ImportSummary {
    fn reject(&mut self, message: String) {
        warn!("{message}");
        self.errors.push(message);
        self.skipped += 1;
    }
}

/// One row of the catalog spreadsheet. Every column is optional text;
/// normalization decides what each cell means.
#[derive(Debug, Default, Deserialize)]
struct WorkoutRow {
    #[serde(rename = "Workout_ID", default)]
    workout_id: String,
    #[serde(rename = "YT_ID", default)]
    video_id: String,
    #[serde(rename = "Workout_Title", default)]
    title: String,
    #[serde(rename = "YT_Title", default)]
    video_title: String,
    #[serde(rename = "Uploader_Name", default)]
    channel_name: String,
    #[serde(rename = "Channel_URL", default)]
    channel_url: String,
    #[serde(rename = "Video_URL", default)]
    video_url: String,
    #[serde(rename = "Type", default)]
    category: String,
    #[serde(rename = "Primary_Target", default)]
    primary_target: String,
    #[serde(rename = "Target_Tag1", default)]
    target_tag1: String,
    #[serde(rename = "Target_Tag2", default)]
    target_tag2: String,
    #[serde(rename = "Intensity", default)]
    intensity: String,
    #[serde(rename = "Duration_Min", default)]
    duration_min: String,
    #[serde(rename = "Equipment", default)]
    equipment: String,
    #[serde(rename = "Vetted", default)]
    vetted: String,
    #[serde(rename = "Do_Not_Recommend", default)]
    do_not_recommend: String,
    #[serde(rename = "Rating", default)]
    rating: String,
    #[serde(rename = "Repeat_Cooldown_Days", default)]
    repeat_cooldown_days: String,
    #[serde(rename = "Link_Status", default)]
    link_status: String,
    #[serde(rename = "Last_Checked", default)]
    last_checked: String,
}

/// One row of the history spreadsheet.
#[derive(Debug, Default, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Date", default)]
    date: String,
    #[serde(rename = "Workout_ID", default)]
    workout_id: String,
    #[serde(rename = "Warmup_ID", default)]
    warmup_id: String,
    #[serde(rename = "Cooldown_ID", default)]
    cooldown_id: String,
    #[serde(rename = "Notes", default)]
    notes: String,
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Import catalog rows from a CSV file on disk.
pub async fn import_workouts_file(
    store: &CatalogStore,
    path: impl AsRef<Path>,
) -> Result<ImportSummary> {
    let file = std::fs::File::open(path)?;
    import_workouts(store, file).await
}

/// Import history rows from a CSV file on disk.
pub async fn import_history_file(
    store: &CatalogStore,
    path: impl AsRef<Path>,
) -> Result<ImportSummary> {
    let file = std::fs::File::open(path)?;
    import_history(store, file).await
}

/// Import catalog rows from any CSV reader.
pub async fn import_workouts<R: Read>(store: &CatalogStore, reader: R) -> Result<ImportSummary> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut summary = ImportSummary::default();

    for record in csv.deserialize::<WorkoutRow>() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                summary.reject(format!("unreadable row: {err}"));
                continue;
            }
        };
        import_workout_row(store, row, &mut summary).await?;
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "workout import finished"
    );
    Ok(summary)
}

async fn import_workout_row(
    store: &CatalogStore,
    row: WorkoutRow,
    summary: &mut ImportSummary,
) -> Result<()> {
    let Some(video_id) = non_blank(&row.video_id).or_else(|| extract_video_id(&row.video_url))
    else {
        summary.reject(format!(
            "row has no video id (title {:?})",
            non_blank(&row.title).or_else(|| non_blank(&row.video_title))
        ));
        return Ok(());
    };

    let id = match resolve_workout_id(store, &row).await? {
        Some(id) => id,
        None => {
            // Earlier import of the same spreadsheet; not an error.
            summary.skipped += 1;
            return Ok(());
        }
    };

    let title = non_blank(&row.title)
        .or_else(|| non_blank(&row.video_title))
        .unwrap_or_else(|| "Untitled".to_string());
    let channel_name = non_blank(&row.channel_name).unwrap_or_else(|| "Unknown".to_string());

    let mut category = normalize_category(&row.category);
    if category == Category::Workout && is_yoga_content(&title, &channel_name) {
        category = Category::Yoga;
    }

    let new = NewWorkout {
        channel_code: extract_channel_code(&id),
        video_url: non_blank(&row.video_url)
            .unwrap_or_else(|| format!("https://www.youtube.com/watch?v={video_id}")),
        video_id,
        title,
        channel_name,
        category,
        primary_target: non_blank(&row.primary_target).unwrap_or_else(|| "Full Body".to_string()),
        target_tag1: non_blank(&row.target_tag1),
        target_tag2: non_blank(&row.target_tag2),
        intensity: normalize_intensity(&row.intensity),
        duration_min: row.duration_min.trim().parse().unwrap_or(0),
        equipment: normalize_equipment(&row.equipment),
        vetted: normalize_flag(&row.vetted),
        do_not_recommend: normalize_flag(&row.do_not_recommend),
        rating: parse_rating(&row.rating),
        repeat_cooldown_days: row.repeat_cooldown_days.trim().parse().unwrap_or(5),
        link_status: normalize_link_status(&row.link_status),
        last_checked: parse_date(&row.last_checked),
        notes: None,
        id,
    };

    match store.insert_workout(&new).await {
        Ok(_) => summary.imported += 1,
        Err(CatalogError::DuplicateVideo { .. }) => summary.skipped += 1,
        Err(err) => summary.reject(format!("could not import {}: {err}", new.id)),
    }
    Ok(())
}

/// Pick the id a row will be stored under.
///
/// Returns `None` when the row's video is already in the catalog. A
/// missing or already-taken spreadsheet id gets a freshly generated
/// one so re-imports never clobber existing entries.
async fn resolve_workout_id(store: &CatalogStore, row: &WorkoutRow) -> Result<Option<String>> {
    let video_id = non_blank(&row.video_id).or_else(|| extract_video_id(&row.video_url));
    if let Some(video_id) = video_id {
        if store.find_by_video_id(&video_id).await?.is_some() {
            return Ok(None);
        }
    }

    match non_blank(&row.workout_id) {
        Some(id) => match store.get_workout(&id).await {
            Ok(_) => {
                let code = extract_channel_code(&id).unwrap_or_else(|| "UNK".to_string());
                Ok(Some(store.next_workout_id(&code).await?))
            }
            Err(CatalogError::WorkoutNotFound { .. }) => Ok(Some(id)),
            Err(err) => Err(err.into()),
        },
        None => {
            let code = channel_code_from_url(&row.channel_url).unwrap_or_else(|| "UNK".to_string());
            Ok(Some(store.next_workout_id(&code).await?))
        }
    }
}

/// Import completed-session rows from any CSV reader.
pub async fn import_history<R: Read>(store: &CatalogStore, reader: R) -> Result<ImportSummary> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut summary = ImportSummary::default();

    for record in csv.deserialize::<HistoryRow>() {
        let row = match record {
            Ok(row) => row,
            Err(err) => {
                summary.reject(format!("unreadable row: {err}"));
                continue;
            }
        };

        let Some(workout_id) = non_blank(&row.workout_id) else {
            summary.reject("history row missing workout id".to_string());
            continue;
        };
        let Some(date) = parse_date(&row.date) else {
            summary.reject(format!("invalid date {:?} for {workout_id}", row.date));
            continue;
        };

        let entry = NewHistoryEntry {
            date,
            workout_id,
            warmup_id: non_blank(&row.warmup_id),
            cooldown_id: non_blank(&row.cooldown_id),
            notes: non_blank(&row.notes),
        };
        match store.log_session(&entry).await {
            Ok(_) => summary.imported += 1,
            Err(err @ (CatalogError::WorkoutNotFound { .. }
            | CatalogError::CompanionNotFound { .. })) => {
                summary.reject(format!("could not log {}: {err}", entry.workout_id));
            }
            Err(err) => return Err(err.into()),
        }
    }

    info!(
        imported = summary.imported,
        skipped = summary.skipped,
        "history import finished"
    );
    Ok(summary)
}
