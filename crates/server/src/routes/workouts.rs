use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, patch, post};
use axum::{Json, Router};
use catalog::{ChannelCount, NewWorkout, Workout, WorkoutFilter, WorkoutPatch};
use serde::Deserialize;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", get(list))
        .route("/workouts", post(create))
        .route("/workouts/channels", get(channels))
        .route("/workouts/:id", get(fetch))
        .route("/workouts/:id", patch(update))
}

/// Browse filters as they arrive on the wire. Unparseable values are
/// treated as absent, matching the recommendation endpoint.
#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    category: Option<String>,
    intensity: Option<String>,
    primary_target: Option<String>,
    equipment: Option<String>,
    vetted: Option<String>,
    do_not_recommend: Option<String>,
    link_status: Option<String>,
    min_duration: Option<String>,
    max_duration: Option<String>,
    channel_name: Option<String>,
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

impl ListQuery {
    fn into_filter(self) -> WorkoutFilter {
        WorkoutFilter {
            category: self.category.and_then(|c| c.parse().ok()),
            target: self.primary_target.filter(|t| !t.trim().is_empty()),
            intensity: self.intensity.and_then(|i| i.parse().ok()),
            equipment: self.equipment.and_then(|e| e.parse().ok()),
            vetted: self.vetted.as_deref().and_then(parse_bool),
            do_not_recommend: self.do_not_recommend.as_deref().and_then(parse_bool),
            link_status: self.link_status.and_then(|s| s.parse().ok()),
            min_duration: self.min_duration.and_then(|d| d.parse().ok()),
            max_duration: self.max_duration.and_then(|d| d.parse().ok()),
            channel_name: self.channel_name.filter(|c| !c.trim().is_empty()),
            ..WorkoutFilter::default()
        }
    }
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Workout>>, ApiError> {
    Ok(Json(state.store.query_workouts(&query.into_filter()).await?))
}

async fn channels(State(state): State<AppState>) -> Result<Json<Vec<ChannelCount>>, ApiError> {
    Ok(Json(state.store.channels().await?))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Workout>, ApiError> {
    Ok(Json(state.store.get_workout(&id).await?))
}

async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewWorkout>,
) -> Result<(StatusCode, Json<Workout>), ApiError> {
    let workout = state.store.insert_workout(&new).await?;
    Ok((StatusCode::CREATED, Json(workout)))
}

async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<WorkoutPatch>,
) -> Result<Json<Workout>, ApiError> {
    Ok(Json(state.store.update_workout(&id, &patch).await?))
}
