use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use catalog::{month_week_bounds, week_start, NewPlanSlot, PlanRecord};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/planner", get(week))
        .route("/planner", post(upsert))
        .route("/planner/month", get(month))
        .route("/planner/current", delete(clear_current))
        .route("/planner/:id", patch(set_completed))
        .route("/planner/:id", delete(remove))
}

fn current_week() -> NaiveDate {
    week_start(Local::now().date_naive())
}

#[derive(Debug, Default, Deserialize)]
struct WeekQuery {
    week_start: Option<NaiveDate>,
}

/// One week's plan, defaulting to the week containing today. Any
/// supplied date is snapped to its Monday.
async fn week(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<Vec<PlanRecord>>, ApiError> {
    let week = query.week_start.map_or_else(current_week, week_start);
    Ok(Json(state.store.week_plan(week).await?))
}

#[derive(Debug, Deserialize)]
struct MonthQuery {
    year: i32,
    month: u32,
}

/// Every planned slot in the weeks overlapping a calendar month.
async fn month(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<PlanRecord>>, ApiError> {
    let (first, last) = month_week_bounds(query.year, query.month)
        .ok_or_else(|| ApiError::bad_request(format!("invalid month {}-{}", query.year, query.month)))?;
    Ok(Json(state.store.plans_between(first, last).await?))
}

async fn upsert(
    State(state): State<AppState>,
    Json(new): Json<NewPlanSlot>,
) -> Result<(StatusCode, Json<PlanRecord>), ApiError> {
    let slot = state.store.upsert_slot(&new).await?;
    Ok((StatusCode::CREATED, Json(slot)))
}

#[derive(Debug, Deserialize)]
struct CompletedPatch {
    completed: bool,
}

async fn set_completed(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<CompletedPatch>,
) -> Result<Json<PlanRecord>, ApiError> {
    Ok(Json(state.store.set_completed(id, patch.completed).await?))
}

async fn clear_current(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.store.clear_week(current_week()).await?;
    Ok(Json(json!({ "deleted": deleted })))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_slot(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
