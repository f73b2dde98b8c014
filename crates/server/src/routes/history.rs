use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use catalog::{HistoryEntry, HistoryQuery, HistoryRecord, NewHistoryEntry};
use serde::Deserialize;
use serde_json::json;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/history", get(list))
        .route("/history", post(log))
        .route("/history", delete(clear))
        .route("/history/:id", patch(update_notes))
        .route("/history/:id", delete(remove))
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryRecord>>, ApiError> {
    Ok(Json(state.store.history(&query).await?))
}

async fn log(
    State(state): State<AppState>,
    Json(new): Json<NewHistoryEntry>,
) -> Result<(StatusCode, Json<HistoryEntry>), ApiError> {
    let entry = state.store.log_session(&new).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[derive(Debug, Deserialize)]
struct NotesPatch {
    notes: Option<String>,
}

async fn update_notes(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<NotesPatch>,
) -> Result<Json<HistoryEntry>, ApiError> {
    let entry = state
        .store
        .update_session_notes(id, patch.notes.as_deref())
        .await?;
    Ok(Json(entry))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_session(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn clear(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.store.clear_history().await?;
    Ok(Json(json!({ "deleted": deleted })))
}
