//! Favorites and watch-later expose the same surface; each endpoint is
//! a thin wrapper fixing the [`ListKind`].

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{delete, get};
use axum::{Json, Router};
use catalog::{ListEntry, ListKind};
use serde::Deserialize;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/:workout_id", delete(remove_favorite))
        .route("/watchlater", get(list_watch_later).post(add_watch_later))
        .route("/watchlater/:workout_id", delete(remove_watch_later))
}

#[derive(Debug, Deserialize)]
struct AddRequest {
    workout_id: String,
}

async fn list(state: AppState, kind: ListKind) -> Result<Json<Vec<ListEntry>>, ApiError> {
    Ok(Json(state.store.list_entries(kind).await?))
}

async fn add(
    state: AppState,
    kind: ListKind,
    body: AddRequest,
) -> Result<(StatusCode, Json<ListEntry>), ApiError> {
    let entry = state.store.add_to_list(kind, &body.workout_id).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

async fn remove(state: AppState, kind: ListKind, workout_id: String) -> Result<StatusCode, ApiError> {
    state.store.remove_from_list(kind, &workout_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn list_favorites(State(state): State<AppState>) -> Result<Json<Vec<ListEntry>>, ApiError> {
    list(state, ListKind::Favorites).await
}

async fn add_favorite(
    State(state): State<AppState>,
    Json(body): Json<AddRequest>,
) -> Result<(StatusCode, Json<ListEntry>), ApiError> {
    add(state, ListKind::Favorites, body).await
}

async fn remove_favorite(
    State(state): State<AppState>,
    Path(workout_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    remove(state, ListKind::Favorites, workout_id).await
}

async fn list_watch_later(State(state): State<AppState>) -> Result<Json<Vec<ListEntry>>, ApiError> {
    list(state, ListKind::WatchLater).await
}

async fn add_watch_later(
    State(state): State<AppState>,
    Json(body): Json<AddRequest>,
) -> Result<(StatusCode, Json<ListEntry>), ApiError> {
    add(state, ListKind::WatchLater, body).await
}

async fn remove_watch_later(
    State(state): State<AppState>,
    Path(workout_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    remove(state, ListKind::WatchLater, workout_id).await
}
