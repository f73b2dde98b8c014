use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, patch};
use axum::{Json, Router};
use catalog::{week_start, Playlist};
use chrono::{Local, NaiveDate};
use serde::Deserialize;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/playlists", get(list).post(create))
        .route("/playlists/:id", get(fetch))
        .route("/playlists/:id", patch(rename))
        .route("/playlists/:id", delete(remove))
}

#[derive(Debug, Default, Deserialize)]
struct PlaylistQuery {
    week_start: Option<NaiveDate>,
}

async fn list(
    State(state): State<AppState>,
    Query(query): Query<PlaylistQuery>,
) -> Result<Json<Vec<Playlist>>, ApiError> {
    Ok(Json(state.store.playlists(query.week_start).await?))
}

#[derive(Debug, Deserialize)]
struct NewPlaylist {
    name: String,
    week_start: Option<NaiveDate>,
}

/// Create a playlist, defaulting to the current week.
async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewPlaylist>,
) -> Result<(StatusCode, Json<Playlist>), ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("playlist name is required"));
    }
    let week = body
        .week_start
        .unwrap_or_else(|| week_start(Local::now().date_naive()));
    let playlist = state.store.create_playlist(body.name.trim(), week).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

async fn fetch(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Playlist>, ApiError> {
    Ok(Json(state.store.get_playlist(id).await?))
}

#[derive(Debug, Deserialize)]
struct RenamePlaylist {
    name: String,
}

async fn rename(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<RenamePlaylist>,
) -> Result<Json<Playlist>, ApiError> {
    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("playlist name is required"));
    }
    let playlist = state.store.rename_playlist(id, body.name.trim()).await?;
    Ok(Json(playlist))
}

async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.store.delete_playlist(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
