use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use importer::ImportSummary;
use serde::Deserialize;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/import/csv", post(workouts))
        .route("/import/history", post(history))
}

/// Body is optional; without it the importer reads the default export
/// next to the server.
#[derive(Debug, Default, Deserialize)]
struct ImportRequest {
    file: Option<String>,
}

async fn workouts(
    State(state): State<AppState>,
    body: Option<Json<ImportRequest>>,
) -> Result<Json<ImportSummary>, ApiError> {
    let path = body
        .and_then(|Json(req)| req.file)
        .unwrap_or_else(|| "workouts.csv".to_string());
    let summary = importer::import_workouts_file(&state.store, &path).await?;
    Ok(Json(summary))
}

async fn history(
    State(state): State<AppState>,
    body: Option<Json<ImportRequest>>,
) -> Result<Json<ImportSummary>, ApiError> {
    let path = body
        .and_then(|Json(req)| req.file)
        .unwrap_or_else(|| "history.csv".to_string());
    let summary = importer::import_history_file(&state.store, &path).await?;
    Ok(Json(summary))
}
