use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Local;
use engine::{CompanionPair, RawRecommendQuery, Recommendation, RecommendCriteria};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/recommendation/today", get(today))
        .route("/recommendation/companions/:id", get(companions))
}

/// Pick today's workout. All query parameters are optional and
/// unparseable values are treated as absent.
async fn today(
    State(state): State<AppState>,
    Query(raw): Query<RawRecommendQuery>,
) -> Result<Json<Recommendation>, ApiError> {
    let criteria = RecommendCriteria::from_raw(&raw);
    let today = Local::now().date_naive();
    // The rng must stay Send while the future is suspended, which rules
    // out thread_rng here.
    let mut rng = StdRng::from_entropy();
    let recommendation = state.engine.recommend(&criteria, today, &mut rng).await?;
    Ok(Json(recommendation))
}

/// Warmup/cooldown pair for an already-chosen workout.
async fn companions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CompanionPair>, ApiError> {
    let mut rng = StdRng::from_entropy();
    let pair = state.engine.companions_for(&id, &mut rng).await?;
    Ok(Json(pair))
}
