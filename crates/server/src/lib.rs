//! # HTTP Server
//!
//! Thin JSON layer over the catalog store and the recommendation
//! engine. Handlers validate and translate; all domain logic lives in
//! the `engine` and `catalog` crates.

pub mod error;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the full application router.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::recommendation::routes())
        .merge(routes::workouts::routes())
        .merge(routes::history::routes())
        .merge(routes::planner::routes())
        .merge(routes::lists::routes())
        .merge(routes::playlists::routes())
        .merge(routes::import::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
