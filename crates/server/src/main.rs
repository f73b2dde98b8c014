//! Server entry point.
//!
//! Configuration comes from the environment (a `.env` file is honored):
//! `FITRECS_DB` for the SQLite path, `FITRECS_ADDR` for the listen
//! address.

use anyhow::Result;
use catalog::CatalogStore;
use server::{app, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,server=debug,engine=debug")),
        )
        .init();

    let db_path = std::env::var("FITRECS_DB").unwrap_or_else(|_| "fitrecs.db".to_string());
    let addr = std::env::var("FITRECS_ADDR").unwrap_or_else(|_| "127.0.0.1:3001".to_string());

    info!("opening catalog at {db_path}");
    let store = CatalogStore::open(&db_path).await?;
    let state = AppState::new(store);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
