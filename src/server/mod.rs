//! HTTP surface: router construction and the serve loop.

pub mod error;
pub mod handlers;

use std::path::PathBuf;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Flat folder downloads land in; created at startup.
    pub download_dir: PathBuf,
}

/// Builds the application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/info", post(handlers::info))
        .route("/download", get(handlers::download))
        .route("/download-mp3", get(handlers::download_mp3))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

/// Binds `addr` and serves until the process exits.
pub async fn run_server(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let listener = TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", addr);
    log::info!("  POST /info          - format/metadata lookup");
    log::info!("  GET  /download      - fetch a selected format");
    log::info!("  GET  /download-mp3  - best audio as MP3");

    axum::serve(listener, app).await?;

    Ok(())
}
