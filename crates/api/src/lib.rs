//! HTTP API for the Tandem multi-agent pipeline.
//!
//! This crate exposes the pipeline to web clients. The UI itself lives
//! elsewhere; this is the in-process seam it talks to.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/v1/queries` - Run a query through the pipeline
//!   (`mode`: `"multi"` for the full plan-and-route pipeline, `"simple"`
//!   for the single-agent responder)
//!
//! # Architecture
//!
//! ```text
//! Client (web UI)
//!    │
//!    ▼
//! ┌─────────────────┐
//! │   API Gateway   │ ◄── this crate (Axum)
//! └────────┬────────┘
//!          │
//!    ┌─────┴──────────────┐
//!    ▼                    ▼
//! ┌─────────────┐  ┌─────────────────┐
//! │ Coordinator │  │ SimpleResponder │
//! │ (multi mode)│  │  (simple mode)  │
//! └─────────────┘  └─────────────────┘
//! ```

pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use state::AppState;

/// Create the API router with all routes configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health))
        .route("/api/v1/queries", post(routes::run_query))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the API server on the given address.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> anyhow::Result<()> {
    let router = create_router(state);

    info!(%addr, "Starting Tandem API server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
