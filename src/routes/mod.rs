//! API Routes
//!
//! - `/`, `/health` - Health checks
//! - `/labels` - Label taxonomy for the item picker
//! - `/upload` - Store a labelled training image
//! - `/predict` - Classification (placeholder)

pub mod health;
pub mod labels;
pub mod predict;
pub mod upload;

use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server.cors_allowed_origins);
    let body_limit = state.config.server.max_upload_bytes;

    Router::new()
        .merge(health::router())
        .merge(labels::router())
        .merge(upload::router())
        .merge(predict::router())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
