use axum::{routing::get, Json, Router};

use crate::models::{AppState, HealthResponse};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

async fn root() -> Json<HealthResponse> {
    Json(HealthResponse::new("ok"))
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new("healthy"))
}
