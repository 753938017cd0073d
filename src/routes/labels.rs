use axum::{extract::State, routing::get, Json, Router};

use crate::models::{AppState, LabelsResponse};

pub fn router() -> Router<AppState> {
    Router::new().route("/labels", get(list_labels))
}

/// GET /labels - categories with their items, plus the total item count
async fn list_labels(State(state): State<AppState>) -> Json<LabelsResponse> {
    Json(LabelsResponse::from(state.registry.as_ref()))
}
