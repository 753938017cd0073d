use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::models::{AppState, UploadRequest, UploadResponse};
use crate::types::AppResult;
use crate::upload::handle_upload;

pub fn router() -> Router<AppState> {
    Router::new().route("/upload", post(upload_image))
}

/// POST /upload - store a base64 image under its label prefix
async fn upload_image(
    State(state): State<AppState>,
    payload: Result<Json<UploadRequest>, JsonRejection>,
) -> AppResult<Json<UploadResponse>> {
    let Json(request) = payload?;
    info!("Upload request received for label '{}'", request.label);

    let key = handle_upload(
        &state.registry,
        state.store.as_ref(),
        &request.image_base64,
        &request.label,
    )
    .await?;

    Ok(Json(UploadResponse {
        success: true,
        s3_key: key.into_string(),
        label: request.label,
    }))
}
