use axum::{
    extract::{multipart::MultipartRejection, Multipart},
    routing::post,
    Json, Router,
};
use tracing::info;

use crate::models::{AppState, PredictionResponse};
use crate::types::{AppError, AppResult};

pub fn router() -> Router<AppState> {
    Router::new().route("/predict", post(predict))
}

/// POST /predict - classify an uploaded image
///
/// No model is wired in yet: any `image/*` file part receives the same
/// placeholder prediction.
async fn predict(
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<PredictionResponse>> {
    let mut multipart = multipart?;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let is_image = field
            .content_type()
            .and_then(|ct| ct.parse::<mime::Mime>().ok())
            .map(|ct| ct.type_() == mime::IMAGE)
            .unwrap_or(false);
        if !is_image {
            return Err(AppError::InvalidRequest("File must be an image".to_string()));
        }

        let filename = field.file_name().unwrap_or("<unnamed>").to_string();
        let data = field.bytes().await?;
        info!("Received image: {} ({} bytes)", filename, data.len());

        return Ok(Json(PredictionResponse::placeholder()));
    }

    Err(AppError::InvalidRequest("Missing 'file' field".to_string()))
}
