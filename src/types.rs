// Error types and their HTTP mapping

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection},
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use crate::upload::UploadError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upload(UploadError::InvalidEncoding)
            | AppError::Upload(UploadError::UnsupportedFormat)
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Upload(UploadError::InvalidLabel(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upload(UploadError::StorageUnavailable) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::Upload(e) => e.code(),
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::PayloadTooLarge(_) => "payload_too_large",
        }
    }

    /// Extractor failures keep axum's message but use our error body.
    fn rejected(status: StatusCode, detail: String) -> Self {
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(detail)
        } else {
            AppError::InvalidRequest(detail)
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for AppError {
    fn from(error: MultipartError) -> Self {
        Self::rejected(error.status(), error.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.code().to_string(),
            detail: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
