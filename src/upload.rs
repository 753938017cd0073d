//! Upload Pipeline
//!
//! `decode -> sniff -> check label -> build key -> store`. Every step before
//! the store write is local, so a failure anywhere leaves nothing behind and
//! the store sees at most one write per call.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::image::{detect_format, ImageFormat};
use crate::labels::LabelRegistry;
use crate::storage::ObjectStore;

const KEY_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Invalid base64 image data")]
    InvalidEncoding,

    #[error("Invalid image format")]
    UnsupportedFormat,

    #[error("Invalid label: {0}")]
    InvalidLabel(String),

    #[error("Failed to upload image")]
    StorageUnavailable,
}

impl UploadError {
    /// Stable identifier clients can branch on.
    pub fn code(&self) -> &'static str {
        match self {
            UploadError::InvalidEncoding => "invalid_encoding",
            UploadError::UnsupportedFormat => "unsupported_format",
            UploadError::InvalidLabel(_) => "invalid_label",
            UploadError::StorageUnavailable => "storage_unavailable",
        }
    }
}

/// `<label>/<uuid>_<YYYYMMDD_HHMMSS>.<ext>`, generated once per stored image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObjectKey(String);

impl StoredObjectKey {
    pub fn build(label: &str, format: ImageFormat, id: Uuid, at: DateTime<Utc>) -> Self {
        Self(format!(
            "{}/{}_{}.{}",
            label,
            id,
            at.format(KEY_TIMESTAMP_FORMAT),
            format.extension()
        ))
    }

    pub fn generate(label: &str, format: ImageFormat) -> Self {
        Self::build(label, format, Uuid::new_v4(), Utc::now())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for StoredObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Run one upload through the pipeline and return the key it was stored under.
pub async fn handle_upload(
    registry: &LabelRegistry,
    store: &dyn ObjectStore,
    image_base64: &str,
    label: &str,
) -> Result<StoredObjectKey, UploadError> {
    let data = BASE64.decode(image_base64.trim()).map_err(|e| {
        warn!("Rejected upload for '{}': invalid base64 ({})", label, e);
        UploadError::InvalidEncoding
    })?;

    let format = detect_format(&data);
    if !format.is_known() {
        warn!(
            "Rejected upload for '{}': unrecognized image signature ({} bytes)",
            label,
            data.len()
        );
        return Err(UploadError::UnsupportedFormat);
    }

    if !registry.is_valid_label(label) {
        warn!("Rejected upload: unknown label '{}'", label);
        return Err(UploadError::InvalidLabel(label.to_string()));
    }

    let key = StoredObjectKey::generate(label, format);
    let content_type = format.content_type();

    info!(
        "Uploading {} image ({} bytes) to {}/{}",
        format,
        data.len(),
        store.location(),
        key
    );

    if let Err(e) = store.put(key.as_str(), &data, &content_type).await {
        error!("Storage write failed for {}: {}", key, e);
        return Err(UploadError::StorageUnavailable);
    }

    Ok(key)
}
