// Storage layer (S3-compatible)
// One write per call: no retries, no batching, no read-back.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::StorageConfig;

pub mod memory;
pub mod s3_client;

pub use memory::*;
pub use s3_client::*;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Config(String),

    #[error("S3 request failed: {0}")]
    Request(#[from] s3::error::S3Error),

    #[error("S3 returned status {status} for key {key}")]
    Status { status: u16, key: String },

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Key/value blob store addressed by object key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError>;

    /// Where objects land, for log lines (e.g. `s3://bucket`).
    fn location(&self) -> String;
}

/// Build the store selected by `STORAGE_PROVIDER`.
pub fn from_config(config: &StorageConfig) -> Result<Arc<dyn ObjectStore>, StorageError> {
    match config.provider.as_str() {
        "s3" => Ok(Arc::new(S3Client::new(config)?)),
        "memory" => Ok(Arc::new(MemoryStore::new())),
        other => Err(StorageError::Config(format!(
            "unknown storage provider '{}' (expected 's3' or 'memory')",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> StorageConfig {
        StorageConfig {
            provider: provider.to_string(),
            s3_bucket: "recycling-buddy-training".to_string(),
            s3_region: "us-east-1".to_string(),
            s3_access_key_id: Some("test".to_string()),
            s3_secret_access_key: Some("test".to_string()),
            s3_endpoint: Some("http://localhost:4566".to_string()),
            s3_path_style: true,
        }
    }

    #[test]
    fn test_from_config_memory() {
        let store = from_config(&config("memory")).unwrap();
        assert_eq!(store.location(), "memory://");
    }

    #[test]
    fn test_from_config_s3() {
        let store = from_config(&config("s3")).unwrap();
        assert_eq!(store.location(), "s3://recycling-buddy-training");
    }

    #[test]
    fn test_from_config_unknown_provider() {
        let err = from_config(&config("gcs")).err().unwrap();
        assert!(matches!(err, StorageError::Config(_)));
    }
}
