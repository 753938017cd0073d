// S3 object store gateway
// Bucket, region, endpoint and credentials are fixed at construction.

use async_trait::async_trait;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::region::Region;
use tracing::{debug, info};

use super::{ObjectStore, StorageError};
use crate::config::StorageConfig;

pub struct S3Client {
    bucket: Box<Bucket>,
    bucket_name: String,
}

impl S3Client {
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        if config.s3_bucket.is_empty() {
            return Err(StorageError::Config("S3_BUCKET must not be empty".to_string()));
        }

        let region = match &config.s3_endpoint {
            Some(endpoint) => Region::Custom {
                region: config.s3_region.clone(),
                endpoint: endpoint.clone(),
            },
            None => config
                .s3_region
                .parse::<Region>()
                .map_err(|e| StorageError::Config(format!("invalid region: {}", e)))?,
        };

        let credentials = match (&config.s3_access_key_id, &config.s3_secret_access_key) {
            (Some(access_key), Some(secret_key)) => Credentials::new(
                Some(access_key.as_str()),
                Some(secret_key.as_str()),
                None,
                None,
                None,
            ),
            _ => Credentials::default(),
        }
        .map_err(|e| StorageError::Config(format!("invalid credentials: {}", e)))?;

        let bucket = Bucket::new(&config.s3_bucket, region, credentials)?;
        let bucket = if config.s3_path_style {
            bucket.with_path_style()
        } else {
            bucket
        };

        info!(
            "S3 gateway ready: bucket={} region={} endpoint={}",
            config.s3_bucket,
            config.s3_region,
            config.s3_endpoint.as_deref().unwrap_or("aws")
        );

        Ok(Self {
            bucket: bucket.into(),
            bucket_name: config.s3_bucket.clone(),
        })
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn put(&self, key: &str, data: &[u8], content_type: &str) -> Result<(), StorageError> {
        debug!("PUT s3://{}/{} ({} bytes)", self.bucket_name, key, data.len());

        let response = self
            .bucket
            .put_object_with_content_type(key, data, content_type)
            .await?;

        let status = response.status_code();
        if !(200..300).contains(&status) {
            return Err(StorageError::Status {
                status,
                key: key.to_string(),
            });
        }

        info!("S3 put_object completed: status={} key={}", status, key);
        Ok(())
    }

    fn location(&self) -> String {
        format!("s3://{}", self.bucket_name)
    }
}
