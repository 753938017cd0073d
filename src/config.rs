use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub labels: LabelsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub provider: String,
    pub s3_bucket: String,
    pub s3_region: String,
    pub s3_access_key_id: Option<String>,
    pub s3_secret_access_key: Option<String>,
    pub s3_endpoint: Option<String>,
    pub s3_path_style: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelsConfig {
    /// Overrides the built-in taxonomy when set.
    pub file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let s3_endpoint = non_empty("S3_ENDPOINT_URL");
        let s3_path_style = match non_empty("S3_PATH_STYLE") {
            Some(value) => value
                .parse::<bool>()
                .with_context(|| format!("S3_PATH_STYLE must be true or false, got '{}'", value))?,
            None => s3_endpoint.is_some(),
        };

        Ok(Self {
            server: ServerConfig {
                port: var("PORT", "8000")
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                host: var("HOST", "0.0.0.0"),
                cors_allowed_origins: var("ALLOWED_ORIGINS", "http://localhost:5173")
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                max_upload_bytes: match non_empty("MAX_UPLOAD_BYTES") {
                    Some(value) => value
                        .parse::<usize>()
                        .context("MAX_UPLOAD_BYTES must be a byte count")?,
                    None => DEFAULT_MAX_UPLOAD_BYTES,
                },
            },
            storage: StorageConfig {
                provider: var("STORAGE_PROVIDER", "s3"),
                s3_bucket: var("S3_BUCKET", "recycling-buddy-training"),
                s3_region: var("AWS_REGION", "us-east-1"),
                s3_access_key_id: non_empty("AWS_ACCESS_KEY_ID"),
                s3_secret_access_key: non_empty("AWS_SECRET_ACCESS_KEY"),
                s3_endpoint,
                s3_path_style,
            },
            labels: LabelsConfig {
                file: non_empty("LABELS_FILE").map(PathBuf::from),
            },
        })
    }
}
