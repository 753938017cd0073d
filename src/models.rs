use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::Config;
use crate::labels::{display_name, LabelRegistry};
use crate::storage::ObjectStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<LabelRegistry>,
    pub store: Arc<dyn ObjectStore>,
}

// API Request/Response types

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl HealthResponse {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LabelItem {
    pub value: String,
    pub display_name: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LabelCategory {
    pub category: String,
    pub items: Vec<LabelItem>,
}

/// Frontend `useLabels` expects: `{ categories: LabelCategory[], total_count }`
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LabelsResponse {
    pub categories: Vec<LabelCategory>,
    pub total_count: usize,
}

impl From<&LabelRegistry> for LabelsResponse {
    fn from(registry: &LabelRegistry) -> Self {
        let categories: Vec<LabelCategory> = registry
            .list_by_category()
            .iter()
            .map(|category| LabelCategory {
                category: category.name.clone(),
                items: category
                    .labels
                    .iter()
                    .map(|label| LabelItem {
                        value: label.clone(),
                        display_name: display_name(label),
                    })
                    .collect(),
            })
            .collect();
        let total_count = categories.iter().map(|c| c.items.len()).sum();

        Self {
            categories,
            total_count,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UploadRequest {
    pub image_base64: String,
    pub label: String,
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub s3_key: String,
    pub label: String,
}

/// Placeholder classification until a model is wired in.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct PredictionResponse {
    pub label: String,
    pub confidence: f64,
    pub categories: Vec<BTreeMap<String, f64>>,
}

impl PredictionResponse {
    pub fn placeholder() -> Self {
        let score = |name: &str, value: f64| BTreeMap::from([(name.to_string(), value)]);
        Self {
            label: "recyclable".to_string(),
            confidence: 0.85,
            categories: vec![
                score("recyclable", 0.85),
                score("non-recyclable", 0.10),
                score("compost", 0.05),
            ],
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub detail: String,
}
