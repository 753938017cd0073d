// Recycling Buddy - labelled training image intake for household waste classification

pub mod config;
pub mod image;
pub mod labels;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod storage;
pub mod types;
pub mod upload;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use labels::LabelRegistry;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
