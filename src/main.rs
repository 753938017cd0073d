use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use recycling_buddy::{config::Config, routes::create_router, storage, utils, LabelRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    utils::init_logger();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: {:?}", config.server);

    // Label taxonomy is validated here; a broken one stops startup
    let registry = match &config.labels.file {
        Some(path) => {
            info!("Loading label taxonomy from {}", path.display());
            LabelRegistry::from_file(path)?
        }
        None => LabelRegistry::builtin()?,
    };
    info!(
        "Label registry ready: {} labels in {} categories",
        registry.len(),
        registry.list_by_category().len()
    );

    let store = storage::from_config(&config.storage)?;
    info!("Object store: {}", store.location());

    // Create shared state
    let state = recycling_buddy::AppState {
        config: config.clone(),
        registry: Arc::new(registry),
        store,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
