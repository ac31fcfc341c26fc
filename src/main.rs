//! Switch Network Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use switch_network_registry::application::NetworkRegistry;
use switch_network_registry::infrastructure::driven_adapters::config::{AppConfig, LogFormat};
use switch_network_registry::infrastructure::driven_adapters::switch_driver::InMemorySwitchDriver;
use switch_network_registry::infrastructure::driving_adapters::api_rest::{self, AppState};

fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "switch_network_registry=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    init_tracing(config.logging.format);
    tracing::info!("Configuration loaded successfully");

    // Single managed switch, fixed for the life of the process
    let switch = config.switch.endpoint();
    tracing::info!(switch = %switch.address(), port = %switch.port(), "Managing switch");

    let driver = Arc::new(InMemorySwitchDriver::new(switch.credentials().clone()));
    let registry = Arc::new(NetworkRegistry::new(driver, switch));

    let app_state = AppState {
        config: Arc::new(config.clone()),
        registry,
    };
    let app = api_rest::app(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
