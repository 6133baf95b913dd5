use invoice_core::observability::init_tracing;
use share_service::config::ShareConfig;
use share_service::services::init_metrics;
use share_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Metrics recorder first, so nothing records into the void
    init_metrics();
    init_tracing("share-service", "info");

    let config = ShareConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start share service: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
