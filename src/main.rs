use biorecode_service::config::BiorecodeConfig;
use biorecode_service::observability::init_tracing;
use biorecode_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = BiorecodeConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    init_tracing(&config.log_level);

    tracing::info!(
        model = %config.gemini.model,
        port = config.port,
        "Starting Bio Re:code backend"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        e
    })?;

    app.run_until_stopped().await
}
