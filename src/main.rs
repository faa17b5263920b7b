use diagnonnx::{config, startup, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    telemetry::init_tracing();

    // 2. Config
    let config = config::AppConfig::from_env()?;

    // 3. Model & router; a missing or broken model stops here
    let metrics_handle = telemetry::install_metrics()?;
    info!(path = %config.model_path.display(), "loading model");
    let app = startup::build_app(&config, metrics_handle)?;

    // 4. Bind & Serve
    startup::serve(&config, app).await?;

    Ok(())
}
