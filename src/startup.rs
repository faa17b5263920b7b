use axum::Router;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::AppConfig;
use crate::error::StartupError;
use crate::model::loader;
use crate::server::routes;

/// Loads the model and wires the router. No router exists without a model.
pub fn build_app(config: &AppConfig, metrics: PrometheusHandle) -> Result<Router, StartupError> {
    loader::init_ort()?;
    let model = loader::load_model(&config.model_path)?;
    Ok(routes::create_router(Arc::new(model), metrics))
}

pub async fn serve(config: &AppConfig, app: Router) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutting down");
}
