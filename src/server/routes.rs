use crate::model::Predictor;
use crate::server::{handlers, types::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;

pub fn create_router(model: Arc<dyn Predictor>, metrics: PrometheusHandle) -> Router {
    let state = Arc::new(AppState { model, metrics });

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::render_metrics))
        .route("/predict", post(handlers::predict))
        .with_state(state)
}
