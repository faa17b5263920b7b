use axum::{extract::rejection::JsonRejection, extract::State, Json};
use metrics::{counter, histogram};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, warn};

use crate::error::{ApiError, InferenceError};
use crate::model::labels::disease_name;
use crate::preprocessing::features::FeatureVector;
use crate::server::types::*;
use crate::telemetry::{INFERENCE_DURATION_SECONDS, PREDICTIONS_TOTAL};

pub const WELCOME_MESSAGE: &str = "Welcome FADY to the ML Prediction API!";

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE.to_string(),
    })
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn render_metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let outcome = run_prediction(&state, payload).await;
    let label = match &outcome {
        Ok(_) => "success",
        Err(ApiError::Faulted(_)) => "faulted",
        Err(_) => "rejected",
    };
    counter!(PREDICTIONS_TOTAL, "outcome" => label).increment(1);
    outcome
}

async fn run_prediction(
    state: &AppState,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    // 1. Parse
    let Json(payload) = payload.inspect_err(|e| warn!(error = %e, "malformed request body"))?;

    // 2. Validate
    let features = FeatureVector::validate(&payload.data)
        .inspect_err(|e| warn!(error = %e, len = payload.data.len(), "rejected input"))?;

    // 3. Inference, off the async workers
    let start = Instant::now();
    let model = Arc::clone(&state.model);
    let class = tokio::task::spawn_blocking(move || model.predict(&features))
        .await
        .map_err(InferenceError::from)
        .and_then(|result| result)
        .inspect_err(|e| error!(error = %e, "prediction failed"))?;
    histogram!(INFERENCE_DURATION_SECONDS).record(start.elapsed().as_secs_f64());

    // 4. Label
    let disease = disease_name(class);
    debug!(class = class.0, disease, "prediction");

    Ok(Json(PredictResponse {
        disease: disease.to_string(),
    }))
}
