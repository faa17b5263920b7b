use crate::model::Predictor;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared Application State
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Predictor>,
    pub metrics: PrometheusHandle,
}

// --- DTOs (Data Transfer Objects) ---

#[derive(Deserialize)]
pub struct PredictRequest {
    /// Raw symptom flags; validated into a `FeatureVector` by the handler.
    pub data: Vec<serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PredictResponse {
    #[serde(rename = "Disease")]
    pub disease: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct RootResponse {
    pub message: String,
}
