use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ndarray::ShapeError;
use serde_json::json;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised before the listener is bound.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("model artifact not found: {}", .0.display())]
    ModelNotFound(PathBuf),

    #[error("error loading model: {0}")]
    ModelLoad(#[from] ort::Error),

    #[error("incompatible model: {0}")]
    IncompatibleModel(String),
}

/// Rejections produced by the request validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Input data must contain exactly {expected} numbers.")]
    WrongLength { expected: usize, got: usize },

    #[error("Input data must contain only 0s and 1s.")]
    OutOfDomain { index: usize },
}

/// Failures inside the model call.
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    #[error("Shape error: {0}")]
    ShapeError(#[from] ShapeError),

    #[error("model returned an empty output")]
    EmptyOutput,

    #[error("model session lock poisoned")]
    SessionPoisoned,

    #[error("inference task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

/// Outcome of a failed `/predict` call, translated into a `{"detail": ...}` body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Rejected(#[from] ValidationError),

    #[error("Error during prediction: {0}")]
    Faulted(#[from] InferenceError),

    #[error("{}", .0.body_text())]
    MalformedBody(#[from] JsonRejection),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) => StatusCode::BAD_REQUEST,
            ApiError::Faulted(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedBody(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "detail": self.to_string()
        }));

        (self.status(), body).into_response()
    }
}
