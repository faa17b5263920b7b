pub mod config;
pub mod error;
pub mod model;
pub mod preprocessing;
pub mod server;
pub mod startup;
pub mod telemetry;


// Re-export common types
pub use error::{ApiError, InferenceError, StartupError, ValidationError};
pub use model::{ClassIndex, Predictor};
