pub mod labels;
pub mod loader;
pub mod onnx;

use crate::error::InferenceError;
use crate::preprocessing::features::FeatureVector;

/// Class index produced by the classifier. Values outside the label table are
/// possible and resolve to the unknown label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassIndex(pub i64);

/// The one capability the server needs from a model.
///
/// Implementations are shared read-only across concurrent requests.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<ClassIndex, InferenceError>;
}
