use ndarray::{ArrayViewD, Axis};
use ort::session::Session;
use ort::value::{DynValue, Tensor};
use std::sync::Mutex;

use super::{ClassIndex, Predictor};
use crate::error::InferenceError;
use crate::preprocessing::features::FeatureVector;

/// Output names that carry the predicted label, in order of preference.
/// skl2onnx exports `output_label`.
pub const LABEL_OUTPUTS: &[&str] = &["output_label", "label"];

/// Classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    // `Session::run` needs exclusive access.
    session: Mutex<Session>,
    input_name: String,
    output_index: usize,
}

impl OnnxClassifier {
    pub fn new(session: Session, input_name: String, output_index: usize) -> Self {
        Self {
            session: Mutex::new(session),
            input_name,
            output_index,
        }
    }
}

impl Predictor for OnnxClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<ClassIndex, InferenceError> {
        let input = features.to_input_array()?;
        let shape = input.shape().to_vec();
        let (data, _) = input.into_raw_vec_and_offset();
        let input_value = Tensor::from_array((shape, data.into_boxed_slice()))?;

        let mut session_guard = self
            .session
            .lock()
            .map_err(|_| InferenceError::SessionPoisoned)?;
        let outputs =
            session_guard.run(ort::inputs![self.input_name.as_str() => input_value])?;

        decode_class(&outputs[self.output_index])
    }
}

/// Coerces a model output into a class index. Integer tensors are predicted
/// labels; float tensors are per-class scores.
fn decode_class(output: &DynValue) -> Result<ClassIndex, InferenceError> {
    if let Ok((_, labels)) = output.try_extract_tensor::<i64>() {
        return class_from_labels(labels);
    }

    let (shape, scores) = output.try_extract_tensor::<f32>()?;
    let dims: Vec<usize> = shape.iter().map(|&x| x as usize).collect();
    class_from_scores(&dims, scores)
}

pub(crate) fn class_from_labels(labels: &[i64]) -> Result<ClassIndex, InferenceError> {
    labels
        .first()
        .map(|&label| ClassIndex(label))
        .ok_or(InferenceError::EmptyOutput)
}

pub(crate) fn class_from_scores(dims: &[usize], scores: &[f32]) -> Result<ClassIndex, InferenceError> {
    if dims.first().copied().unwrap_or(0) == 0 {
        return Err(InferenceError::EmptyOutput);
    }

    let output = ArrayViewD::from_shape(dims, scores)?;
    let first_sample = output.index_axis(Axis(0), 0);

    // First maximum wins on ties.
    let mut best: Option<(usize, f32)> = None;
    for (class, &score) in first_sample.iter().enumerate() {
        if best.map_or(true, |(_, top)| score.total_cmp(&top).is_gt()) {
            best = Some((class, score));
        }
    }

    best.map(|(class, _)| ClassIndex(class as i64))
        .ok_or(InferenceError::EmptyOutput)
}
