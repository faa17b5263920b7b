use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::tensor::TensorElementType;
use ort::value::ValueType;
use std::path::Path;
use tracing::info;

use super::onnx::{OnnxClassifier, LABEL_OUTPUTS};
use crate::error::StartupError;
use crate::preprocessing::features::FEATURE_COUNT;

// Initialize the global environment for ORT (only needed once)
pub fn init_ort() -> Result<(), StartupError> {
    ort::init().with_name("diagnonnx").commit()?;
    Ok(())
}

/// Loads the symptom classifier from disk.
///
/// Fails with [`StartupError::ModelNotFound`] when the artifact is absent and
/// with [`StartupError::IncompatibleModel`] when its input cannot take a
/// `[1, 132]` f32 feature vector.
pub fn load_model(model_path: impl AsRef<Path>) -> Result<OnnxClassifier, StartupError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(StartupError::ModelNotFound(path.to_path_buf()));
    }

    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(1)?
        .commit_from_file(path)?;

    let input = session
        .inputs
        .first()
        .ok_or_else(|| StartupError::IncompatibleModel("model declares no inputs".to_string()))?;
    check_input(&input.name, &input.input_type)?;
    let input_name = input.name.clone();

    let output_names: Vec<&str> = session.outputs.iter().map(|o| o.name.as_str()).collect();
    let output_index = select_output(&output_names)
        .ok_or_else(|| StartupError::IncompatibleModel("model declares no outputs".to_string()))?;

    info!(
        model = %path.display(),
        input = %input_name,
        output = output_names[output_index],
        "loaded model"
    );

    Ok(OnnxClassifier::new(session, input_name, output_index))
}

/// The input must be an f32 tensor; a fixed last dimension must be the feature count.
fn check_input(name: &str, input_type: &ValueType) -> Result<(), StartupError> {
    let ValueType::Tensor { ty, shape, .. } = input_type else {
        return Err(StartupError::IncompatibleModel(format!(
            "input {name} is not a tensor"
        )));
    };

    if *ty != TensorElementType::Float32 {
        return Err(StartupError::IncompatibleModel(format!(
            "input {name} has element type {ty:?}, service provides Float32"
        )));
    }

    match shape.last().copied() {
        Some(width) if width > 0 && width != FEATURE_COUNT as i64 => {
            Err(StartupError::IncompatibleModel(format!(
                "input {name} expects {width} features, service provides {FEATURE_COUNT}"
            )))
        }
        _ => Ok(()),
    }
}

/// Prefers a predicted-label output by name, falling back to the first output.
fn select_output(names: &[&str]) -> Option<usize> {
    if names.is_empty() {
        return None;
    }
    let by_name = LABEL_OUTPUTS
        .iter()
        .find_map(|label| names.iter().position(|n| n == label));
    Some(by_name.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::NamedTempFile;

    fn fixture(name: &str) -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("src/model/testdata")
            .join(name)
    }

    #[test]
    fn test_load_model_nonexistent_file() {
        let result = load_model("nonexistent_model.onnx");
        match result {
            Err(StartupError::ModelNotFound(path)) => {
                assert_eq!(path, Path::new("nonexistent_model.onnx"))
            }
            _ => panic!("Expected ModelNotFound error"),
        }
    }

    #[test]
    fn test_load_model_rejects_corrupt_artifact() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), b"not an onnx graph").unwrap();

        match load_model(temp_file.path()) {
            Err(StartupError::ModelLoad(_)) => {}
            Err(other) => panic!("Expected ModelLoad error, got {other}"),
            Ok(_) => panic!("Corrupt artifact must not load"),
        }
    }

    #[test]
    fn test_load_model_accepts_symptom_classifier() {
        assert!(load_model(fixture("argmax_132.onnx")).is_ok());
        assert!(load_model(fixture("scores_132.onnx")).is_ok());
    }

    #[test]
    fn test_load_model_rejects_wrong_width() {
        match load_model(fixture("argmax_4.onnx")) {
            Err(StartupError::IncompatibleModel(reason)) => {
                assert!(reason.contains("expects 4 features"), "{reason}")
            }
            Err(other) => panic!("Expected IncompatibleModel, got {other}"),
            Ok(_) => panic!("A 4-feature model must not load"),
        }
    }

    #[test]
    fn test_load_model_rejects_double_input() {
        match load_model(fixture("argmax_132_f64.onnx")) {
            Err(StartupError::IncompatibleModel(reason)) => {
                assert!(reason.contains("element type"), "{reason}")
            }
            Err(other) => panic!("Expected IncompatibleModel, got {other}"),
            Ok(_) => panic!("A float64-input model must not load"),
        }
    }

    #[test]
    fn test_label_output_is_preferred() {
        assert_eq!(
            select_output(&["output_probability", "output_label"]),
            Some(1)
        );
        assert_eq!(select_output(&["probabilities", "label"]), Some(1));
        assert_eq!(select_output(&["logits"]), Some(0));
        assert_eq!(select_output(&[]), None);
    }
}
