use crate::error::ValidationError;
use ndarray::{Array2, ShapeError};
use serde_json::Value;

/// Number of symptoms the classifier was trained on.
pub const FEATURE_COUNT: usize = 132;

/// A validated symptom vector: exactly [`FEATURE_COUNT`] entries, each 0 or 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureVector(Vec<u8>);

impl FeatureVector {
    /// Validates raw client values. Length is checked before the domain so a
    /// short input never reports a value error.
    pub fn validate(values: &[Value]) -> Result<Self, ValidationError> {
        if values.len() != FEATURE_COUNT {
            return Err(ValidationError::WrongLength {
                expected: FEATURE_COUNT,
                got: values.len(),
            });
        }

        let bits = values
            .iter()
            .enumerate()
            .map(|(index, value)| binary_value(value).ok_or(ValidationError::OutOfDomain { index }))
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self(bits))
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Single-sample `[1, FEATURE_COUNT]` input the model expects.
    pub fn to_input_array(&self) -> Result<Array2<f32>, ShapeError> {
        let data = self.0.iter().map(|&bit| f32::from(bit)).collect();
        Array2::from_shape_vec((1, FEATURE_COUNT), data)
    }
}

impl TryFrom<&[Value]> for FeatureVector {
    type Error = ValidationError;

    fn try_from(values: &[Value]) -> Result<Self, Self::Error> {
        Self::validate(values)
    }
}

// Numbers only: `1` and `1.0` pass, `true`, `"1"` and `null` do not.
fn binary_value(value: &Value) -> Option<u8> {
    match value.as_f64()? {
        x if x == 0.0 => Some(0),
        x if x == 1.0 => Some(1),
        _ => None,
    }
}
