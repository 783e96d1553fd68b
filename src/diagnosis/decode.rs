//! Prediction Decoder
//!
//! Turns the classifier's raw 6-value output row into a `Diagnosis`.
//! Input: [MachineFailure, TWF, HDF, PWF, OSF, RNF], each 0 or 1.

use thiserror::Error;

use super::types::{Diagnosis, FailureCategory};
use crate::model::OUTPUT_COUNT;

/// Sub-type categories in output order, indices 1..=5 of the output row
const SUBTYPE_CATEGORIES: [FailureCategory; OUTPUT_COUNT - 1] = [
    FailureCategory::ToolWear,
    FailureCategory::HeatDissipation,
    FailureCategory::Power,
    FailureCategory::Overstrain,
    FailureCategory::Random,
];

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// A malformed output vector is unrecovered and surfaced to the caller;
/// there is no fallback classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected {expected} prediction values, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    #[error("non-binary prediction value {value} at index {index}")]
    NonBinary { index: usize, value: f32 },
}

// ============================================================================
// DECODING
// ============================================================================

/// Decode a raw prediction row into a diagnosis.
///
/// - `is_failure` is output[0] == 1.
/// - Sub-type flags at indices 1..=5 map to their categories in ascending
///   index order.
/// - A raised failure flag with no sub-type yields the sole category
///   `Unknown`.
/// - When the failure flag is down, categories are suppressed even if
///   sub-type flags are raised (see DESIGN.md).
pub fn decode(output: &[f32]) -> Result<Diagnosis, DecodeError> {
    if output.len() != OUTPUT_COUNT {
        return Err(DecodeError::WrongLength {
            expected: OUTPUT_COUNT,
            actual: output.len(),
        });
    }

    for (index, &value) in output.iter().enumerate() {
        if value != 0.0 && value != 1.0 {
            return Err(DecodeError::NonBinary { index, value });
        }
    }

    let is_failure = output[0] == 1.0;

    let mut categories = Vec::new();
    if is_failure {
        for (i, &category) in SUBTYPE_CATEGORIES.iter().enumerate() {
            if output[i + 1] == 1.0 {
                categories.push(category);
            }
        }

        if categories.is_empty() {
            categories.push(FailureCategory::Unknown);
        }
    }

    Ok(Diagnosis {
        is_failure,
        categories,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_zero_is_healthy() {
        let diagnosis = decode(&[0.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(!diagnosis.is_failure);
        assert!(diagnosis.categories.is_empty());
    }

    #[test]
    fn test_failure_with_tool_wear() {
        let diagnosis = decode(&[1.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(diagnosis.is_failure);
        assert_eq!(diagnosis.categories, vec![FailureCategory::ToolWear]);
    }

    #[test]
    fn test_failure_without_subtype_is_unknown() {
        let diagnosis = decode(&[1.0, 0.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(diagnosis.is_failure);
        assert_eq!(diagnosis.categories, vec![FailureCategory::Unknown]);
    }

    #[test]
    fn test_multiple_subtypes_keep_index_order() {
        let diagnosis = decode(&[1.0, 0.0, 1.0, 0.0, 1.0, 0.0]).unwrap();
        assert!(diagnosis.is_failure);
        assert_eq!(
            diagnosis.categories,
            vec![FailureCategory::HeatDissipation, FailureCategory::Overstrain]
        );
    }

    #[test]
    fn test_all_subtypes() {
        let diagnosis = decode(&[1.0, 1.0, 1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(
            diagnosis.categories,
            vec![
                FailureCategory::ToolWear,
                FailureCategory::HeatDissipation,
                FailureCategory::Power,
                FailureCategory::Overstrain,
                FailureCategory::Random,
            ]
        );
    }

    #[test]
    fn test_subtypes_suppressed_when_no_failure() {
        // Inconsistent classifier output: sub-flag raised, failure flag down
        let diagnosis = decode(&[0.0, 1.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert!(!diagnosis.is_failure);
        assert!(diagnosis.categories.is_empty());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = decode(&[1.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::WrongLength {
                expected: 6,
                actual: 3
            }
        );
    }

    #[test]
    fn test_non_binary_rejected() {
        let err = decode(&[1.0, 0.5, 0.0, 0.0, 0.0, 0.0]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::NonBinary {
                index: 1,
                value: 0.5
            }
        );
    }
}
