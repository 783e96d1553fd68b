//! Feature Vector - Core data structure for ML input
//!
//! Uses the centralized layout from `layout.rs` so that form parsing and
//! model input always agree on feature ordering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::layout::{feature_index, FEATURE_COUNT, FEATURE_LAYOUT};

// ============================================================================
// PARSE ERRORS
// ============================================================================

/// Error converting a form submission into a feature vector.
/// All-or-nothing: the first missing or malformed field aborts the parse.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field '{field}' is not numeric: '{value}'")]
    NotNumeric { field: &'static str, value: String },
}

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Feature values in the order defined by FEATURE_LAYOUT
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub values: [f32; FEATURE_COUNT],
}

impl FeatureVector {
    /// Create from raw values already in layout order
    pub fn from_values(values: [f32; FEATURE_COUNT]) -> Self {
        Self { values }
    }

    /// Parse a form submission (field name -> raw string) into a feature
    /// vector in layout order.
    ///
    /// Fields may be submitted in any order; the result always follows
    /// FEATURE_LAYOUT. Unknown extra fields are ignored. Fails if any
    /// required field is absent or does not parse as a float.
    pub fn from_form(fields: &HashMap<String, String>) -> Result<Self, ParseError> {
        let mut values = [0.0f32; FEATURE_COUNT];

        for (i, &name) in FEATURE_LAYOUT.iter().enumerate() {
            let raw = fields.get(name).ok_or(ParseError::MissingField(name))?;
            values[i] = raw
                .trim()
                .parse::<f32>()
                .map_err(|_| ParseError::NotNumeric {
                    field: name,
                    value: raw.clone(),
                })?;
        }

        Ok(Self { values })
    }

    /// Get values as slice
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Get feature by name
    pub fn get_by_name(&self, name: &str) -> Option<f32> {
        feature_index(name).and_then(|i| self.values.get(i).copied())
    }
}

// ============================================================================
// TESTS
// ============================================================================
