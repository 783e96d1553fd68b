//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the trained multi-output classifier once at startup and runs one
//! prediction per request. The session is held behind a mutex because
//! `Session::run` needs exclusive access.

use std::sync::atomic::{AtomicU64, Ordering};

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::{FeatureVector, FEATURE_COUNT};

/// Number of values per prediction row: [MachineFailure, TWF, HDF, PWF, OSF, RNF]
pub const OUTPUT_COUNT: usize = 6;

// ============================================================================
// STATE
// ============================================================================

/// Latency stats
static LATENCY_SUM: AtomicU64 = AtomicU64::new(0);
static INFERENCE_COUNT: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Engine status for the health endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStatus {
    pub model_path: String,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
    pub inference_device: String,
    pub avg_latency_ms: f32,
    pub inference_count: u64,
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("failed to load model: {0}")]
    Load(String),

    #[error("inference failed: {0}")]
    Run(String),

    #[error("unexpected model output: {0}")]
    Output(String),
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// The loaded classifier artifact.
///
/// Loaded once at process start and shared read-only for the process
/// lifetime; never reloaded or mutated afterwards.
#[derive(Debug)]
pub struct Classifier {
    session: Mutex<Session>,
    model_path: String,
    loaded_at: chrono::DateTime<chrono::Utc>,
}

impl Classifier {
    /// Load the ONNX model from file
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        tracing::info!("Loading ONNX model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError::ModelNotFound(model_path.to_string()));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::Load(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Load(format!("optimization level: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Load(e.to_string()))?;

        tracing::info!("ONNX model loaded successfully");

        Ok(Self {
            session: Mutex::new(session),
            model_path: model_path.to_string(),
            loaded_at: chrono::Utc::now(),
        })
    }

    /// Run one prediction over a single feature vector.
    ///
    /// Returns the 6-value output row for row 0. A model producing anything
    /// other than exactly one 6-value row is an unrecovered error.
    pub fn predict(&self, features: &FeatureVector) -> Result<[f32; OUTPUT_COUNT], InferenceError> {
        let start_time = std::time::Instant::now();

        let input_array =
            Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.values.to_vec())
                .map_err(|e| InferenceError::Run(format!("input shape: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::Output("model defines no outputs".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Run(format!("input tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Run(e.to_string()))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError::Output(format!("missing output '{}'", output_name)))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Output(e.to_string()))?;

        let data = output_tensor.1;
        if data.len() != OUTPUT_COUNT {
            return Err(InferenceError::Output(format!(
                "expected {} prediction values, got {}",
                OUTPUT_COUNT,
                data.len()
            )));
        }

        let mut row = [0.0f32; OUTPUT_COUNT];
        row.copy_from_slice(data);

        // Track metrics
        LATENCY_SUM.fetch_add(start_time.elapsed().as_micros() as u64, Ordering::Relaxed);
        INFERENCE_COUNT.fetch_add(1, Ordering::Relaxed);

        Ok(row)
    }

    /// Snapshot of engine state for the health endpoint
    pub fn status(&self) -> EngineStatus {
        let sum = LATENCY_SUM.load(Ordering::Relaxed);
        let count = INFERENCE_COUNT.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            model_path: self.model_path.clone(),
            loaded_at: self.loaded_at,
            inference_device: "ONNX Runtime (CPU)".to_string(),
            avg_latency_ms: avg,
            inference_count: count,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_model_fails() {
        let err = Classifier::load("models/does_not_exist.onnx").unwrap_err();
        assert!(matches!(err, InferenceError::ModelNotFound(_)));
    }

    #[test]
    fn test_error_display() {
        let err = InferenceError::Output("expected 6 prediction values, got 4".to_string());
        assert_eq!(
            err.to_string(),
            "unexpected model output: expected 6 prediction values, got 4"
        );
    }
}
