//! Model loading and prediction

pub mod inference;

pub use inference::{Classifier, EngineStatus, InferenceError, OUTPUT_COUNT};
