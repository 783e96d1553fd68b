//! Prediction decoding: failure flag + named failure categories

pub mod decode;
pub mod types;

pub use decode::{decode, DecodeError};
pub use types::{Diagnosis, FailureCategory};
