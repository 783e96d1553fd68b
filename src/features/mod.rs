//! Feature handling: layout definition and form-to-vector parsing

pub mod layout;
pub mod vector;

pub use layout::{FEATURE_COUNT, FEATURE_LAYOUT};
pub use vector::{FeatureVector, ParseError};
