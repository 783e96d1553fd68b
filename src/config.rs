//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the trained classifier artifact
    pub model_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "models/machine_failure_model.onnx".to_string()),
        }
    }
}
