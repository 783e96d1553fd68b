//! FailSense - Predictive Maintenance Diagnosis Server
//!
//! A single-binary web service: an HTML form collects eight sensor readings,
//! a pre-trained multi-output classifier (ONNX, loaded once at startup)
//! predicts machine failure, and the result page renders the detected
//! failure categories with static remediation tips.

mod config;
mod diagnosis;
mod error;
mod features;
mod handlers;
mod model;
mod render;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "failsense_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("FailSense server starting...");

    // Load the classifier once; it is shared read-only for the process
    // lifetime and never reloaded.
    let classifier = model::Classifier::load(&config.model_path)
        .expect("Failed to load classifier model");

    let state = AppState {
        classifier: Arc::new(classifier),
        config: config.clone(),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<model::Classifier>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::pages::home))
        .route("/predict", post(handlers::pages::predict))
        .route("/health", get(handlers::health::check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
