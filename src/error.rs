//! Error handling
//!
//! Single catch-all taxonomy: any failure while handling a prediction
//! request is surfaced verbatim as plain text with status 200, matching the
//! service's wire contract (no structured error codes).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::diagnosis::DecodeError;
use crate::features::ParseError;
use crate::model::InferenceError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Inference(#[from] InferenceError),

    #[error("{0}")]
    Decode(#[from] DecodeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("prediction request failed: {}", self);
        (StatusCode::OK, format!("Error: {}", self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_is_verbatim() {
        let err = AppError::Parse(ParseError::MissingField("Torque [Nm]"));
        assert_eq!(err.to_string(), "missing required field: Torque [Nm]");
    }

    #[tokio::test]
    async fn test_response_is_200_plain_text() {
        let err = AppError::Decode(DecodeError::WrongLength {
            expected: 6,
            actual: 2,
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Error: expected 6 prediction values, got 2");
    }
}
