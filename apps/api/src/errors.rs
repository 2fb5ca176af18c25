use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every pipeline failure is terminal for its one request: no retries, and
/// nothing here ever aborts the process.
#[derive(Debug, Error)]
pub enum AppError {
    /// The multipart request carried no `resume` field. Client's fault.
    #[error("Resume file not provided")]
    MissingResume,

    /// The multipart stream itself could not be read.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The uploaded document could not be opened as a PDF. Carries the
    /// underlying cause so the caller can diagnose the file.
    #[error("Failed to read resume: {0}")]
    Extraction(String),

    /// The request produced a document set with an empty vocabulary, so no
    /// term-weight space could be built.
    #[error("Vectorization failed: {0}")]
    Vectorization(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingResume | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Extraction(_) | AppError::Vectorization(_) => {
                tracing::error!("request failed: {}", self);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_resume_message_matches_wire_contract() {
        assert_eq!(AppError::MissingResume.to_string(), "Resume file not provided");
    }

    #[test]
    fn test_extraction_error_includes_cause() {
        let err = AppError::Extraction("not a PDF header".to_string());
        assert_eq!(err.to_string(), "Failed to read resume: not a PDF header");
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::MissingResume, StatusCode::BAD_REQUEST),
            (
                AppError::Validation("bad stream".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::Extraction("broken".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::Vectorization("empty vocabulary".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            let response = err.into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
