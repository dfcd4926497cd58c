//! Error handling for the glossary service.
//!
//! Idiomatic error types using thiserror. The service has a deliberately
//! small taxonomy: upstream LLM failures and export failures are server
//! errors, empty input is a client error. Every variant renders as a JSON
//! `{"error": "..."}` body with the mapped status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

/// Main error type for the glossary service
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The external text-generation call failed (network, auth, quota).
    /// The upstream message is surfaced verbatim.
    #[error("{0}")]
    Upstream(String),

    /// Building or writing the .docx document failed.
    #[error("Document export failed: {0}")]
    Export(String),

    /// The client submitted an empty glossary for export.
    #[error("Glossary is empty")]
    EmptyGlossary,
}

/// JSON body used for all error responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ServiceError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::Upstream(_) | ServiceError::Export(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ServiceError::EmptyGlossary => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_are_server_errors() {
        let err = ServiceError::Upstream("OpenAI API error 429: quota".to_string());
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "OpenAI API error 429: quota");
    }

    #[test]
    fn empty_glossary_is_a_client_error() {
        let err = ServiceError::EmptyGlossary;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Glossary is empty");
    }
}
