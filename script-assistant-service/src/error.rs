use std::sync::Arc;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::i18n::{DEFAULT_LOCALE, I18n};

/// Main service error type
///
/// Callers only ever see a single "processing failure"; the variants exist so
/// the logs say what actually went wrong.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Malformed request: {message}")]
    MalformedRequest { message: String },

    #[error("Processing failed: {message}")]
    Processing { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Handler panicked: {message}")]
    Panicked { message: String },
}

/// API error response, the only failure shape the chat endpoint emits
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ServiceError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::MalformedRequest { .. } => "malformed_request",
            ServiceError::Processing { .. } => "processing_error",
            ServiceError::Config { .. } => "config_error",
            ServiceError::Panicked { .. } => "panicked",
        }
    }

    /// Get the user-facing message. Every variant collapses to the same text.
    pub fn user_message(&self, i18n: &I18n, locale: &str) -> String {
        i18n.get(locale, "error-processing", None)
    }

    /// Log the failure and convert it to the fixed error response
    pub fn into_response_with_i18n(self, i18n: &I18n, locale: &str) -> Response {
        error!(
            error = %self,
            code = self.error_code(),
            "Failed to process request"
        );
        metrics::counter!("script_assistant_failures_total", "code" => self.error_code())
            .increment(1);

        let status = self.status_code();
        let response = ErrorResponse {
            error: self.user_message(i18n, locale),
        };

        (status, Json(response)).into_response()
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        self.into_response_with_i18n(&I18n::new(), DEFAULT_LOCALE)
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error wrapper with i18n support for API responses
pub struct I18nError {
    pub error: ServiceError,
    pub i18n: Arc<I18n>,
    pub locale: String,
}

impl I18nError {
    pub fn new(error: ServiceError, i18n: Arc<I18n>, locale: impl Into<String>) -> Self {
        Self {
            error,
            i18n,
            locale: locale.into(),
        }
    }
}

impl IntoResponse for I18nError {
    fn into_response(self) -> Response {
        self.error.into_response_with_i18n(&self.i18n, &self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_maps_to_internal_server_error() {
        let errors = [
            ServiceError::MalformedRequest {
                message: "missing field `messages`".to_string(),
            },
            ServiceError::Processing {
                message: "reply index out of range".to_string(),
            },
            ServiceError::Config {
                message: "bad port".to_string(),
            },
            ServiceError::Panicked {
                message: "boom".to_string(),
            },
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn test_user_message_hides_details() {
        let i18n = I18n::new();
        let err = ServiceError::MalformedRequest {
            message: "missing field `messages`".to_string(),
        };

        assert_eq!(err.user_message(&i18n, "en"), "Failed to process request");
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse {
            error: "Failed to process request".to_string(),
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({ "error": "Failed to process request" }));
    }
}
