//! Error types for mail dispatch.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

/// Result type for mail operations.
pub type MailResult<T> = Result<T, MailError>;

/// Errors that can occur while handling a send request.
#[derive(Debug, Error)]
pub enum MailError {
    /// Request body was not valid JSON.
    #[error("Failed to decode request body: {0}")]
    Decode(String),

    /// Template file is missing or not parseable.
    #[error("Failed to load template '{name}': {details}")]
    TemplateLoad { name: String, details: String },

    /// Template references values the request did not supply.
    #[error("Failed to render template '{name}': {details}")]
    TemplateRender { name: String, details: String },

    /// The configured transport could not hand the message off.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Errors raised by a [`MailTransport`](crate::transport::MailTransport)
/// implementation.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// Transactional-email API failure: payload build, request, or
    /// response read.
    #[error("Mail API request failed: {0}")]
    Api(String),

    /// SMTP failure: message build, dial, or send.
    #[error("SMTP delivery failed: {0}")]
    Smtp(String),
}

impl MailError {
    /// HTTP status the failure maps to.
    ///
    /// API transport failures map to 400 for compatibility with existing
    /// callers, even when the upstream is at fault; only SMTP delivery
    /// failures surface as 503.
    pub fn status_code(&self) -> StatusCode {
        match self {
            MailError::Transport(TransportError::Smtp(_)) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for MailError {
    /// Maps the error to its HTTP status with the display text as a
    /// plain-text body.
    fn into_response(self) -> Response {
        error!(error = %self, "Send request failed");
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::Api(err.to_string())
    }
}

impl From<lettre::error::Error> for TransportError {
    fn from(err: lettre::error::Error) -> Self {
        TransportError::Smtp(err.to_string())
    }
}

impl From<lettre::address::AddressError> for TransportError {
    fn from(err: lettre::address::AddressError) -> Self {
        TransportError::Smtp(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for TransportError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        TransportError::Smtp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smtp_transport_failure_maps_to_503() {
        let err = MailError::Transport(TransportError::Smtp("connection refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_api_transport_failure_maps_to_400() {
        let err = MailError::Transport(TransportError::Api("connect timeout".to_string()));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_pipeline_failures_map_to_400() {
        let decode = MailError::Decode("unexpected end of input".to_string());
        let load = MailError::TemplateLoad {
            name: "welcome".to_string(),
            details: "No such file or directory".to_string(),
        };
        let render = MailError::TemplateRender {
            name: "welcome".to_string(),
            details: "variable name not found".to_string(),
        };

        assert_eq!(decode.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(load.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(render.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_template_errors_name_the_template() {
        let err = MailError::TemplateLoad {
            name: "welcome".to_string(),
            details: "No such file or directory".to_string(),
        };
        assert!(err.to_string().contains("welcome"));
    }
}
