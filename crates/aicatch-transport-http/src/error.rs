//! Error types for the HTTP transport layer.

use aicatch_registry::RepositoryError;
use aicatch_types::{CatalogError, ErrorKind, MessageResponse};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur in the HTTP transport.
#[derive(Debug, Error)]
pub enum HttpTransportError {
    /// Failed to bind to the TCP address.
    #[error("failed to bind on {addr}: {source}")]
    Bind {
        /// The address string.
        addr: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The HTTP server encountered an I/O error while serving.
    #[error("server error: {0}")]
    Serve(String),
}

/// Request-level failure, rendered as `{"message": ...}` with a status.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed body, missing fields, bad id.
    #[error("{0}")]
    BadRequest(String),
    /// No tool with the requested id.
    #[error("Tool not found")]
    NotFound,
    /// Token missing or wrong.
    #[error("Unauthorized")]
    Unauthorized,
    /// Any store fault; the message is passed through verbatim.
    #[error("{context}: {message}")]
    Backend {
        context: &'static str,
        message: String,
    },
}

impl ApiError {
    /// Wraps a store failure, keeping not-found distinct.
    pub(crate) fn store(context: &'static str, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => Self::NotFound,
            other => Self::Backend {
                context,
                message: other.to_string(),
            },
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Backend { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e.kind {
            ErrorKind::NotFound => Self::NotFound,
            ErrorKind::InvalidInput => Self::BadRequest(e.to_string()),
            ErrorKind::Unauthorized => Self::Unauthorized,
            ErrorKind::Internal => Self::Backend {
                context: "Internal error",
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = MessageResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_error_displays_address() {
        let err = HttpTransportError::Bind {
            addr: "127.0.0.1:8080".into(),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        let msg = err.to_string();
        assert!(msg.contains("127.0.0.1:8080"));
    }

    #[test]
    fn serve_error_displays_message() {
        let err = HttpTransportError::Serve("connection reset".into());
        assert!(err.to_string().contains("connection reset"));
    }

    #[test]
    fn store_not_found_stays_not_found() {
        let err = ApiError::store(
            "Error updating tool",
            RepositoryError::NotFound { id: "x".into() },
        );
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_fault_keeps_message_verbatim() {
        let err = ApiError::store(
            "Error creating tool",
            RepositoryError::Constraint {
                message: "NOT NULL constraint failed: tools.link".into(),
            },
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().starts_with("Error creating tool: "));
        assert!(err.to_string().contains("tools.link"));
    }

    #[test]
    fn invalid_input_maps_to_bad_request() {
        let err: ApiError = CatalogError::invalid_input("Invalid tool ID").into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
