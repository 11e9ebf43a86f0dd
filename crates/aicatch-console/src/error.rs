//! Errors surfaced by the console view models and the catalog client.

use aicatch_types::DiagnosticError;
use thiserror::Error;

/// Failure of a console operation.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The API answered with a non-success status.
    #[error("{status} - {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// The `message` field of the response body, or the raw body.
        message: String,
    },
    /// The request never produced a response (connect, timeout, decode).
    #[error("request failed: {0}")]
    Transport(String),
    /// Input rejected before any request was issued.
    #[error("{0}")]
    Validation(String),
    /// Another mutating operation is still in flight.
    #[error("another operation is in progress")]
    Busy,
    /// The user declined a confirmation.
    #[error("operation cancelled")]
    Cancelled,
    /// The tool does not exist (locally or on the server).
    #[error("Tool not found")]
    NotFound,
}

impl From<reqwest::Error> for ConsoleError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl DiagnosticError for ConsoleError {
    fn hint(&self) -> Option<String> {
        match self {
            Self::Http { status: 401, .. } => {
                Some("the server requires a bearer token for this request".into())
            }
            Self::Http { status, .. } if *status >= 500 => {
                Some("the catalog store rejected the operation".into())
            }
            Self::Transport(_) => Some("the catalog server is not reachable".into()),
            Self::Busy => Some("a previous mutation has not finished yet".into()),
            _ => None,
        }
    }

    fn fix(&self) -> Option<String> {
        match self {
            Self::Http { status: 401, .. } => {
                Some("pass --token or set client.token (AICATCH_CLIENT__TOKEN)".into())
            }
            Self::Transport(_) => {
                Some("start it with `aicatch serve` or check client.base_url".into())
            }
            _ => None,
        }
    }
}
