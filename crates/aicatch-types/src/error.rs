//! Unified error types for the AICatch domain layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Resource not found.
    NotFound,
    /// Invalid input data.
    InvalidInput,
    /// Missing or wrong credentials.
    Unauthorized,
    /// Internal error.
    Internal,
}

/// Domain-level error with structured context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogError {
    /// The kind of error.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context.
    pub context: Option<String>,
}

impl CatalogError {
    /// Creates a new `CatalogError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: None,
        }
    }

    /// Adds context to the error.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for CatalogError {}

/// Transforms technical errors into user-actionable diagnostics.
///
/// Implementors provide optional `hint` (cause explanation) and `fix`
/// (concrete remediation step) for each error variant.
pub trait DiagnosticError {
    /// A human-readable explanation of the likely cause.
    fn hint(&self) -> Option<String> {
        None
    }
    /// A concrete fix the user can apply (e.g. a config change).
    fn fix(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_without_context() {
        let err = CatalogError::new(ErrorKind::NotFound, "Tool not found");
        assert_eq!(err.to_string(), "Tool not found");
    }

    #[test]
    fn error_display_with_context() {
        let err = CatalogError::invalid_input("Missing required fields").with_context("name, link");
        assert_eq!(err.to_string(), "Missing required fields: name, link");
    }

    #[test]
    fn error_serialization_roundtrip() {
        let err = CatalogError::unauthorized("bad token");
        let json = serde_json::to_string(&err).expect("serialize");
        let back: CatalogError = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.kind, ErrorKind::Unauthorized);
        assert_eq!(back.message, "bad token");
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(CatalogError::not_found("x").kind, ErrorKind::NotFound);
        assert_eq!(CatalogError::invalid_input("x").kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn diagnostic_trait_defaults_to_none() {
        struct Dummy;
        impl DiagnosticError for Dummy {}
        let d = Dummy;
        assert!(d.hint().is_none());
        assert!(d.fix().is_none());
    }
}
