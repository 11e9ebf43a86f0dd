//! Bearer token authentication for catalog requests.

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::router::AppState;

/// Validates the `Authorization: Bearer <token>` header.
///
/// # Errors
///
/// Returns `StatusCode::UNAUTHORIZED` if the header is absent or the
/// token does not match `expected`.
pub(crate) fn validate_bearer(headers: &HeaderMap, expected: &str) -> Result<(), StatusCode> {
    let provided = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if provided == Some(expected) {
        Ok(())
    } else {
        Err(StatusCode::UNAUTHORIZED)
    }
}

/// Returns true for methods that change the catalog.
pub(crate) fn is_mutation(method: &Method) -> bool {
    !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Middleware applying the configured `AccessPolicy` to catalog routes.
pub(crate) async fn enforce(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let access = &state.access;
    if access.policy.requires_token(is_mutation(request.method())) {
        // A protected policy with no token configured locks everything out.
        let expected = access.token.as_deref().unwrap_or_default();
        if expected.is_empty() || validate_bearer(request.headers(), expected).is_err() {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "rejected unauthenticated request"
            );
            return ApiError::Unauthorized.into_response();
        }
    }
    next.run(request).await
}
