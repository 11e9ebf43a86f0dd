//! Axum router for the catalog HTTP transport.
//! Routes: `/api/tools[/...]` (JSON API), `GET /` (browse page),
//! `GET /health` (liveness), `GET /health/ready` (readiness).

use std::sync::Arc;

use aicatch_registry::ToolRepository;
use aicatch_types::{AccessPolicy, ThemeMode};
use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{auth, handlers, pages};

/// Which requests need a token, and the token itself.
#[derive(Debug, Clone, Default)]
pub struct AccessControl {
    pub policy: AccessPolicy,
    /// Expected Bearer token (None = no token configured).
    pub token: Option<String>,
}

impl AccessControl {
    /// No authentication on any route.
    pub fn open() -> Self {
        Self::default()
    }

    /// Applies `policy` with the given token.
    pub fn new(policy: AccessPolicy, token: Option<String>) -> Self {
        Self { policy, token }
    }
}

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The catalog store.
    pub repo: Arc<dyn ToolRepository>,
    /// Authentication policy for catalog routes.
    pub access: AccessControl,
    /// Colour scheme of the browse page.
    pub theme: ThemeMode,
}

impl AppState {
    /// State with open access and the default theme.
    pub fn new(repo: Arc<dyn ToolRepository>) -> Self {
        Self {
            repo,
            access: AccessControl::open(),
            theme: ThemeMode::default(),
        }
    }

    /// Replaces the access policy.
    pub fn with_access(mut self, access: AccessControl) -> Self {
        self.access = access;
        self
    }

    /// Replaces the browse page theme.
    pub fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }
}

/// Builds the axum `Router` with all catalog routes.
///
/// The browse page reads the catalog, so it sits behind the same policy as
/// `GET /api/tools`; only `/health` and `/health/ready` bypass it.
pub fn build_router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/", get(pages::browse_page))
        .route(
            "/api/tools",
            get(handlers::list_tools).post(handlers::create_tool),
        )
        .route("/api/tools/delete-all", post(handlers::delete_all_tools))
        .route(
            "/api/tools/{id}",
            get(handlers::get_tool)
                .put(handlers::update_tool)
                .delete(handlers::delete_tool),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::enforce));

    Router::new()
        .route("/health", get(handle_health))
        .route("/health/ready", get(handle_ready))
        .merge(catalog)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok", "service": "aicatch"}))
}

/// Readiness probe: `200 OK` once the store answers a query.
async fn handle_ready(State(state): State<AppState>) -> impl IntoResponse {
    match state.repo.count().await {
        Ok(tools) => (
            StatusCode::OK,
            Json(json!({"status": "ready", "service": "aicatch", "tools": tools})),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({"status": "unavailable", "service": "aicatch", "error": e.to_string()})),
            )
        }
    }
}
