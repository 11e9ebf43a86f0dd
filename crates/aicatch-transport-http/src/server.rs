//! HTTP server that binds an axum Router to a TCP socket.

use tokio::net::TcpListener;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the catalog.
pub struct HttpServer {
    pub(crate) addr: String,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `state` — store, access policy and theme shared by all handlers
    /// * `addr` — `host:port` to listen on
    pub fn new(state: AppState, addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            state,
        }
    }

    /// Binds the address, then serves until the server exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run(self) -> Result<(), HttpTransportError> {
        let listener =
            TcpListener::bind(self.addr.as_str())
                .await
                .map_err(|e| HttpTransportError::Bind {
                    addr: self.addr.clone(),
                    source: e,
                })?;
        serve(listener, self.state).await
    }
}

/// Serves the catalog on an already-bound listener.
///
/// # Errors
///
/// Returns `HttpTransportError::Serve` if the server crashes.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), HttpTransportError> {
    let local = listener
        .local_addr()
        .map(|a| a.to_string())
        .unwrap_or_else(|_| "unknown".into());
    tracing::info!(
        addr = %local,
        policy = %state.access.policy,
        theme = %state.theme,
        "AICatch HTTP server ready"
    );

    let router = build_router(state);
    axum::serve(listener, router)
        .await
        .map_err(|e| HttpTransportError::Serve(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use aicatch_store_sqlite::SqliteToolRepository;
    use aicatch_types::AccessPolicy;

    use crate::router::AccessControl;

    fn make_state() -> AppState {
        let repo = Arc::new(SqliteToolRepository::open_in_memory().expect("in-memory db"));
        AppState::new(repo)
    }

    #[test]
    fn new_sets_address() {
        let server = HttpServer::new(make_state(), "0.0.0.0:3000");
        assert_eq!(server.addr, "0.0.0.0:3000");
    }

    #[test]
    fn new_stores_access_policy() {
        let state = make_state().with_access(AccessControl::new(
            AccessPolicy::ProtectMutations,
            Some("s3cret".to_string()),
        ));
        let server = HttpServer::new(state, "127.0.0.1:8080");
        assert_eq!(server.state.access.token.as_deref(), Some("s3cret"));
        assert_eq!(server.state.access.policy, AccessPolicy::ProtectMutations);
    }

    #[tokio::test]
    async fn run_reports_bad_address() {
        let server = HttpServer::new(make_state(), "not-an-address");
        let err = server.run().await.expect_err("bind must fail");
        assert!(matches!(err, HttpTransportError::Bind { .. }));
    }
}
