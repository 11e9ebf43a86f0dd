//! In-process catalog server for command tests.

use std::sync::Arc;

use aicatch_store_sqlite::SqliteToolRepository;
use aicatch_transport_http::{server, AppState};
use tokio::net::TcpListener;

use crate::shared::ClientArgs;

/// Serves an in-memory catalog on `127.0.0.1:0`; returns flags pointing
/// at it and the backing store.
pub async fn spawn_server() -> (ClientArgs, Arc<SqliteToolRepository>) {
    let repo = Arc::new(SqliteToolRepository::open_in_memory().expect("db"));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(server::serve(listener, AppState::new(repo.clone())));
    let args = ClientArgs {
        url: Some(format!("http://{addr}")),
        token: None,
    };
    (args, repo)
}
