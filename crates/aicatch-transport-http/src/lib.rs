//! HTTP/JSON transport adapter for AICatch.
//! Exposes the catalog API under `/api/tools`, the public browse page at
//! `/`, and health probes, with an optional Bearer token policy.

mod auth;
mod error;
mod handlers;
mod pages;
pub mod router;
pub mod server;

pub use error::{ApiError, HttpTransportError};
pub use router::{build_router, AccessControl, AppState};
pub use server::HttpServer;
