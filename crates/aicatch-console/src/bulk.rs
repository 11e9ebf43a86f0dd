//! Bounded fan-out for bulk operations.

use std::future::Future;

use aicatch_types::ToolId;
use futures::stream::{self, StreamExt};

use crate::error::ConsoleError;

/// Runs `f` over `items` with at most `limit` futures in flight.
///
/// Results come back in input order, one per item. A `limit` of zero is
/// treated as one.
pub async fn run_bounded<I, T, F, Fut, R>(items: I, limit: usize, f: F) -> Vec<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> Fut,
    Fut: Future<Output = R>,
{
    stream::iter(items)
        .map(f)
        .buffered(limit.max(1))
        .collect()
        .await
}

/// Per-item outcome of a bulk delete.
#[derive(Debug, Default)]
pub struct BulkReport {
    /// Ids whose request succeeded, in input order.
    pub succeeded: Vec<ToolId>,
    /// Ids whose request failed, with the failure message.
    pub failed: Vec<(ToolId, String)>,
}

impl BulkReport {
    /// Splits `(id, result)` pairs into successes and failures.
    pub fn from_results(results: Vec<(ToolId, Result<(), ConsoleError>)>) -> Self {
        let mut report = Self::default();
        for (id, result) in results {
            match result {
                Ok(()) => report.succeeded.push(id),
                Err(e) => {
                    tracing::warn!(%id, error = %e, "bulk item failed");
                    report.failed.push((id, e.to_string()));
                }
            }
        }
        report
    }

    /// Number of items attempted.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// True when no item failed.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}
