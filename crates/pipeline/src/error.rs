//! Error types for pipeline runs.

use database::DatabaseError;
use thiserror::Error;

/// Errors that abort a pipeline run.
///
/// Webhook failures never appear here: delivery is best-effort and a
/// failed attempt does not stop the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Transcript fetch failed (transport or service error).
    #[error("transcript fetch failed: {0}")]
    Fetch(String),

    /// Writing the lead failed.
    #[error("lead store error: {0}")]
    Store(#[from] DatabaseError),
}
