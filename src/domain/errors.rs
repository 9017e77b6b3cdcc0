//! Domain errors for the cimcache query layer.

use thiserror::Error;

/// Errors surfaced to callers of a query session.
///
/// Per-record coercion failures are deliberately absent here: they are
/// recovered locally, reported through the trace sink and the skip
/// diagnostics of an enumeration, and never abort a call. Only a failure
/// of the execution channel itself reaches the caller.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The remote execution channel failed before any records came back.
    #[error("Remote execution failed: {0}")]
    Executor(#[from] crate::domain::ports::ExecutorError),
}

/// Result alias used across the query layer.
pub type QueryResult<T> = Result<T, QueryError>;

/// A single remote result record could not be converted to the expected
/// shape. Recovered where it occurs; never propagated to callers.
#[derive(Debug, Clone, Error)]
#[error("Cannot coerce record to {expected}: {reason}")]
pub struct CoercionError {
    /// Shape the record was expected to take.
    pub expected: &'static str,
    /// What the record actually looked like.
    pub reason: String,
}
