//! Remote executor port - the channel that runs script text on an endpoint.

use async_trait::async_trait;
use futures::stream::BoxStream;
use serde_json::Value;

/// Error type for remote execution channels.
///
/// These are "could not even ask" failures; they propagate to the caller
/// unchanged. A run that completes but produces nothing is not an error.
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    /// The connection to the endpoint could not be established or dropped.
    #[error("Connection failed: {0}")]
    Connection(String),

    /// The endpoint refused the credentials or the operation.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// The remote shell reported a failure while running the script.
    #[error("Remote shell error: {0}")]
    Remote(String),
}

/// Lazy, single-pass sequence of opaque result records.
pub type RecordStream = BoxStream<'static, Value>;

/// Trait for remote script execution channels.
///
/// An executor owns its connection to the managed endpoint (a WinRM
/// session, a local shell, a test double) the way the legacy context owned
/// its runspace; the query session only holds the executor. No retry lives
/// at this layer - retries, if any, belong behind this port.
#[async_trait]
pub trait RemoteExecutor: Send + Sync {
    /// Short name of the channel, for diagnostics.
    fn name(&self) -> &'static str;

    /// Execute the script and stream back every result record.
    ///
    /// The stream may be empty and is consumed at most once. Callers are
    /// free to drop it early; scalar reads stop at the first usable record.
    async fn run(&self, script: &str) -> Result<RecordStream, ExecutorError>;
}
