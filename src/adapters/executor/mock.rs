//! Mock remote executor for testing.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::ports::{ExecutorError, RecordStream, RemoteExecutor};

/// Canned response configuration.
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    /// Records streamed back for the script.
    pub records: Vec<Value>,
    /// Whether to simulate a channel failure.
    pub fail: bool,
    /// Error message if failing.
    pub error_message: Option<String>,
}

impl MockResponse {
    /// Response streaming the given records.
    pub fn records(records: Vec<Value>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    /// Response streaming a single string record.
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::records(vec![Value::String(value.into())])
    }

    /// Response failing the channel itself.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            fail: true,
            error_message: Some(error.into()),
            ..Default::default()
        }
    }
}

/// Mock executor replaying canned record streams.
///
/// Responses can be set per script text, with a default for everything
/// else. Every executed script is logged so tests can assert on call
/// counts and on the exact generated text.
pub struct ScriptedExecutor {
    default_response: MockResponse,
    response_overrides: Arc<RwLock<HashMap<String, MockResponse>>>,
    executed: Arc<RwLock<Vec<String>>>,
}

impl ScriptedExecutor {
    /// Executor whose default response is an empty stream.
    pub fn new() -> Self {
        Self::with_default_response(MockResponse::default())
    }

    /// Executor with a custom default response.
    pub fn with_default_response(response: MockResponse) -> Self {
        Self {
            default_response: response,
            response_overrides: Arc::new(RwLock::new(HashMap::new())),
            executed: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Set a specific response for one exact script text.
    pub async fn set_response_for_script(&self, script: impl Into<String>, response: MockResponse) {
        let mut overrides = self.response_overrides.write().await;
        overrides.insert(script.into(), response);
    }

    /// Every script executed so far, in order.
    pub async fn executed_scripts(&self) -> Vec<String> {
        self.executed.read().await.clone()
    }

    /// Number of executions performed.
    pub async fn run_count(&self) -> usize {
        self.executed.read().await.len()
    }
}

impl Default for ScriptedExecutor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RemoteExecutor for ScriptedExecutor {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn run(&self, script: &str) -> Result<RecordStream, ExecutorError> {
        self.executed.write().await.push(script.to_string());

        let response = {
            let overrides = self.response_overrides.read().await;
            overrides.get(script).cloned()
        }
        .unwrap_or_else(|| self.default_response.clone());

        if response.fail {
            let message = response
                .error_message
                .unwrap_or_else(|| "mock failure".to_string());
            return Err(ExecutorError::Remote(message));
        }

        Ok(stream::iter(response.records).boxed())
    }
}
