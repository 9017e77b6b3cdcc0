//! Script trace sinks.

use std::sync::{Mutex, PoisonError};
use tracing::{error, info};

use crate::domain::ports::ScriptTrace;

/// Routes script text and swallowed record errors to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingScriptTrace;

impl ScriptTrace for TracingScriptTrace {
    fn script(&self, text: &str) {
        info!(target: "cimcache::script", "{}", text);
    }

    fn error(&self, message: &str) {
        error!(target: "cimcache::script", "{}", message);
    }
}

/// In-memory sink capturing everything it receives.
///
/// Useful in tests and in preview mode, where the generated script text is
/// the whole point of the call.
#[derive(Debug, Default)]
pub struct RecordingScriptTrace {
    scripts: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl RecordingScriptTrace {
    /// Empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every script emitted so far, in order.
    pub fn scripts(&self) -> Vec<String> {
        self.scripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Every swallowed record error so far, in order.
    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ScriptTrace for RecordingScriptTrace {
    fn script(&self, text: &str) {
        self.scripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(text.to_string());
    }

    fn error(&self, message: &str) {
        self.errors
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}
