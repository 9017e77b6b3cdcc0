//! Script trace port - the diagnostic sink for generated script text.

/// Sink receiving the exact script text of every operation.
///
/// Tracing is unconditional: the sink sees the script whether the call was
/// served from cache, executed remotely, or only previewed. Caching and
/// execution are conditional; tracing is not.
pub trait ScriptTrace: Send + Sync {
    /// A script was generated for an operation.
    fn script(&self, text: &str);

    /// A per-record failure was swallowed. Error severity.
    fn error(&self, message: &str);
}
