//! Per-call query options.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// TTL applied to cache writes when the caller does not override it.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);

/// Options governing a single query-layer call.
///
/// The legacy client context kept the cache duration and the preview flag
/// as shared mutable fields, forcing callers into save/override/restore
/// sequences around temporary overrides. Here the settings travel with the
/// call instead: build a snapshot, hand it to the `*_with` form of an
/// operation, and the session's defaults stay untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// How long results written by this call stay valid.
    pub cache_ttl: Duration,
    /// Translate the request to script text without executing or caching.
    /// The script still reaches the trace sink.
    pub preview: bool,
    /// Skip the cache read and force a fresh execution. The fresh result
    /// is still written back.
    pub refresh: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            preview: false,
            refresh: false,
        }
    }
}

impl QueryOptions {
    /// Snapshot with a different cache TTL.
    #[must_use]
    pub const fn with_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Snapshot that only renders script text.
    #[must_use]
    pub const fn with_preview(mut self) -> Self {
        self.preview = true;
        self
    }

    /// Snapshot that bypasses the cache read.
    #[must_use]
    pub const fn with_refresh(mut self) -> Self {
        self.refresh = true;
        self
    }
}
