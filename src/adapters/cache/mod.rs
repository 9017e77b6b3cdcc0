//! Fingerprint-keyed result cache with per-entry TTL.

mod result_cache;

pub use result_cache::{CachedValue, ResultCache};
