//! Domain models: fingerprints, query options, and result records.

mod fingerprint;
mod options;
mod record;

pub use fingerprint::Fingerprint;
pub use options::{QueryOptions, DEFAULT_CACHE_TTL};
pub use record::{coerce_scalar, QueryOutcome, Record, SkippedRecord};
