//! cimcache - cached remote WMI/CIM query layer.
//!
//! Turns logical requests against a managed endpoint's configuration
//! subsystem (read a property, invoke a class method, write a property,
//! enumerate instances) into remote script executions, memoizes the result
//! for a short time window, and hands back typed values. Four call shapes
//! share one fingerprinting/caching discipline and one execution channel.
//!
//! # Architecture
//!
//! This crate follows Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): fingerprints, records, options, errors,
//!   and the ports (`RemoteExecutor`, `ScriptTrace`)
//! - **Adapters Layer** (`adapters`): the moka-backed result cache, trace
//!   sinks, and a scripted mock executor
//! - **Service Layer** (`services`): the script builder and the
//!   [`CimSession`] facade
//!
//! The remoting transport itself is not part of this crate; embedders
//! supply a `RemoteExecutor` for their channel of choice.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cimcache::{CimSession, TracingScriptTrace};
//!
//! #[tokio::main]
//! async fn main() -> cimcache::QueryResult<()> {
//!     let executor = Arc::new(my_transport::WinRmExecutor::connect("client01")?);
//!     let session = CimSession::new(executor, Arc::new(TracingScriptTrace));
//!
//!     let version = session
//!         .get_property("ROOT\\ccm:SMS_Client=@", "ClientVersion")
//!         .await?;
//!     println!("client version: {version}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::cache::{CachedValue, ResultCache};
pub use adapters::executor::{MockResponse, ScriptedExecutor};
pub use adapters::trace::{RecordingScriptTrace, TracingScriptTrace};
pub use domain::errors::{CoercionError, QueryError, QueryResult};
pub use domain::models::{
    coerce_scalar, Fingerprint, QueryOptions, QueryOutcome, Record, SkippedRecord,
    DEFAULT_CACHE_TTL,
};
pub use domain::ports::{ExecutorError, RecordStream, RemoteExecutor, ScriptTrace};
pub use services::CimSession;
