//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that adapters must implement:
//! - `RemoteExecutor`: runs script text against the managed endpoint
//! - `ScriptTrace`: receives the generated script text of every call
//!
//! These traits keep the query layer independent of any concrete remoting
//! transport or logging backend.

mod executor;
mod trace;

pub use executor::{ExecutorError, RecordStream, RemoteExecutor};
pub use trace::ScriptTrace;
