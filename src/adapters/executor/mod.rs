//! Executor adapters.
//!
//! The real remoting transport lives behind the `RemoteExecutor` port and
//! is supplied by the embedding application; this crate ships a scripted
//! mock for tests and examples.

mod mock;

pub use mock::{MockResponse, ScriptedExecutor};
