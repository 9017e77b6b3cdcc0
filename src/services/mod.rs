//! Service layer: request translation and the session facade.

pub mod script_builder;
mod session;

pub use session::CimSession;
