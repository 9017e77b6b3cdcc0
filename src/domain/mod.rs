//! Domain layer: models, errors, and port definitions.
//!
//! Nothing in this module touches a real remote endpoint; the ports define
//! the contracts that adapters implement.

pub mod errors;
pub mod models;
pub mod ports;
