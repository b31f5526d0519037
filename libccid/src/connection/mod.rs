// libccid/src/connection/mod.rs
//! Slot state machine: power on, parameter negotiation, APDU exchange.

/// `ConnectionBuilder`.
pub mod builder;
/// `ConnectionConfig` and its defaults.
pub mod config;
/// `Connection` and its operations.
pub mod handle;
/// Connection states.
pub mod state;

pub use builder::ConnectionBuilder;
pub use config::ConnectionConfig;
pub use handle::Connection;
pub use state::{ConnectionState, ConnectionStateTag};
