// libccid/src/prelude.rs

pub use crate::connection::{
    Connection, ConnectionBuilder, ConnectionConfig, ConnectionState, ConnectionStateTag,
};
pub use crate::protocol::{Command, LengthPolicy, Response, SlotStatus};
pub use crate::transport::Transport;
pub use crate::{
    Atr, Error, ProtocolError, Protocol, ProtocolParameters, Result, T0Parameters, T1Parameters,
    TransportError, Voltage,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
