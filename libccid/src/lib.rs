// libccid/src/lib.rs

//! libccid
//!
//! Pure Rust CCID protocol engine for USB smart-card readers: frame codec,
//! slot state machine and a pluggable bulk transport.
#![warn(missing_docs)]

/// Slot state machine and its configuration.
pub mod connection;
/// CCID message types, status masks and error codes.
pub mod constants;
/// Error types shared by every layer.
pub mod error;
/// Common imports.
pub mod prelude;
/// Frame codec, command encoders and response interpretation.
pub mod protocol;
/// Reply builders and mock connections for tests.
pub mod test_support;
/// Byte transports: the trait, a mock and the rusb reader.
pub mod transport;
/// ATR, voltage, protocol and parameter block types.
pub mod types;
/// Hex and timeout helpers.
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
