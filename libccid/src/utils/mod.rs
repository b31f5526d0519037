//! Small helpers shared across the crate: hex formatting for logs and APDU
//! literals, and the default transfer timeouts.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
