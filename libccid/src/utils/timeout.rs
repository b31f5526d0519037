//! Timeout helpers.
//!
//! CCID distinguishes two waits: a short one for control-plane commands the
//! reader answers on its own, and a long one for anything the card has to
//! compute (power-up ATR, APDU processing).

use std::time::Duration;

/// PowerOff, SetParameters, GetSlotStatus.
pub const DEFAULT_CONTROL_TIMEOUT_MS: u32 = 1000;

/// PowerOn and XfrBlock.
pub const DEFAULT_EXCHANGE_TIMEOUT_MS: u32 = 5000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}
