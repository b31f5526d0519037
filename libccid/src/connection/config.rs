// libccid/src/connection/config.rs
//! Per-connection settings.

use crate::constants::{CCID_HEADER_LEN, MAX_PAYLOAD_LEN, SHORT_APDU_MAX_LEN};
use crate::protocol::LengthPolicy;
use crate::utils::{DEFAULT_CONTROL_TIMEOUT_MS, DEFAULT_EXCHANGE_TIMEOUT_MS};

/// Receive buffer: header + the largest extended-length response (65536
/// data bytes + SW1 SW2).
pub const DEFAULT_MAX_RESPONSE_LEN: usize = CCID_HEADER_LEN + 65536 + 2;

/// Time-extension replies accepted while waiting for one response.
pub const DEFAULT_MAX_TIME_EXTENSIONS: u8 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
/// Timeouts, limits and decode policy of one connection.
pub struct ConnectionConfig {
    /// Timeout for PowerOff, SetParameters and GetSlotStatus.
    pub control_timeout_ms: u32,
    /// Timeout for PowerOn and XfrBlock.
    pub exchange_timeout_ms: u32,
    /// Largest APDU `transmit` accepts; there is no chaining. Never more
    /// than `MAX_PAYLOAD_LEN`, the dwLength limit.
    pub max_apdu_len: usize,
    /// `max_len` passed to every `Transport::receive`.
    pub max_response_len: usize,
    /// Treatment of bytes after the declared payload.
    pub length_policy: LengthPolicy,
    /// Time-extension replies accepted per command.
    pub max_time_extensions: u8,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            control_timeout_ms: DEFAULT_CONTROL_TIMEOUT_MS,
            exchange_timeout_ms: DEFAULT_EXCHANGE_TIMEOUT_MS,
            max_apdu_len: SHORT_APDU_MAX_LEN,
            max_response_len: DEFAULT_MAX_RESPONSE_LEN,
            length_policy: LengthPolicy::Lenient,
            max_time_extensions: DEFAULT_MAX_TIME_EXTENSIONS,
        }
    }
}

impl ConnectionConfig {
    /// Same as `default()`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control_timeout_ms(mut self, ms: u32) -> Self {
        self.control_timeout_ms = ms;
        self
    }

    pub fn exchange_timeout_ms(mut self, ms: u32) -> Self {
        self.exchange_timeout_ms = ms;
        self
    }

    pub fn max_apdu_len(mut self, len: usize) -> Self {
        self.max_apdu_len = len.min(MAX_PAYLOAD_LEN);
        self
    }

    pub fn max_response_len(mut self, len: usize) -> Self {
        self.max_response_len = len.max(CCID_HEADER_LEN);
        self
    }

    pub fn length_policy(mut self, policy: LengthPolicy) -> Self {
        self.length_policy = policy;
        self
    }

    pub fn max_time_extensions(mut self, n: u8) -> Self {
        self.max_time_extensions = n;
        self
    }
}
