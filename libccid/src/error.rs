// libccid/src/error.rs

use thiserror::Error;

use crate::constants::error_code_name;
use crate::connection::ConnectionStateTag;

/// Failures reported by a [`Transport`](crate::transport::Transport)
/// implementation, plus the two length checks the engine applies to the
/// transport's return values.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("device not found")]
    DeviceNotFound,

    #[error("device disconnected")]
    Disconnected,

    #[error("transfer timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u32 },

    #[error("short write: sent {actual} of {expected} bytes")]
    ShortWrite { expected: usize, actual: usize },

    #[error("short read: received {actual} bytes, a CCID header needs 10")]
    ShortRead { actual: usize },

    // USB 実装は optional dependency なので feature で切り替える
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),
}

/// A reply that cannot be trusted. Any of these moves the connection to
/// `Faulted`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("malformed frame: {reason}")]
    MalformedFrame { reason: String },

    #[error("trailing length mismatch: header declares {declared} payload bytes, received {received}")]
    TrailingLengthMismatch { declared: usize, received: usize },

    #[error("sequence mismatch: expected {expected}, got {received}")]
    SequenceMismatch { expected: u8, received: u8 },

    #[error("unexpected slot {actual} in response")]
    UnexpectedSlot { actual: u8 },

    #[error("unexpected message type: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedMessageType { expected: u8, actual: u8 },

    #[error("response carries no payload")]
    NoResponsePayload,

    #[error("ATR length {len} is outside 2..=33")]
    InvalidAtrLength { len: usize },

    #[error("reader requested more than {limit} time extensions")]
    TooManyTimeExtensions { limit: u8 },
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("card error: status={status:#04x}, error={error_code:#04x} ({})", error_code_name(*.error_code))]
    CardError { status: u8, error_code: u8 },

    #[error("ccid error: status={status:#04x}, error={error_code:#04x} ({})", error_code_name(*.error_code))]
    CcidError { status: u8, error_code: u8 },

    #[error("invalid state: connection is {current}, operation requires {required}")]
    InvalidState {
        current: ConnectionStateTag,
        required: ConnectionStateTag,
    },

    #[error("connection is faulted ({reason}); reset() or disconnect() first")]
    ConnectionFaulted { reason: String },

    #[error("apdu too large: {len} bytes exceeds the {max} byte limit")]
    ApduTooLarge { len: usize, max: usize },

    #[error("invalid ATR: {len} bytes, expected 2..=33")]
    InvalidAtr { len: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("no transport configured")]
    NoTransport,
}

impl Error {
    /// True for errors that are a normal operational outcome (the reader or
    /// card rejected a command) rather than a broken exchange.
    pub fn is_card_rejection(&self) -> bool {
        matches!(self, Error::CardError { .. } | Error::CcidError { .. })
    }

    /// True when the error means the link itself can no longer be trusted.
    pub fn is_fatal_to_exchange(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Protocol(_))
    }
}

#[cfg(feature = "usb")]
impl From<rusb::Error> for Error {
    fn from(e: rusb::Error) -> Self {
        Error::Transport(TransportError::from(e))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
