// libccid/src/connection/state.rs

use derive_more::Display;

use crate::types::{Atr, Protocol};

/// Lifecycle of one reader slot. Exactly one state is live; only the
/// connection's transitions change it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// Card not powered by this connection.
    #[default]
    Disconnected,
    /// Card powered, ATR read, protocol parameters not yet set.
    PoweredOn { atr: Atr },
    /// Parameters set; APDUs may be exchanged.
    Ready { atr: Atr, protocol: Protocol },
    /// The exchange desynchronized. Only `reset()` or `disconnect()` leave
    /// this state.
    Faulted { reason: String },
}

/// Data-free mirror of [`ConnectionState`] for introspection and errors.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionStateTag {
    Disconnected,
    PoweredOn,
    Ready,
    Faulted,
}

impl ConnectionState {
    /// Data-free tag of this state.
    pub fn tag(&self) -> ConnectionStateTag {
        match self {
            Self::Disconnected => ConnectionStateTag::Disconnected,
            Self::PoweredOn { .. } => ConnectionStateTag::PoweredOn,
            Self::Ready { .. } => ConnectionStateTag::Ready,
            Self::Faulted { .. } => ConnectionStateTag::Faulted,
        }
    }

    /// ATR while powered.
    pub fn atr(&self) -> Option<&Atr> {
        match self {
            Self::PoweredOn { atr } | Self::Ready { atr, .. } => Some(atr),
            _ => None,
        }
    }

    pub fn protocol(&self) -> Option<Protocol> {
        match self {
            Self::Ready { protocol, .. } => Some(*protocol),
            _ => None,
        }
    }

    /// True while the card is (as far as we know) powered.
    pub fn is_powered(&self) -> bool {
        matches!(self, Self::PoweredOn { .. } | Self::Ready { .. })
    }
}
