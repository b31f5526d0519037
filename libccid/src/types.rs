// libccid/src/types.rs

use std::convert::TryFrom;
use std::fmt;

use derive_more::Display;

use crate::constants::{ATR_MAX_LEN, ATR_MIN_LEN, T0_PARAMETERS_LEN, T1_PARAMETERS_LEN};
use crate::error::ProtocolError;
use crate::{Error, Result};

/// Answer-To-Reset bytes (2..=33 bytes, ISO 7816-3). The contents are kept
/// verbatim; historical bytes and TCK are not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u8>", into = "Vec<u8>")
)]
pub struct Atr(Vec<u8>);

impl Atr {
    /// Fails with `InvalidAtr` outside 2..=33 bytes.
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if !(ATR_MIN_LEN..=ATR_MAX_LEN).contains(&bytes.len()) {
            return Err(Error::InvalidAtr { len: bytes.len() });
        }
        Ok(Self(bytes))
    }

    /// Raw ATR bytes, TS first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Initial character TS: 0x3B direct convention, 0x3F inverse.
    pub fn ts(&self) -> u8 {
        self.0[0]
    }

    /// Uppercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(&self.0)
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl TryFrom<&[u8]> for Atr {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::new(bytes.to_vec())
    }
}

impl TryFrom<Vec<u8>> for Atr {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::new(bytes)
    }
}

impl From<Atr> for Vec<u8> {
    fn from(atr: Atr) -> Self {
        atr.0
    }
}

impl AsRef<[u8]> for Atr {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Atr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// bPowerSelect for IccPowerOn.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Voltage {
    /// Let the reader pick.
    #[default]
    #[display(fmt = "auto")]
    Auto = 0,
    /// Class A.
    #[display(fmt = "5.0V")]
    V5 = 1,
    /// Class B.
    #[display(fmt = "3.0V")]
    V3 = 2,
    /// Class C.
    #[display(fmt = "1.8V")]
    V1_8 = 3,
}

impl Voltage {
    /// bPowerSelect value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Auto),
            1 => Some(Self::V5),
            2 => Some(Self::V3),
            3 => Some(Self::V1_8),
            _ => None,
        }
    }
}

/// Transmission protocol (bProtocolNum).
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protocol {
    /// Character protocol.
    #[display(fmt = "T=0")]
    T0 = 0,
    /// Block protocol.
    #[display(fmt = "T=1")]
    T1 = 1,
}

impl Protocol {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::T0),
            1 => Some(Self::T1),
            _ => None,
        }
    }

    /// Length of the abProtocolDataStructure for this protocol.
    pub fn parameters_len(self) -> usize {
        match self {
            Self::T0 => T0_PARAMETERS_LEN,
            Self::T1 => T1_PARAMETERS_LEN,
        }
    }

    /// Block sent by `Connection::set_parameters`.
    pub fn default_parameters(self) -> ProtocolParameters {
        match self {
            Self::T0 => ProtocolParameters::T0(T0Parameters::default()),
            Self::T1 => ProtocolParameters::T1(T1Parameters::default()),
        }
    }
}

/// abProtocolDataStructure for T=0 (CCID Rev 1.1, table 6.1-7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct T0Parameters {
    /// bmFindexDindex: Fi in the high nibble, Di in the low nibble.
    pub findex_dindex: u8,
    /// bmTCCKST0: bit 1 selects inverse convention.
    pub tcck: u8,
    /// bGuardTimeT0 (extra guard time, ETUs).
    pub guard_time: u8,
    /// bWaitingIntegerT0 (WI).
    pub waiting_integer: u8,
    /// bClockStop: 0 not allowed, 1 low, 2 high, 3 either.
    pub clock_stop: u8,
}

impl Default for T0Parameters {
    fn default() -> Self {
        Self {
            findex_dindex: 0x11,
            tcck: 0x00,
            guard_time: 0x00,
            waiting_integer: 0x0A,
            clock_stop: 0x00,
        }
    }
}

impl T0Parameters {
    /// abProtocolDataStructure bytes.
    pub fn encode(&self) -> [u8; T0_PARAMETERS_LEN] {
        [
            self.findex_dindex,
            self.tcck,
            self.guard_time,
            self.waiting_integer,
            self.clock_stop,
        ]
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let b = exact_block::<T0_PARAMETERS_LEN>(bytes)?;
        Ok(Self {
            findex_dindex: b[0],
            tcck: b[1],
            guard_time: b[2],
            waiting_integer: b[3],
            clock_stop: b[4],
        })
    }
}

/// abProtocolDataStructure for T=1 (CCID Rev 1.1, table 6.1-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct T1Parameters {
    /// bmFindexDindex: Fi in the high nibble, Di in the low nibble.
    pub findex_dindex: u8,
    /// bmTCCKST1: 0x10 for LRC, 0x11 for CRC; bit 1 selects inverse convention.
    pub tcck: u8,
    /// bGuardTimeT1 (extra guard time, ETUs).
    pub guard_time: u8,
    /// bmWaitingIntegersT1: BWI in the high nibble, CWI in the low nibble.
    pub waiting_integers: u8,
    /// bClockStop: 0 not allowed, 1 low, 2 high, 3 either.
    pub clock_stop: u8,
    /// bIFSC: information field size of the card.
    pub ifsc: u8,
    /// bNadValue: node address, 0 when unused.
    pub nad: u8,
}

impl Default for T1Parameters {
    fn default() -> Self {
        Self {
            findex_dindex: 0x11,
            tcck: 0x10,
            guard_time: 0x00,
            waiting_integers: 0x4D,
            clock_stop: 0x00,
            ifsc: 0x20,
            nad: 0x00,
        }
    }
}

impl T1Parameters {
    /// Block waiting integer.
    pub fn bwi(&self) -> u8 {
        self.waiting_integers >> 4
    }

    /// Character waiting integer.
    pub fn cwi(&self) -> u8 {
        self.waiting_integers & 0x0F
    }

    pub fn with_waiting_integers(mut self, bwi: u8, cwi: u8) -> Self {
        self.waiting_integers = ((bwi & 0x0F) << 4) | (cwi & 0x0F);
        self
    }

    pub fn encode(&self) -> [u8; T1_PARAMETERS_LEN] {
        [
            self.findex_dindex,
            self.tcck,
            self.guard_time,
            self.waiting_integers,
            self.clock_stop,
            self.ifsc,
            self.nad,
        ]
    }

    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let b = exact_block::<T1_PARAMETERS_LEN>(bytes)?;
        Ok(Self {
            findex_dindex: b[0],
            tcck: b[1],
            guard_time: b[2],
            waiting_integers: b[3],
            clock_stop: b[4],
            ifsc: b[5],
            nad: b[6],
        })
    }
}

/// Protocol parameter block sent with SetParameters and echoed back in the
/// Parameters response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProtocolParameters {
    /// Five-byte T=0 block.
    T0(T0Parameters),
    /// Seven-byte T=1 block.
    T1(T1Parameters),
}

impl ProtocolParameters {
    /// Protocol this block belongs to.
    pub fn protocol(&self) -> Protocol {
        match self {
            Self::T0(_) => Protocol::T0,
            Self::T1(_) => Protocol::T1,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::T0(p) => p.encode().to_vec(),
            Self::T1(p) => p.encode().to_vec(),
        }
    }

    /// Decode a block whose length must match `protocol`.
    pub fn decode(protocol: Protocol, bytes: &[u8]) -> Result<Self> {
        match protocol {
            Protocol::T0 => T0Parameters::decode(bytes).map(Self::T0),
            Protocol::T1 => T1Parameters::decode(bytes).map(Self::T1),
        }
    }
}

fn exact_block<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    <[u8; N]>::try_from(bytes).map_err(|_| {
        ProtocolError::MalformedFrame {
            reason: format!("parameter block of {} bytes, expected {}", bytes.len(), N),
        }
        .into()
    })
}
