// libccid/src/protocol/commands/mod.rs

/// SetParameters.
pub mod parameters;
/// IccPowerOn / IccPowerOff.
pub mod power;
/// GetSlotStatus.
pub mod slot_status;
/// XfrBlock.
pub mod xfr;

pub use parameters::encode_set_parameters;
pub use power::{encode_power_off, encode_power_on};
pub use slot_status::encode_get_slot_status;
pub use xfr::{check_apdu_len, encode_xfr_block};

use crate::constants::*;
use crate::protocol::responses::ResponseContext;
use crate::types::{Protocol, ProtocolParameters, Voltage};
use crate::Result;

/// PC_to_RDR command. New commands should be added here and their encoder
/// placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate the card at the given voltage.
    PowerOn {
        voltage: Voltage,
    },
    /// Deactivate the card.
    PowerOff,
    /// Query card presence without side effects.
    GetSlotStatus,
    /// Select T=0 or T=1 with an explicit parameter block.
    SetParameters {
        params: ProtocolParameters,
    },
    /// Carry one APDU to the card.
    XfrBlock {
        apdu: Vec<u8>,
        bwi: u8,
        level_parameter: u16,
    },
}

impl Command {
    /// IccPowerOn at `voltage`.
    pub fn power_on(voltage: Voltage) -> Self {
        Self::PowerOn { voltage }
    }

    /// SetParameters with the default block for `protocol`.
    pub fn set_parameters(protocol: Protocol) -> Self {
        Self::SetParameters {
            params: protocol.default_parameters(),
        }
    }

    /// XfrBlock with bBWI = 0 and wLevelParameter = 0 (short APDU level
    /// exchange). Fails with `ApduTooLarge` above `max_len`.
    pub fn xfr_block(apdu: &[u8], max_len: usize) -> Result<Self> {
        check_apdu_len(apdu, max_len)?;
        Ok(Self::XfrBlock {
            apdu: apdu.to_vec(),
            bwi: 0,
            level_parameter: 0,
        })
    }

    /// bMessageType as defined by the CCID class specification.
    pub fn message_type(&self) -> u8 {
        match self {
            Self::PowerOn { .. } => PC_TO_RDR_ICC_POWER_ON,
            Self::PowerOff => PC_TO_RDR_ICC_POWER_OFF,
            Self::GetSlotStatus => PC_TO_RDR_GET_SLOT_STATUS,
            Self::SetParameters { .. } => PC_TO_RDR_SET_PARAMETERS,
            Self::XfrBlock { .. } => PC_TO_RDR_XFR_BLOCK,
        }
    }

    /// Which reply this command expects.
    pub fn response_context(&self) -> ResponseContext {
        match self {
            Self::PowerOn { .. } => ResponseContext::PowerOn,
            Self::PowerOff => ResponseContext::PowerOff,
            Self::GetSlotStatus => ResponseContext::SlotStatus,
            Self::SetParameters { .. } => ResponseContext::SetParameters,
            Self::XfrBlock { .. } => ResponseContext::Transmit,
        }
    }

    /// Serialize with the given bSeq. The returned frame owns its bytes.
    pub fn encode(&self, sequence: u8) -> CommandFrame {
        let bytes = match self {
            Self::PowerOn { voltage } => encode_power_on(*voltage, sequence),
            Self::PowerOff => encode_power_off(sequence),
            Self::GetSlotStatus => encode_get_slot_status(sequence),
            Self::SetParameters { params } => encode_set_parameters(params, sequence),
            Self::XfrBlock {
                apdu,
                bwi,
                level_parameter,
            } => encode_xfr_block(apdu, *bwi, *level_parameter, sequence),
        };
        CommandFrame {
            message_type: self.message_type(),
            sequence,
            bytes,
        }
    }
}

/// A serialized command, stamped with the sequence number its reply must
/// echo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandFrame {
    message_type: u8,
    sequence: u8,
    bytes: Vec<u8>,
}

impl CommandFrame {
    /// bMessageType of the serialized command.
    pub fn message_type(&self) -> u8 {
        self.message_type
    }

    /// bSeq the reply must carry.
    pub fn sequence(&self) -> u8 {
        self.sequence
    }

    /// Header and payload, ready for `Transport::send`.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
