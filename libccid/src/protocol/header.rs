// libccid/src/protocol/header.rs

use crate::constants::*;
use crate::protocol::parser;
use crate::Result;

/// bMessageType values this engine sends or understands.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// PC_to_RDR_SetParameters.
    SetParameters = PC_TO_RDR_SET_PARAMETERS,
    /// PC_to_RDR_IccPowerOn.
    IccPowerOn = PC_TO_RDR_ICC_POWER_ON,
    /// PC_to_RDR_IccPowerOff.
    IccPowerOff = PC_TO_RDR_ICC_POWER_OFF,
    /// PC_to_RDR_GetSlotStatus.
    GetSlotStatus = PC_TO_RDR_GET_SLOT_STATUS,
    /// PC_to_RDR_XfrBlock.
    XfrBlock = PC_TO_RDR_XFR_BLOCK,
    /// RDR_to_PC_DataBlock.
    DataBlock = RDR_TO_PC_DATA_BLOCK,
    /// RDR_to_PC_SlotStatus.
    SlotStatus = RDR_TO_PC_SLOT_STATUS,
    /// RDR_to_PC_Parameters.
    Parameters = RDR_TO_PC_PARAMETERS,
}

impl MessageType {
    /// `None` for message types this engine does not handle.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            PC_TO_RDR_SET_PARAMETERS => Some(Self::SetParameters),
            PC_TO_RDR_ICC_POWER_ON => Some(Self::IccPowerOn),
            PC_TO_RDR_ICC_POWER_OFF => Some(Self::IccPowerOff),
            PC_TO_RDR_GET_SLOT_STATUS => Some(Self::GetSlotStatus),
            PC_TO_RDR_XFR_BLOCK => Some(Self::XfrBlock),
            RDR_TO_PC_DATA_BLOCK => Some(Self::DataBlock),
            RDR_TO_PC_SLOT_STATUS => Some(Self::SlotStatus),
            RDR_TO_PC_PARAMETERS => Some(Self::Parameters),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// RDR_to_PC messages have the high bit set.
    pub fn is_response(self) -> bool {
        self.as_u8() & 0x80 != 0
    }
}

/// The fixed 10-byte header that precedes every CCID bulk message.
///
/// Layout: `[type(1)] [length(4, LE)] [slot(1)] [seq(1)] [param1..3(3)]`.
/// For responses `param1` is bStatus, `param2` is bError and `param3` is
/// bChainParameter (DataBlock) or bClockStatus (SlotStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcidHeader {
    /// bMessageType.
    pub message_type: u8,
    /// dwLength: payload bytes following the header.
    pub length: u32,
    /// bSlot.
    pub slot: u8,
    /// bSeq.
    pub sequence: u8,
    /// Command specific; bStatus in replies.
    pub param1: u8,
    /// Command specific; bError in replies.
    pub param2: u8,
    /// Command specific; bChainParameter / bClockStatus / bProtocolNum in replies.
    pub param3: u8,
}

impl CcidHeader {
    /// Build a header; `length` is written as dwLength verbatim.
    pub fn new(message_type: u8, slot: u8, sequence: u8, params: [u8; 3], length: u32) -> Self {
        Self {
            message_type,
            length,
            slot,
            sequence,
            param1: params[0],
            param2: params[1],
            param3: params[2],
        }
    }

    /// Wire form, dwLength little-endian.
    pub fn to_bytes(&self) -> [u8; CCID_HEADER_LEN] {
        let len = self.length.to_le_bytes();
        [
            self.message_type,
            len[0],
            len[1],
            len[2],
            len[3],
            self.slot,
            self.sequence,
            self.param1,
            self.param2,
            self.param3,
        ]
    }

    /// Parse the first 10 bytes of `data`. Trailing bytes are not looked at.
    pub fn parse(data: &[u8]) -> Result<Self> {
        parser::ensure_len(data, CCID_HEADER_LEN)?;
        Ok(Self {
            message_type: parser::byte_at(data, 0)?,
            length: parser::le_u32_at(data, 1)?,
            slot: parser::byte_at(data, 5)?,
            sequence: parser::byte_at(data, 6)?,
            param1: parser::byte_at(data, 7)?,
            param2: parser::byte_at(data, 8)?,
            param3: parser::byte_at(data, 9)?,
        })
    }

    /// Typed message type, if known.
    pub fn kind(&self) -> Option<MessageType> {
        MessageType::from_u8(self.message_type)
    }

    pub fn params(&self) -> [u8; 3] {
        [self.param1, self.param2, self.param3]
    }

    /// dwLength as a buffer length.
    pub fn payload_len(&self) -> usize {
        self.length as usize
    }

    /// bStatus of a response.
    pub fn status(&self) -> u8 {
        self.param1
    }

    /// bError of a response.
    pub fn error(&self) -> u8 {
        self.param2
    }

    /// bChainParameter of a DataBlock, bClockStatus of a SlotStatus.
    pub fn chain_parameter(&self) -> u8 {
        self.param3
    }
}
