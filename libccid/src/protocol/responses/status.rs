// libccid/src/protocol/responses/status.rs

use crate::constants::{COMMAND_STATUS_MASK, COMMAND_STATUS_SHIFT, ICC_STATUS_MASK};
use crate::protocol::header::CcidHeader;

/// bmICCStatus (bits 0-1 of bStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IccStatus {
    /// Card present and powered.
    Active,
    /// Card present, not powered.
    PresentInactive,
    /// No card in the slot.
    NoCard,
    Reserved,
}

/// bmCommandStatus (bits 6-7 of bStatus).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    /// Command processed without error.
    Processed,
    /// Command failed; bError holds the reason.
    Failed,
    /// Reader asks for more time; the real reply follows.
    TimeExtension,
    Reserved,
}

impl IccStatus {
    pub fn from_status(status: u8) -> Self {
        match status & ICC_STATUS_MASK {
            0 => Self::Active,
            1 => Self::PresentInactive,
            2 => Self::NoCard,
            _ => Self::Reserved,
        }
    }
}

impl CommandStatus {
    pub fn from_status(status: u8) -> Self {
        match (status & COMMAND_STATUS_MASK) >> COMMAND_STATUS_SHIFT {
            0 => Self::Processed,
            1 => Self::Failed,
            2 => Self::TimeExtension,
            _ => Self::Reserved,
        }
    }
}

/// Decoded slot state as reported in any RDR_to_PC header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotStatus {
    /// bmICCStatus.
    pub icc: IccStatus,
    /// bmCommandStatus.
    pub command: CommandStatus,
    /// bClockStatus for SlotStatus replies, bChainParameter otherwise.
    pub clock_status: u8,
}

impl SlotStatus {
    /// Decode bStatus and param3 of any reply header.
    pub fn from_header(header: &CcidHeader) -> Self {
        Self {
            icc: IccStatus::from_status(header.status()),
            command: CommandStatus::from_status(header.status()),
            clock_status: header.chain_parameter(),
        }
    }

    /// Active or present-but-inactive.
    pub fn card_present(&self) -> bool {
        matches!(self.icc, IccStatus::Active | IccStatus::PresentInactive)
    }

    pub fn card_powered(&self) -> bool {
        self.icc == IccStatus::Active
    }
}
