// libccid/src/protocol/commands/slot_status.rs

use crate::constants::{CCID_SLOT, PC_TO_RDR_GET_SLOT_STATUS};
use crate::protocol::Frame;

/// PC_to_RDR_GetSlotStatus: all parameters reserved, no payload.
pub fn encode_get_slot_status(sequence: u8) -> Vec<u8> {
    Frame::encode(PC_TO_RDR_GET_SLOT_STATUS, CCID_SLOT, sequence, [0; 3], &[])
}
