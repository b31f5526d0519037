// libccid/src/protocol/commands/power.rs

use crate::constants::{CCID_SLOT, PC_TO_RDR_ICC_POWER_OFF, PC_TO_RDR_ICC_POWER_ON};
use crate::protocol::Frame;
use crate::types::Voltage;

/// PC_to_RDR_IccPowerOn: param1 = bPowerSelect, param2..3 = abRFU, no payload.
pub fn encode_power_on(voltage: Voltage, sequence: u8) -> Vec<u8> {
    Frame::encode(
        PC_TO_RDR_ICC_POWER_ON,
        CCID_SLOT,
        sequence,
        [voltage.as_u8(), 0x00, 0x00],
        &[],
    )
}

/// PC_to_RDR_IccPowerOff: all parameters reserved, no payload.
pub fn encode_power_off(sequence: u8) -> Vec<u8> {
    Frame::encode(PC_TO_RDR_ICC_POWER_OFF, CCID_SLOT, sequence, [0; 3], &[])
}
