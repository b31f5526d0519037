// libccid/src/protocol/commands/xfr.rs

use crate::constants::{CCID_SLOT, MAX_PAYLOAD_LEN, PC_TO_RDR_XFR_BLOCK};
use crate::protocol::Frame;
use crate::{Error, Result};

/// Reject APDUs the engine would have to chain. `max` is capped at
/// `MAX_PAYLOAD_LEN` whatever the caller passes.
pub fn check_apdu_len(apdu: &[u8], max: usize) -> Result<()> {
    let max = max.min(MAX_PAYLOAD_LEN);
    if apdu.len() > max {
        return Err(Error::ApduTooLarge {
            len: apdu.len(),
            max,
        });
    }
    Ok(())
}

/// PC_to_RDR_XfrBlock: param1 = bBWI, param2..3 = wLevelParameter (LE),
/// payload = the APDU verbatim.
pub fn encode_xfr_block(apdu: &[u8], bwi: u8, level_parameter: u16, sequence: u8) -> Vec<u8> {
    let level = level_parameter.to_le_bytes();
    Frame::encode(
        PC_TO_RDR_XFR_BLOCK,
        CCID_SLOT,
        sequence,
        [bwi, level[0], level[1]],
        apdu,
    )
}
