// libccid/src/protocol/commands/parameters.rs

use crate::constants::{CCID_SLOT, PC_TO_RDR_SET_PARAMETERS};
use crate::protocol::Frame;
use crate::types::ProtocolParameters;

/// PC_to_RDR_SetParameters: param1 = bProtocolNum, payload =
/// abProtocolDataStructure (5 bytes for T=0, 7 for T=1).
pub fn encode_set_parameters(params: &ProtocolParameters, sequence: u8) -> Vec<u8> {
    Frame::encode(
        PC_TO_RDR_SET_PARAMETERS,
        CCID_SLOT,
        sequence,
        [params.protocol().as_u8(), 0x00, 0x00],
        &params.encode(),
    )
}
