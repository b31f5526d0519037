// libccid/src/protocol/responses/parameters.rs

use crate::error::ProtocolError;
use crate::protocol::header::CcidHeader;
use crate::types::{Protocol, ProtocolParameters};
use crate::Result;

/// RDR_to_PC_Parameters: param3 is bProtocolNum, the payload echoes the
/// negotiated block. Only its length is checked against the protocol.
pub fn decode_parameters(header: &CcidHeader, payload: &[u8]) -> Result<ProtocolParameters> {
    let protocol =
        Protocol::from_u8(header.param3).ok_or_else(|| ProtocolError::MalformedFrame {
            reason: format!("unknown protocol number {}", header.param3),
        })?;
    ProtocolParameters::decode(protocol, payload)
}
