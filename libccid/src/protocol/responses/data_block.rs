// libccid/src/protocol/responses/data_block.rs

use crate::error::ProtocolError;
use crate::types::Atr;
use crate::{Error, Result};

/// The whole DataBlock payload of a successful IccPowerOn is the ATR.
pub fn decode_atr(payload: &[u8]) -> Result<Atr> {
    if payload.is_empty() {
        return Err(ProtocolError::NoResponsePayload.into());
    }
    Atr::new(payload.to_vec()).map_err(|e| match e {
        Error::InvalidAtr { len } => ProtocolError::InvalidAtrLength { len }.into(),
        other => other,
    })
}

/// The whole DataBlock payload of a successful XfrBlock is the response
/// APDU (data + SW1 SW2).
pub fn decode_apdu_response(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.is_empty() {
        return Err(ProtocolError::NoResponsePayload.into());
    }
    Ok(payload.to_vec())
}
