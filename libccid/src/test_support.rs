//! Test support helpers intended for use by unit and integration tests.
//!
//! Reply builders produce RDR_to_PC frames the way a reader would send
//! them; the connection helpers wrap a MockTransport pre-seeded with them.
#![allow(dead_code)]

use crate::connection::Connection;
use crate::constants::*;
use crate::protocol::Frame;
use crate::transport::mock::MockTransport;
use crate::types::{Protocol, Voltage};
use crate::Result;

/// Successful RDR_to_PC_DataBlock carrying `payload` (ATR or response APDU).
#[doc(hidden)]
pub fn data_block(sequence: u8, payload: &[u8]) -> Vec<u8> {
    Frame::encode(RDR_TO_PC_DATA_BLOCK, CCID_SLOT, sequence, [0x00, 0x00, 0x00], payload)
}

/// DataBlock with command status "failed" and the given bError. The ICC
/// status bits are taken from `icc_status`.
#[doc(hidden)]
pub fn data_block_failed(sequence: u8, icc_status: u8, error_code: u8) -> Vec<u8> {
    let status = 0x40 | (icc_status & ICC_STATUS_MASK);
    Frame::encode(RDR_TO_PC_DATA_BLOCK, CCID_SLOT, sequence, [status, error_code, 0x00], &[])
}

/// DataBlock announcing a time extension (command status 2).
#[doc(hidden)]
pub fn time_extension(sequence: u8, multiplier: u8) -> Vec<u8> {
    Frame::encode(RDR_TO_PC_DATA_BLOCK, CCID_SLOT, sequence, [0x80, multiplier, 0x00], &[])
}

/// RDR_to_PC_SlotStatus with the raw bStatus and bError bytes.
#[doc(hidden)]
pub fn slot_status_reply(sequence: u8, status: u8, error_code: u8) -> Vec<u8> {
    Frame::encode(RDR_TO_PC_SLOT_STATUS, CCID_SLOT, sequence, [status, error_code, 0x00], &[])
}

/// RDR_to_PC_Parameters echoing `block` for `protocol`.
#[doc(hidden)]
pub fn parameters_reply(sequence: u8, protocol: Protocol, block: &[u8]) -> Vec<u8> {
    Frame::encode(
        RDR_TO_PC_PARAMETERS,
        CCID_SLOT,
        sequence,
        [0x00, 0x00, protocol.as_u8()],
        block,
    )
}

/// RDR_to_PC_Parameters with command status "failed".
#[doc(hidden)]
pub fn parameters_failed(sequence: u8, error_code: u8) -> Vec<u8> {
    Frame::encode(RDR_TO_PC_PARAMETERS, CCID_SLOT, sequence, [0x40, error_code, 0x00], &[])
}

/// Build a sequence-echoing MockTransport pre-seeded with the given replies.
#[doc(hidden)]
pub fn echoing_mock_with_responses(responses: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::echoing();
    for resp in responses {
        mock.push_response(resp);
    }
    mock
}

/// Convenience: a Connection already in `Ready` for `protocol`, backed by a
/// sequence-echoing MockTransport. Sequence numbers 0 and 1 are used by the
/// setup; the next command carries 2.
#[doc(hidden)]
pub fn ready_mock_connection(atr: &[u8], protocol: Protocol) -> Result<Connection<MockTransport>> {
    let block = protocol.default_parameters().encode();
    let mock = echoing_mock_with_responses(vec![
        data_block(0, atr),
        parameters_reply(1, protocol, &block),
    ]);
    let mut conn = Connection::new(mock);
    conn.connect(Voltage::Auto)?;
    conn.set_parameters(protocol)?;
    Ok(conn)
}
