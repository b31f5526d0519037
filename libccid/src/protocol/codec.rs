// libccid/src/protocol/codec.rs

use crate::constants::CCID_SLOT;
use crate::error::ProtocolError;
use crate::Result;

use super::frame::{Frame, LengthPolicy};
use super::responses::{Response, ResponseContext};
use super::sequence::SequenceCounter;

/// Decode a bulk-IN buffer and interpret it as the reply to `context`.
///
/// Slot and bSeq are checked before the message type, so a stray reply to
/// an earlier command reports `SequenceMismatch` rather than a type error.
pub fn decode_response_frame(
    context: ResponseContext,
    expected_sequence: u8,
    data: &[u8],
    policy: LengthPolicy,
) -> Result<(Frame, Response)> {
    let frame = Frame::decode_with(data, policy)?;
    if frame.header.slot != CCID_SLOT {
        return Err(ProtocolError::UnexpectedSlot {
            actual: frame.header.slot,
        }
        .into());
    }
    SequenceCounter::check(expected_sequence, frame.header.sequence)?;
    let response = Response::interpret(context, &frame)?;
    Ok((frame, response))
}
