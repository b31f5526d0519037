// libccid/src/protocol/frame.rs

use log::debug;

use crate::constants::{CCID_HEADER_LEN, MAX_PAYLOAD_LEN};
use crate::error::ProtocolError;
use crate::protocol::header::CcidHeader;
use crate::protocol::parser;
use crate::Result;

/// How a decoder treats bytes received after the declared payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthPolicy {
    /// Ignore and drop trailing bytes.
    #[default]
    Lenient,
    /// Fail with `TrailingLengthMismatch` when any trailing byte is present.
    Strict,
}

/// CCID bulk message: 10-byte header + `header.length` bytes of payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Parsed header; `length` is the declared payload size.
    pub header: CcidHeader,
    /// Exactly `header.length` bytes.
    pub payload: Vec<u8>,
}

impl Frame {
    /// Write the header (length = payload length) followed by the payload.
    ///
    /// `payload` must not exceed `MAX_PAYLOAD_LEN`; APDUs are checked
    /// against it in `check_apdu_len` before they get here.
    pub fn encode(
        message_type: u8,
        slot: u8,
        sequence: u8,
        params: [u8; 3],
        payload: &[u8],
    ) -> Vec<u8> {
        debug_assert!(payload.len() <= MAX_PAYLOAD_LEN);
        let header = CcidHeader::new(message_type, slot, sequence, params, payload.len() as u32);
        let mut out = Vec::with_capacity(CCID_HEADER_LEN + payload.len());
        out.extend_from_slice(&header.to_bytes());
        out.extend_from_slice(payload);
        out
    }

    /// Serialize this frame. The header's length field is taken from the
    /// payload, not from `self.header.length`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let h = &self.header;
        Self::encode(h.message_type, h.slot, h.sequence, h.params(), &self.payload)
    }

    /// Decode with the default (lenient) trailing-byte policy.
    pub fn decode(data: &[u8]) -> Result<Self> {
        Self::decode_with(data, LengthPolicy::default())
    }

    /// Decode a received buffer. Fails when the header is incomplete or the
    /// buffer holds fewer payload bytes than the header declares. Only the
    /// declared payload is copied out.
    pub fn decode_with(data: &[u8], policy: LengthPolicy) -> Result<Self> {
        if data.len() < CCID_HEADER_LEN {
            return Err(ProtocolError::MalformedFrame {
                reason: format!(
                    "{} bytes received, header needs {}",
                    data.len(),
                    CCID_HEADER_LEN
                ),
            }
            .into());
        }

        let header = CcidHeader::parse(data)?;
        let declared = header.payload_len();
        let available = data.len() - CCID_HEADER_LEN;

        if declared > available {
            return Err(ProtocolError::MalformedFrame {
                reason: format!(
                    "short read: header declares {} payload bytes, {} received",
                    declared, available
                ),
            }
            .into());
        }

        if declared < available {
            match policy {
                LengthPolicy::Strict => {
                    return Err(ProtocolError::TrailingLengthMismatch {
                        declared,
                        received: available,
                    }
                    .into());
                }
                LengthPolicy::Lenient => {
                    debug!(
                        "dropping {} trailing bytes after {}-byte payload",
                        available - declared,
                        declared
                    );
                }
            }
        }

        let payload = parser::slice_at(data, CCID_HEADER_LEN, declared)?.to_vec();
        Ok(Self { header, payload })
    }
}
