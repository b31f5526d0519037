// libccid/src/protocol/responses/mod.rs

/// ATR and APDU payloads.
pub mod data_block;
/// Parameters echo.
pub mod parameters;
/// bStatus decoding.
pub mod status;

pub use data_block::{decode_apdu_response, decode_atr};
pub use parameters::decode_parameters;
pub use status::{CommandStatus, IccStatus, SlotStatus};

use crate::constants::*;
use crate::error::ProtocolError;
use crate::protocol::Frame;
use crate::types::{Atr, ProtocolParameters};
use crate::{Error, Result};

/// What the caller is waiting for. CCID reuses DataBlock (0x80) for both
/// the ATR and APDU replies, so the interpreter has to be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseContext {
    /// IccPowerOn; DataBlock carrying the ATR.
    PowerOn,
    /// IccPowerOff; SlotStatus.
    PowerOff,
    /// GetSlotStatus; SlotStatus.
    SlotStatus,
    /// SetParameters; Parameters echo.
    SetParameters,
    /// XfrBlock; DataBlock carrying the response APDU.
    Transmit,
}

impl ResponseContext {
    /// bMessageType of a successful reply.
    pub fn expected_message_type(self) -> u8 {
        match self {
            Self::PowerOn | Self::Transmit => RDR_TO_PC_DATA_BLOCK,
            Self::PowerOff | Self::SlotStatus => RDR_TO_PC_SLOT_STATUS,
            Self::SetParameters => RDR_TO_PC_PARAMETERS,
        }
    }
}

/// One decoded RDR_to_PC message. Payloads are owned so they outlive the
/// receive buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// ATR from IccPowerOn.
    PowerOnResult {
        atr: Atr,
    },
    /// Slot state from IccPowerOff or GetSlotStatus.
    SlotStatusResult {
        status: SlotStatus,
    },
    /// Parameter block the reader accepted.
    ParametersResult {
        params: ProtocolParameters,
    },
    /// Response APDU, status word included.
    DataBlockResult {
        apdu: Vec<u8>,
    },
    /// The reader needs more time; the real reply follows with the same
    /// sequence number. `multiplier` is bError (BWT multiplier).
    TimeExtension {
        multiplier: u8,
    },
    /// The reader or card rejected the command.
    Error {
        message_type: u8,
        status: u8,
        error_code: u8,
    },
}

impl Response {
    /// Interpret a decoded frame as the reply to `context`.
    ///
    /// A failed command status is returned as `Ok(Response::Error { .. })`
    /// so the caller can tell a rejection apart from a broken exchange;
    /// malformed or unexpected replies are `Err(Error::Protocol(..))`.
    pub fn interpret(context: ResponseContext, frame: &Frame) -> Result<Self> {
        let header = &frame.header;

        let is_known_reply = matches!(
            header.message_type,
            RDR_TO_PC_DATA_BLOCK | RDR_TO_PC_SLOT_STATUS | RDR_TO_PC_PARAMETERS
        );
        if !is_known_reply {
            return Ok(Self::Error {
                message_type: header.message_type,
                status: header.status(),
                error_code: header.error(),
            });
        }

        match CommandStatus::from_status(header.status()) {
            CommandStatus::Failed => {
                return Ok(Self::Error {
                    message_type: header.message_type,
                    status: header.status(),
                    error_code: header.error(),
                });
            }
            CommandStatus::TimeExtension => {
                return Ok(Self::TimeExtension {
                    multiplier: header.error(),
                });
            }
            CommandStatus::Reserved => {
                return Err(ProtocolError::MalformedFrame {
                    reason: format!("reserved command status in {:#04x}", header.status()),
                }
                .into());
            }
            CommandStatus::Processed => {}
        }

        let expected = context.expected_message_type();
        if header.message_type != expected {
            return Err(ProtocolError::UnexpectedMessageType {
                expected,
                actual: header.message_type,
            }
            .into());
        }

        match context {
            ResponseContext::PowerOn => Ok(Self::PowerOnResult {
                atr: decode_atr(&frame.payload)?,
            }),
            ResponseContext::Transmit => Ok(Self::DataBlockResult {
                apdu: decode_apdu_response(&frame.payload)?,
            }),
            ResponseContext::PowerOff | ResponseContext::SlotStatus => {
                Ok(Self::SlotStatusResult {
                    status: SlotStatus::from_header(header),
                })
            }
            ResponseContext::SetParameters => Ok(Self::ParametersResult {
                params: decode_parameters(header, &frame.payload)?,
            }),
        }
    }

    /// Turn a rejection into the matching engine error: `CardError` for a
    /// DataBlock reply, `CcidError` for anything else.
    pub fn into_result(self) -> Result<Self> {
        match self {
            Self::Error {
                message_type: RDR_TO_PC_DATA_BLOCK,
                status,
                error_code,
            } => Err(Error::CardError { status, error_code }),
            Self::Error {
                status, error_code, ..
            } => Err(Error::CcidError { status, error_code }),
            other => Ok(other),
        }
    }

    /// bMessageType this response was decoded from, where it is fixed.
    pub fn message_type(&self) -> Option<u8> {
        match self {
            Self::PowerOnResult { .. } | Self::DataBlockResult { .. } => {
                Some(RDR_TO_PC_DATA_BLOCK)
            }
            Self::SlotStatusResult { .. } => Some(RDR_TO_PC_SLOT_STATUS),
            Self::ParametersResult { .. } => Some(RDR_TO_PC_PARAMETERS),
            Self::Error { message_type, .. } => Some(*message_type),
            Self::TimeExtension { .. } => None,
        }
    }
}
