// libccid/src/protocol/mod.rs

/// Full decode of one bulk-IN buffer.
pub mod codec;
/// PC_to_RDR encoders.
pub mod commands;
/// Header plus payload framing.
pub mod frame;
/// The 10-byte message header.
pub mod header;
/// Bounds-checked byte readers.
pub mod parser;
/// RDR_to_PC interpretation.
pub mod responses;
/// bSeq allocation.
pub mod sequence;

pub use commands::{Command, CommandFrame};
pub use frame::{Frame, LengthPolicy};
pub use header::{CcidHeader, MessageType};
pub use responses::{CommandStatus, IccStatus, Response, ResponseContext, SlotStatus};
pub use sequence::SequenceCounter;
