// libccid/src/protocol/sequence.rs

use crate::error::ProtocolError;
use crate::Result;

/// bSeq allocator. Each command takes the current value; the reader echoes
/// it back in the matching response. Wraps at 256.
#[derive(Debug, Clone, Default)]
pub struct SequenceCounter {
    current: u8,
}

impl SequenceCounter {
    /// Counter starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(value: u8) -> Self {
        Self { current: value }
    }

    /// Return the current value and advance.
    pub fn next(&mut self) -> u8 {
        let seq = self.current;
        self.current = self.current.wrapping_add(1);
        seq
    }

    /// Value the next command will carry.
    pub fn peek(&self) -> u8 {
        self.current
    }

    /// True when a reply echoes the bSeq that was sent.
    pub fn validate(expected: u8, received: u8) -> bool {
        expected == received
    }

    /// `validate`, reported as a `SequenceMismatch` error.
    pub fn check(expected: u8, received: u8) -> Result<()> {
        if Self::validate(expected, received) {
            Ok(())
        } else {
            Err(ProtocolError::SequenceMismatch { expected, received }.into())
        }
    }
}
