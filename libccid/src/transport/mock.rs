// libccid/src/transport/mock.rs

use std::collections::VecDeque;

use crate::constants::CCID_HEADER_LEN;
use crate::error::TransportError;
use crate::transport::traits::Transport;

/// One scripted bulk-IN completion.
#[derive(Debug)]
pub enum MockReply {
    Bytes(Vec<u8>),
    Fail(TransportError),
}

/// Mock transport for unit tests. It records sent frames and returns queued
/// replies in order; an empty queue reads as a timeout.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub replies: VecDeque<MockReply>,
    /// Number of `receive` calls made, successful or not.
    pub receive_calls: usize,
    /// Testing hook: accept at most this many bytes per `send`.
    pub write_limit: Option<usize>,
    /// Testing hook: number of subsequent `send` calls that fail.
    pub send_failures: usize,
    /// Rewrite bSeq of each reply to the bSeq of the last sent frame, so
    /// scripts do not have to track sequence numbers.
    pub echo_sequence: bool,
    /// Largest `max_len` seen by `receive`.
    pub last_max_len: usize,
}

impl MockTransport {
    /// Mock that returns replies unmodified.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that patches reply sequence numbers to match the command.
    pub fn echoing() -> Self {
        Self {
            echo_sequence: true,
            ..Self::default()
        }
    }

    /// Queue bytes for the next `receive`.
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.replies.push_back(MockReply::Bytes(resp));
    }

    /// Queue a failed `receive`.
    pub fn push_error(&mut self, err: TransportError) {
        self.replies.push_back(MockReply::Fail(err));
    }

    /// Simulate short writes.
    pub fn set_write_limit(&mut self, limit: usize) {
        self.write_limit = Some(limit);
    }

    pub fn set_send_failures(&mut self, n: usize) {
        self.send_failures = n;
    }

    /// Remove and return the last frame sent.
    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Total transport calls, used to assert that a rejected operation
    /// never reached the wire.
    pub fn io_calls(&self) -> usize {
        self.sent.len() + self.receive_calls
    }

    fn last_sequence(&self) -> Option<u8> {
        self.sent
            .last()
            .filter(|f| f.len() >= CCID_HEADER_LEN)
            .map(|f| f[6])
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8], timeout_ms: u32) -> Result<usize, TransportError> {
        if self.send_failures > 0 {
            self.send_failures -= 1;
            return Err(TransportError::Timeout { timeout_ms });
        }
        self.sent.push(data.to_vec());
        Ok(self.write_limit.map_or(data.len(), |l| l.min(data.len())))
    }

    fn receive(&mut self, max_len: usize, timeout_ms: u32) -> Result<Vec<u8>, TransportError> {
        self.receive_calls += 1;
        self.last_max_len = self.last_max_len.max(max_len);
        match self.replies.pop_front() {
            None => Err(TransportError::Timeout { timeout_ms }),
            Some(MockReply::Fail(e)) => Err(e),
            Some(MockReply::Bytes(mut bytes)) => {
                if self.echo_sequence && bytes.len() >= CCID_HEADER_LEN {
                    if let Some(seq) = self.last_sequence() {
                        bytes[6] = seq;
                    }
                }
                bytes.truncate(max_len);
                Ok(bytes)
            }
        }
    }
}
