// libccid/src/transport/traits.rs

use crate::error::TransportError;

/// Duplex byte pipe to a CCID reader: one bulk-OUT and one bulk-IN
/// endpoint. Device discovery, permissions and interface claiming happen
/// before a Transport is handed to the engine.
pub trait Transport {
    /// Write one command message. Returns the number of bytes the device
    /// accepted.
    fn send(&mut self, data: &[u8], timeout_ms: u32) -> Result<usize, TransportError>;

    /// Read one bulk-IN transfer of at most `max_len` bytes.
    fn receive(&mut self, max_len: usize, timeout_ms: u32) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8], timeout_ms: u32) -> Result<usize, TransportError> {
        (**self).send(data, timeout_ms)
    }

    fn receive(&mut self, max_len: usize, timeout_ms: u32) -> Result<Vec<u8>, TransportError> {
        (**self).receive(max_len, timeout_ms)
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, data: &[u8], timeout_ms: u32) -> Result<usize, TransportError> {
        (**self).send(data, timeout_ms)
    }

    fn receive(&mut self, max_len: usize, timeout_ms: u32) -> Result<Vec<u8>, TransportError> {
        (**self).receive(max_len, timeout_ms)
    }
}
