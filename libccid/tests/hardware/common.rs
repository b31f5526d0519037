#![cfg(feature = "usb")]

//! Helpers for tests against a real reader.
//!
//! Opening returns `Ok(None)` when no CCID reader is attached, so the
//! ignored tests still pass on machines without hardware.

use libccid::connection::Connection;
use libccid::transport::usb::UsbTransport;
use libccid::{Error, Result, TransportError};

/// Open the first CCID reader and wrap it in a Connection.
///
/// - Ok(Some(conn)) : a reader was found and claimed
/// - Ok(None) : no reader attached
/// - Err(e) : any other failure
pub fn open_connection() -> Result<Option<Connection<UsbTransport>>> {
    let _ = env_logger::builder().is_test(true).try_init();
    match UsbTransport::open() {
        Ok(transport) => Ok(Some(Connection::new(transport))),
        Err(Error::Transport(TransportError::DeviceNotFound)) => Ok(None),
        Err(e) => Err(e),
    }
}
