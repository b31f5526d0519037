// libccid/src/transport/mod.rs

/// Scripted transport for tests.
pub mod mock;
/// The `Transport` trait.
pub mod traits;
#[cfg(feature = "usb")]
pub mod usb;

pub use mock::{MockReply, MockTransport};
pub use traits::Transport;
#[cfg(feature = "usb")]
pub use usb::UsbTransport;
