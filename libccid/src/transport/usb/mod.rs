// libccid/src/transport/usb/mod.rs

#![cfg(feature = "usb")]

use log::{debug, warn};
use rusb::{Context, Device, DeviceHandle, UsbContext};

use crate::error::TransportError;
use crate::transport::traits::Transport;
use crate::utils::ms;
use crate::Result;

mod descriptor;
pub use descriptor::{find_ccid_interface, CcidInterface};

/// Bulk transport to the first CCID-class reader on the bus, built on
/// `rusb`. Enabled with `--features usb`. The claimed interface is released
/// (and a detached kernel driver re-attached) on drop.
pub struct UsbTransport {
    handle: DeviceHandle<Context>,
    interface: CcidInterface,
    reattach_driver: bool,
    vendor_id: u16,
    product_id: u16,
}

impl UsbTransport {
    /// Open the first device exposing a CCID interface.
    pub fn open() -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            if let Some(interface) = find_ccid_interface(&device) {
                return Self::from_device(&device, interface);
            }
        }
        Err(TransportError::DeviceNotFound.into())
    }

    /// Open a specific reader by vendor/product id.
    pub fn open_by_ids(vendor_id: u16, product_id: u16) -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            if dd.vendor_id() != vendor_id || dd.product_id() != product_id {
                continue;
            }
            if let Some(interface) = find_ccid_interface(&device) {
                return Self::from_device(&device, interface);
            }
        }
        Err(TransportError::DeviceNotFound.into())
    }

    fn from_device(device: &Device<Context>, interface: CcidInterface) -> Result<Self> {
        let dd = device.device_descriptor()?;
        let mut handle = device.open()?;

        // Linux may have a kernel driver bound to the reader interface.
        let mut reattach_driver = false;
        if let Ok(true) = handle.kernel_driver_active(interface.number) {
            handle.detach_kernel_driver(interface.number)?;
            reattach_driver = true;
        }

        handle.claim_interface(interface.number)?;
        if interface.alt_setting != 0 {
            handle.set_alternate_setting(interface.number, interface.alt_setting)?;
        }

        debug!(
            "opened CCID reader {:04x}:{:04x} interface {} (IN {:#04x}, OUT {:#04x})",
            dd.vendor_id(),
            dd.product_id(),
            interface.number,
            interface.bulk_in,
            interface.bulk_out
        );

        Ok(Self {
            handle,
            interface,
            reattach_driver,
            vendor_id: dd.vendor_id(),
            product_id: dd.product_id(),
        })
    }

    /// Claimed interface and endpoint addresses.
    pub fn interface(&self) -> CcidInterface {
        self.interface
    }

    pub fn vendor_id(&self) -> u16 {
        self.vendor_id
    }

    pub fn product_id(&self) -> u16 {
        self.product_id
    }
}

fn map_usb_error(e: rusb::Error, timeout_ms: u32) -> TransportError {
    match e {
        rusb::Error::Timeout => TransportError::Timeout { timeout_ms },
        rusb::Error::NoDevice => TransportError::Disconnected,
        other => TransportError::Usb(other),
    }
}

impl Transport for UsbTransport {
    fn send(&mut self, data: &[u8], timeout_ms: u32) -> std::result::Result<usize, TransportError> {
        self.handle
            .write_bulk(self.interface.bulk_out, data, ms(timeout_ms))
            .map_err(|e| map_usb_error(e, timeout_ms))
    }

    fn receive(
        &mut self,
        max_len: usize,
        timeout_ms: u32,
    ) -> std::result::Result<Vec<u8>, TransportError> {
        let mut buf = vec![0u8; max_len];
        let n = self
            .handle
            .read_bulk(self.interface.bulk_in, &mut buf, ms(timeout_ms))
            .map_err(|e| map_usb_error(e, timeout_ms))?;
        buf.truncate(n);
        Ok(buf)
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.handle.release_interface(self.interface.number) {
            warn!("releasing CCID interface {} failed: {}", self.interface.number, e);
        }
        if self.reattach_driver {
            let _ = self.handle.attach_kernel_driver(self.interface.number);
        }
    }
}
