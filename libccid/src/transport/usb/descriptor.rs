// libccid/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

use crate::constants::CCID_INTERFACE_CLASS;

/// Location of a CCID interface and its bulk endpoint pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CcidInterface {
    pub number: u8,
    pub alt_setting: u8,
    pub bulk_in: u8,
    pub bulk_out: u8,
}

/// Walk the active configuration and return the first interface of class
/// 0x0B that exposes both a bulk-IN and a bulk-OUT endpoint. The optional
/// interrupt-IN (slot change notifications) is not used.
pub fn find_ccid_interface<T: UsbContext>(device: &Device<T>) -> Option<CcidInterface> {
    let config = device
        .active_config_descriptor()
        .or_else(|_| device.config_descriptor(0))
        .ok()?;

    for interface in config.interfaces() {
        for desc in interface.descriptors() {
            if desc.class_code() != CCID_INTERFACE_CLASS {
                continue;
            }

            let mut bulk_in = None;
            let mut bulk_out = None;
            for ep in desc.endpoint_descriptors() {
                if ep.transfer_type() != TransferType::Bulk {
                    continue;
                }
                match ep.direction() {
                    Direction::In if bulk_in.is_none() => bulk_in = Some(ep.address()),
                    Direction::Out if bulk_out.is_none() => bulk_out = Some(ep.address()),
                    _ => {}
                }
            }

            if let (Some(bulk_in), Some(bulk_out)) = (bulk_in, bulk_out) {
                return Some(CcidInterface {
                    number: desc.interface_number(),
                    alt_setting: desc.setting_number(),
                    bulk_in,
                    bulk_out,
                });
            }
        }
    }

    None
}
