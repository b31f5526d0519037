#![cfg(feature = "usb")]

//! Power a card on, negotiate a protocol and send APDUs given as hex.
//!
//! Usage:
//!   cargo run -p libccid --example ccid_session --features usb -- 00A4040000 00CA9F7F00
//!
//! Set `RUST_LOG=debug` to see every CCID frame.

use anyhow::Context;
use libccid::connection::Connection;
use libccid::transport::usb::UsbTransport;
use libccid::{Protocol, Voltage, bytes_to_hex_spaced, parse_hex};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let apdus = std::env::args()
        .skip(1)
        .map(|arg| parse_hex(&arg).with_context(|| format!("bad APDU {:?}", arg)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let transport = UsbTransport::open().context("no CCID reader found")?;
    let iface = transport.interface();
    println!(
        "Opened reader {:04x}:{:04x} (interface {}, IN=0x{:02x} OUT=0x{:02x})",
        transport.vendor_id(),
        transport.product_id(),
        iface.number,
        iface.bulk_in,
        iface.bulk_out
    );

    let mut conn = Connection::new(transport);
    let status = conn.slot_status()?;
    println!("Slot: {:?}", status);
    if !status.card_present() {
        println!("No card in the slot");
        return Ok(());
    }

    let atr = conn.connect(Voltage::Auto)?;
    println!("ATR: {}", atr);

    if let Err(e) = conn.set_parameters(Protocol::T1) {
        if !e.is_card_rejection() {
            return Err(e.into());
        }
        println!("T=1 refused ({}), using T=0", e);
        conn.set_parameters(Protocol::T0)?;
    }
    println!("Protocol: {}", conn.protocol().map_or("-".to_string(), |p| p.to_string()));

    for apdu in &apdus {
        println!(">> {}", bytes_to_hex_spaced(apdu));
        match conn.transmit(apdu) {
            Ok(resp) => println!("<< {}", bytes_to_hex_spaced(&resp)),
            Err(e) if e.is_card_rejection() => println!("!! {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    conn.disconnect();
    Ok(())
}
