#![cfg(feature = "usb")]

#[path = "common.rs"]
mod common;

use libccid::types::{Protocol, Voltage};
use libccid::Result;
use serial_test::serial;

// These tests need a CCID reader with a card inserted. They are marked
// `#[ignore]` so CI does not attempt to run them. Run manually with:
//
// cargo test -p libccid --test hardware --features usb -- --ignored

#[test]
#[ignore]
#[serial]
fn slot_status_on_real_reader() -> Result<()> {
    if let Some(mut conn) = common::open_connection()? {
        let status = conn.slot_status()?;
        log::info!("slot status: {:?}", status);
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn select_master_file_on_real_card() -> Result<()> {
    let Some(mut conn) = common::open_connection()? else {
        return Ok(());
    };
    let atr = conn.connect(Voltage::Auto)?;
    log::info!("ATR {}", atr);
    if let Err(e) = conn.set_parameters(Protocol::T1) {
        log::info!("T=1 refused ({}), trying T=0", e);
        conn.set_parameters(Protocol::T0)?;
    }
    let resp = conn.transmit(&[0x00, 0xA4, 0x00, 0x00, 0x02, 0x3F, 0x00])?;
    assert!(resp.len() >= 2);
    conn.disconnect();
    Ok(())
}
