#[path = "../common/mod.rs"]
mod common;

use libccid::protocol::commands::*;
use libccid::protocol::Command;
use libccid::types::{Protocol, ProtocolParameters, T0Parameters, Voltage};
use libccid::Error;

#[test]
fn power_on_vectors() {
    let cases = [
        (Voltage::Auto, "62000000000003000000"),
        (Voltage::V5, "62000000000003010000"),
        (Voltage::V3, "62000000000003020000"),
        (Voltage::V1_8, "62000000000003030000"),
    ];
    for (voltage, expected) in cases {
        assert_eq!(hex::encode(encode_power_on(voltage, 3)), expected, "{}", voltage);
    }
}

#[test]
fn power_off_and_slot_status_vectors() {
    assert_eq!(hex::encode(encode_power_off(0x10)), "63000000000010000000");
    assert_eq!(hex::encode(encode_get_slot_status(0xFF)), "650000000000ff000000");
}

#[test]
fn set_parameters_t0() {
    let params = ProtocolParameters::T0(T0Parameters::default());
    let bytes = encode_set_parameters(&params, 1);
    assert_eq!(hex::encode(&bytes), "610500000000010000001100000a00");
}

#[test]
fn set_parameters_t1_defaults() {
    let cmd = Command::set_parameters(Protocol::T1);
    let frame = cmd.encode(2);
    assert_eq!(
        hex::encode(frame.as_bytes()),
        "61070000000002010000111000 4d002000".replace(' ', "")
    );
}

#[test]
fn xfr_block_carries_apdu() {
    let apdu = common::fixtures::select_apdu();
    let bytes = encode_xfr_block(&apdu, 0, 0, 7);
    assert_eq!(hex::encode(&bytes), "6f040000000007000000 00a40400".replace(' ', ""));
}

#[test]
fn xfr_block_size_limit() {
    assert!(Command::xfr_block(&vec![0u8; 261], 261).is_ok());
    match Command::xfr_block(&vec![0u8; 262], 261) {
        Err(Error::ApduTooLarge { len: 262, max: 261 }) => {}
        other => panic!("expected ApduTooLarge, got {:?}", other),
    }
}
