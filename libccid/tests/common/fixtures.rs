// Commonly used ATRs, APDUs and reply frames.

use libccid::test_support;
use libccid::types::Protocol;

/// Minimal ATR: TS = direct convention, T0 = no interface bytes.
pub fn short_atr() -> Vec<u8> {
    vec![0x3B, 0x00]
}

/// ATR of a typical T=1 contact card.
pub fn t1_atr() -> Vec<u8> {
    hex::decode("3B8F8001804F0CA000000306030001000000006A").unwrap()
}

/// SELECT by AID, no Le.
pub fn select_apdu() -> Vec<u8> {
    vec![0x00, 0xA4, 0x04, 0x00]
}

/// READ BINARY, Le = 0x10.
pub fn read_binary_apdu() -> Vec<u8> {
    hex::decode("00B0000010").unwrap()
}

pub fn sw_ok() -> Vec<u8> {
    vec![0x90, 0x00]
}

pub fn power_on_reply(seq: u8, atr: &[u8]) -> Vec<u8> {
    test_support::data_block(seq, atr)
}

pub fn parameters_ok(seq: u8, protocol: Protocol) -> Vec<u8> {
    let block = protocol.default_parameters().encode();
    test_support::parameters_reply(seq, protocol, &block)
}

pub fn apdu_reply(seq: u8, response: &[u8]) -> Vec<u8> {
    test_support::data_block(seq, response)
}

/// PowerOff / GetSlotStatus reply: card present and inactive.
pub fn slot_inactive(seq: u8) -> Vec<u8> {
    test_support::slot_status_reply(seq, 0x01, 0x00)
}
