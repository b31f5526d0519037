#[path = "../common/mod.rs"]
mod common;

use libccid::connection::{Connection, ConnectionStateTag};
use libccid::constants::*;
use libccid::test_support;
use libccid::types::{Protocol, T1Parameters, Voltage};
use libccid::ProtocolParameters;

#[test]
fn successful_session() {
    common::init_logging();
    let mock = common::echoing_mock(vec![
        common::fixtures::power_on_reply(0, &[0x3B, 0x00]),
        common::fixtures::parameters_ok(1, Protocol::T1),
        common::fixtures::apdu_reply(2, &[0x90, 0x00]),
    ]);
    let mut conn = Connection::new(mock);

    let atr = conn.connect(Voltage::Auto).unwrap();
    assert_eq!(atr.as_bytes(), &[0x3B, 0x00]);
    assert_eq!(conn.current_state(), ConnectionStateTag::PoweredOn);

    conn.set_parameters(Protocol::T1).unwrap();
    assert_eq!(conn.current_state(), ConnectionStateTag::Ready);

    let resp = conn.transmit(&[0x00, 0xA4, 0x04, 0x00]).unwrap();
    assert_eq!(resp, vec![0x90, 0x00]);
    assert_eq!(conn.current_state(), ConnectionStateTag::Ready);

    let sent = &conn.transport().sent;
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0], vec![0x62, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(sent[1][0], PC_TO_RDR_SET_PARAMETERS);
    assert_eq!(sent[1][7], 0x01);
    assert_eq!(
        sent[2],
        vec![0x6F, 0x04, 0, 0, 0, 0x00, 0x02, 0, 0, 0, 0x00, 0xA4, 0x04, 0x00]
    );
}

#[test]
fn sequence_numbers_increase_per_command() {
    let mut conn = common::ready_connection();
    for _ in 0..3 {
        conn.transport_mut()
            .push_response(common::fixtures::apdu_reply(0, &common::fixtures::sw_ok()));
        conn.transmit(&common::fixtures::select_apdu()).unwrap();
    }
    let seqs: Vec<u8> = conn.transport().sent.iter().map(|f| f[6]).collect();
    assert_eq!(seqs, vec![0, 1, 2, 3, 4]);
}

#[test]
fn atr_is_returned_unaltered() {
    common::init_logging();
    let atr = common::fixtures::t1_atr();
    let mock = common::echoing_mock(vec![common::fixtures::power_on_reply(0, &atr)]);
    let mut conn = Connection::new(mock);
    let got = conn.connect(Voltage::V3).unwrap();
    assert_eq!(got.as_bytes(), &atr[..]);
    assert_eq!(conn.current_atr().map(|a| a.as_bytes()), Some(&atr[..]));
    // bPowerSelect = 3V
    assert_eq!(conn.transport().sent[0][7], 0x02);
}

#[test]
fn transmit_returns_data_and_status_word() {
    let mut conn = common::ready_connection();
    let mut reply = vec![0xA5; 16];
    reply.extend_from_slice(&common::fixtures::sw_ok());
    conn.transport_mut()
        .push_response(common::fixtures::apdu_reply(2, &reply));
    let resp = conn.transmit(&common::fixtures::read_binary_apdu()).unwrap();
    assert_eq!(resp.len(), 18);
    assert_eq!(&resp[16..], &[0x90, 0x00]);
}

#[test]
fn custom_parameter_block_is_sent() {
    common::init_logging();
    let params = ProtocolParameters::T1(T1Parameters::default().with_waiting_integers(7, 5));
    let block = params.encode();
    let mock = common::echoing_mock(vec![
        common::fixtures::power_on_reply(0, &common::fixtures::short_atr()),
        test_support::parameters_reply(1, Protocol::T1, &block),
    ]);
    let mut conn = Connection::new(mock);
    conn.connect(Voltage::Auto).unwrap();
    conn.set_parameters_with(params).unwrap();
    assert_eq!(conn.protocol(), Some(Protocol::T1));
    assert_eq!(&conn.transport().sent[1][CCID_HEADER_LEN..], &block[..]);
}

#[test]
fn renegotiation_from_ready_is_allowed() {
    let mut conn = common::ready_connection();
    conn.transport_mut()
        .push_response(common::fixtures::parameters_ok(2, Protocol::T0));
    conn.set_parameters(Protocol::T0).unwrap();
    assert_eq!(conn.protocol(), Some(Protocol::T0));
}

#[test]
fn time_extension_then_reply() {
    let mut conn = common::ready_connection();
    let m = conn.transport_mut();
    m.push_response(test_support::time_extension(2, 1));
    m.push_response(test_support::time_extension(2, 3));
    m.push_response(common::fixtures::apdu_reply(2, &common::fixtures::sw_ok()));
    let resp = conn.transmit(&common::fixtures::select_apdu()).unwrap();
    assert_eq!(resp, common::fixtures::sw_ok());
    // One command, three reads.
    assert_eq!(conn.transport().sent.len(), 3);
}

#[test]
fn slot_status_reports_card() {
    let mut conn = common::ready_connection();
    conn.transport_mut()
        .push_response(test_support::slot_status_reply(2, 0x00, 0x00));
    let status = conn.slot_status().unwrap();
    assert!(status.card_present());
    assert!(status.card_powered());
    assert_eq!(conn.current_state(), ConnectionStateTag::Ready);
}
