#[path = "../common/mod.rs"]
mod common;

use libccid::connection::{Connection, ConnectionStateTag};
use libccid::test_support;
use libccid::transport::mock::MockTransport;
use libccid::types::{Protocol, Voltage};
use libccid::{Error, ProtocolError, TransportError};

#[test]
fn sequence_mismatch_faults() {
    let mut conn = common::ready_connection();
    let m = conn.transport_mut();
    m.echo_sequence = false;
    // Next command carries 2; the reply claims 3.
    m.push_response(common::fixtures::apdu_reply(3, &common::fixtures::sw_ok()));

    match conn.transmit(&common::fixtures::select_apdu()) {
        Err(Error::Protocol(ProtocolError::SequenceMismatch {
            expected: 2,
            received: 3,
        })) => {}
        other => panic!("expected SequenceMismatch, got {:?}", other),
    }
    assert_eq!(conn.current_state(), ConnectionStateTag::Faulted);
}

#[test]
fn card_absent_on_power_on() {
    common::init_logging();
    // bStatus: command failed, no ICC present; bError 5.
    let mock = common::echoing_mock(vec![test_support::data_block_failed(0, 0x02, 5)]);
    let mut conn = Connection::new(mock);

    match conn.connect(Voltage::Auto) {
        Err(Error::CardError {
            status: 0x42,
            error_code: 5,
        }) => {}
        other => panic!("expected CardError, got {:?}", other),
    }
    assert_eq!(conn.current_state(), ConnectionStateTag::Disconnected);
    assert!(conn.current_atr().is_none());
}

#[test]
fn mute_card_then_retry_succeeds() {
    common::init_logging();
    let mock = common::echoing_mock(vec![
        test_support::data_block_failed(0, 0x01, libccid::constants::ICC_MUTE),
        common::fixtures::power_on_reply(1, &common::fixtures::short_atr()),
    ]);
    let mut conn = Connection::new(mock);
    let err = conn.connect(Voltage::V5).unwrap_err();
    assert!(err.to_string().contains("ICC_MUTE"));
    assert!(conn.connect(Voltage::V5).is_ok());
    assert_eq!(conn.current_state(), ConnectionStateTag::PoweredOn);
}

#[test]
fn operations_in_wrong_state_do_no_io() {
    common::init_logging();
    let mut conn = Connection::new(MockTransport::echoing());

    assert!(matches!(
        conn.transmit(&common::fixtures::select_apdu()),
        Err(Error::InvalidState {
            current: ConnectionStateTag::Disconnected,
            required: ConnectionStateTag::Ready,
        })
    ));
    assert!(matches!(
        conn.set_parameters(Protocol::T1),
        Err(Error::InvalidState {
            current: ConnectionStateTag::Disconnected,
            ..
        })
    ));
    assert_eq!(conn.transport().io_calls(), 0);

    let mut conn = common::ready_connection();
    let before = conn.transport().io_calls();
    assert!(matches!(
        conn.connect(Voltage::Auto),
        Err(Error::InvalidState {
            current: ConnectionStateTag::Ready,
            required: ConnectionStateTag::Disconnected,
        })
    ));
    assert_eq!(conn.transport().io_calls(), before);
    assert_eq!(conn.current_state(), ConnectionStateTag::Ready);
}

#[test]
fn transmit_from_powered_on_is_invalid() {
    common::init_logging();
    let mock = common::echoing_mock(vec![common::fixtures::power_on_reply(
        0,
        &common::fixtures::short_atr(),
    )]);
    let mut conn = Connection::new(mock);
    conn.connect(Voltage::Auto).unwrap();
    let before = conn.transport().io_calls();
    assert!(matches!(
        conn.transmit(&common::fixtures::select_apdu()),
        Err(Error::InvalidState {
            current: ConnectionStateTag::PoweredOn,
            ..
        })
    ));
    assert_eq!(conn.transport().io_calls(), before);
}

#[test]
fn oversized_apdu_rejected_before_io() {
    let mut conn = common::ready_connection();
    let before = conn.transport().io_calls();
    let seq = conn.next_sequence();
    match conn.transmit(&vec![0u8; 262]) {
        Err(Error::ApduTooLarge { len: 262, max: 261 }) => {}
        other => panic!("expected ApduTooLarge, got {:?}", other),
    }
    assert_eq!(conn.transport().io_calls(), before);
    assert_eq!(conn.next_sequence(), seq);
    assert_eq!(conn.current_state(), ConnectionStateTag::Ready);
}

#[test]
fn short_read_faults() {
    let mut conn = common::ready_connection();
    conn.transport_mut().push_response(vec![0x80, 0x02, 0x00]);
    match conn.transmit(&common::fixtures::select_apdu()) {
        Err(Error::Transport(TransportError::ShortRead { actual: 3 })) => {}
        other => panic!("expected ShortRead, got {:?}", other),
    }
    assert_eq!(conn.current_state(), ConnectionStateTag::Faulted);
}

#[test]
fn truncated_payload_is_malformed() {
    let mut conn = common::ready_connection();
    let mut reply = common::fixtures::apdu_reply(2, &[0x61, 0x10, 0x90, 0x00]);
    reply.truncate(12);
    conn.transport_mut().push_response(reply);
    assert!(matches!(
        conn.transmit(&common::fixtures::select_apdu()),
        Err(Error::Protocol(ProtocolError::MalformedFrame { .. }))
    ));
    assert_eq!(conn.current_state(), ConnectionStateTag::Faulted);
}

#[test]
fn short_write_faults() {
    let mut conn = common::ready_connection();
    conn.transport_mut().set_write_limit(9);
    assert!(matches!(
        conn.transmit(&common::fixtures::select_apdu()),
        Err(Error::Transport(TransportError::ShortWrite {
            expected: 14,
            actual: 9
        }))
    ));
    assert_eq!(conn.current_state(), ConnectionStateTag::Faulted);
}

#[test]
fn timeout_faults_ready_connection() {
    let mut conn = common::ready_connection();
    // Empty reply queue reads as a timeout.
    match conn.transmit(&common::fixtures::select_apdu()) {
        Err(Error::Transport(TransportError::Timeout { timeout_ms: 5000 })) => {}
        other => panic!("expected Timeout, got {:?}", other),
    }
    assert_eq!(conn.current_state(), ConnectionStateTag::Faulted);
}

#[test]
fn power_on_timeout_stays_disconnected() {
    common::init_logging();
    let mut conn = Connection::new(MockTransport::echoing());
    assert!(matches!(
        conn.connect(Voltage::Auto),
        Err(Error::Transport(TransportError::Timeout { .. }))
    ));
    assert_eq!(conn.current_state(), ConnectionStateTag::Disconnected);
}

#[test]
fn card_error_keeps_ready() {
    let mut conn = common::ready_connection();
    conn.transport_mut()
        .push_response(test_support::data_block_failed(2, 0x00, libccid::constants::XFR_PARITY_ERROR));
    let err = conn.transmit(&common::fixtures::select_apdu()).unwrap_err();
    assert!(err.is_card_rejection());
    assert_eq!(conn.current_state(), ConnectionStateTag::Ready);
}

#[test]
fn rejected_parameters_keep_powered_on() {
    common::init_logging();
    let mock = common::echoing_mock(vec![
        common::fixtures::power_on_reply(0, &common::fixtures::short_atr()),
        test_support::parameters_failed(1, 0x0A),
    ]);
    let mut conn = Connection::new(mock);
    conn.connect(Voltage::Auto).unwrap();
    match conn.set_parameters(Protocol::T1) {
        Err(Error::CcidError {
            status: 0x40,
            error_code: 0x0A,
        }) => {}
        other => panic!("expected CcidError, got {:?}", other),
    }
    assert_eq!(conn.current_state(), ConnectionStateTag::PoweredOn);
}

#[test]
fn wrong_reply_type_faults() {
    common::init_logging();
    let mock = common::echoing_mock(vec![
        common::fixtures::power_on_reply(0, &common::fixtures::short_atr()),
        // DataBlock where a Parameters reply is expected.
        common::fixtures::apdu_reply(1, &[0x90, 0x00]),
    ]);
    let mut conn = Connection::new(mock);
    conn.connect(Voltage::Auto).unwrap();
    assert!(matches!(
        conn.set_parameters(Protocol::T0),
        Err(Error::Protocol(ProtocolError::UnexpectedMessageType {
            expected: 0x82,
            actual: 0x80,
        }))
    ));
    assert_eq!(conn.current_state(), ConnectionStateTag::Faulted);
}
