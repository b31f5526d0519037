#[path = "../common/mod.rs"]
mod common;

use libccid::transport::mock::MockTransport;
use libccid::transport::Transport;
use libccid::{Error, TransportError};

#[test]
fn send_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.set_send_failures(1);

    // First send should fail (simulated)
    assert!(matches!(
        m.send(&[0x65], 300),
        Err(TransportError::Timeout { timeout_ms: 300 })
    ));

    // Second send goes through
    assert_eq!(m.send(&[0x65], 300).unwrap(), 1);
    assert_eq!(m.sent.len(), 1);
}

#[test]
fn write_limit_reports_partial_count() {
    let mut m = MockTransport::new();
    m.set_write_limit(3);
    assert_eq!(m.send(&[0u8; 10], 100).unwrap(), 3);
}

#[test]
fn scripted_errors_surface_in_order() {
    let mut m = MockTransport::new();
    m.push_error(TransportError::Disconnected);
    m.push_response(vec![0x80]);
    assert!(matches!(m.receive(64, 100), Err(TransportError::Disconnected)));
    assert_eq!(m.receive(64, 100).unwrap(), vec![0x80]);
    assert_eq!(m.receive_calls, 2);
}

#[test]
fn transport_error_converts_to_crate_error() {
    let err: Error = TransportError::ShortRead { actual: 4 }.into();
    assert!(err.is_fatal_to_exchange());
    assert!(!err.is_card_rejection());
    assert!(err.to_string().contains('4'));
}
