#[path = "../common/mod.rs"]
mod common;

use libccid::protocol::codec::decode_response_frame;
use libccid::protocol::{IccStatus, LengthPolicy, Response, ResponseContext};
use libccid::test_support;
use libccid::types::{Protocol, ProtocolParameters};
use libccid::{Error, ProtocolError};

fn decode(context: ResponseContext, seq: u8, bytes: &[u8]) -> libccid::Result<Response> {
    decode_response_frame(context, seq, bytes, LengthPolicy::Lenient).map(|(_, r)| r)
}

#[test]
fn atr_from_power_on_reply() {
    let atr = common::fixtures::t1_atr();
    let reply = common::fixtures::power_on_reply(0, &atr);
    match decode(ResponseContext::PowerOn, 0, &reply).unwrap() {
        Response::PowerOnResult { atr: got } => assert_eq!(got.as_bytes(), &atr[..]),
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn atr_too_long_is_rejected() {
    let reply = common::fixtures::power_on_reply(0, &[0x3B; 34]);
    assert!(matches!(
        decode(ResponseContext::PowerOn, 0, &reply),
        Err(Error::Protocol(ProtocolError::InvalidAtrLength { len: 34 }))
    ));
}

#[test]
fn parameters_reply_decodes_block() {
    let reply = common::fixtures::parameters_ok(4, Protocol::T0);
    match decode(ResponseContext::SetParameters, 4, &reply).unwrap() {
        Response::ParametersResult { params } => {
            assert_eq!(params, Protocol::T0.default_parameters());
            assert!(matches!(params, ProtocolParameters::T0(_)));
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn parameters_block_length_must_match_protocol() {
    // T=1 announced, T=0 sized block.
    let reply = test_support::parameters_reply(0, Protocol::T1, &[0x11, 0, 0, 0x0A, 0]);
    assert!(matches!(
        decode(ResponseContext::SetParameters, 0, &reply),
        Err(Error::Protocol(ProtocolError::MalformedFrame { .. }))
    ));
}

#[test]
fn slot_status_reply_fields() {
    let reply = test_support::slot_status_reply(1, 0x02, 0x00);
    match decode(ResponseContext::SlotStatus, 1, &reply).unwrap() {
        Response::SlotStatusResult { status } => {
            assert_eq!(status.icc, IccStatus::NoCard);
            assert!(!status.card_present());
        }
        other => panic!("unexpected response: {:?}", other),
    }
}

#[test]
fn failed_power_on_maps_to_card_error() {
    let reply = test_support::data_block_failed(0, 0x02, 5);
    let resp = decode(ResponseContext::PowerOn, 0, &reply).unwrap();
    assert!(matches!(
        resp.into_result(),
        Err(Error::CardError {
            status: 0x42,
            error_code: 5
        })
    ));
}

#[test]
fn time_extension_reply() {
    let reply = test_support::time_extension(0, 4);
    assert_eq!(
        decode(ResponseContext::Transmit, 0, &reply).unwrap(),
        Response::TimeExtension { multiplier: 4 }
    );
}
