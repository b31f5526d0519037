// Connection setup shared by the integration tests.

use libccid::connection::Connection;
use libccid::test_support;
use libccid::transport::mock::MockTransport;
use libccid::types::Protocol;

/// Install env_logger once so `RUST_LOG=debug cargo test` shows frame traces.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A sequence-echoing mock pre-seeded with `responses`.
pub fn echoing_mock(responses: Vec<Vec<u8>>) -> MockTransport {
    test_support::echoing_mock_with_responses(responses)
}

/// A connection in `Ready` (T=1) holding the short test ATR.
pub fn ready_connection() -> Connection<MockTransport> {
    init_logging();
    test_support::ready_mock_connection(&super::fixtures::short_atr(), Protocol::T1).unwrap()
}
