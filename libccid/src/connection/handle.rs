// libccid/src/connection/handle.rs

use log::{debug, info, warn};

use crate::connection::config::ConnectionConfig;
use crate::connection::state::{ConnectionState, ConnectionStateTag};
use crate::constants::CCID_HEADER_LEN;
use crate::error::{ProtocolError, TransportError};
use crate::protocol::codec;
use crate::protocol::{Command, Response, SequenceCounter, SlotStatus};
use crate::transport::Transport;
use crate::types::{Atr, Protocol, ProtocolParameters, Voltage};
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Replies with a foreign bSeq that a power-off will read past.
const MAX_STALE_REPLIES: u8 = 4;

/// One slot of a CCID reader, driven over a [`Transport`].
///
/// Every operation is a blocking request/response pair. A connection is
/// not meant to be shared between threads; wrap it in a `Mutex` if it has
/// to be.
pub struct Connection<T: Transport> {
    transport: T,
    config: ConnectionConfig,
    sequence: SequenceCounter,
    state: ConnectionState,
}

impl<T: Transport> Connection<T> {
    /// Wrap a transport with the default configuration. No I/O happens
    /// until `connect`.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, ConnectionConfig::default())
    }

    /// Wrap a transport with an explicit configuration.
    pub fn with_config(transport: T, config: ConnectionConfig) -> Self {
        Self {
            transport,
            config,
            sequence: SequenceCounter::new(),
            state: ConnectionState::Disconnected,
        }
    }

    /// Power the card on and read its ATR.
    ///
    /// A card or reader rejection (no card, mute card) leaves the
    /// connection `Disconnected` so the call can be retried. A reply that
    /// breaks the exchange faults it.
    pub fn connect(&mut self, voltage: Voltage) -> Result<Atr> {
        self.require(ConnectionStateTag::Disconnected)?;

        let cmd = Command::power_on(voltage);
        let timeout = self.config.exchange_timeout_ms;
        match self.exchange(&cmd, timeout) {
            Ok(Response::PowerOnResult { atr }) => {
                info!("card powered on ({}), ATR {}", voltage, atr);
                self.transition(ConnectionState::PoweredOn { atr: atr.clone() });
                Ok(atr)
            }
            Ok(other) => Err(self.fault(unexpected(&cmd, &other))),
            Err(e @ Error::Protocol(_)) => Err(self.fault(e)),
            Err(e) => {
                debug!("power on failed: {}", e);
                Err(e)
            }
        }
    }

    /// Negotiate `protocol` with its default parameter block.
    pub fn set_parameters(&mut self, protocol: Protocol) -> Result<()> {
        self.set_parameters_with(protocol.default_parameters())
    }

    /// Send an explicit parameter block. Allowed from `PoweredOn` and,
    /// for renegotiation, from `Ready`.
    ///
    /// A rejected block keeps the current state; anything else that goes
    /// wrong faults the connection.
    pub fn set_parameters_with(&mut self, params: ProtocolParameters) -> Result<()> {
        let atr = match &self.state {
            ConnectionState::PoweredOn { atr } | ConnectionState::Ready { atr, .. } => atr.clone(),
            other => {
                return Err(Error::InvalidState {
                    current: other.tag(),
                    required: ConnectionStateTag::PoweredOn,
                });
            }
        };

        let requested = params.protocol();
        let cmd = Command::SetParameters { params };
        let timeout = self.config.control_timeout_ms;
        match self.exchange(&cmd, timeout) {
            Ok(Response::ParametersResult { params }) => {
                let protocol = params.protocol();
                if protocol != requested {
                    warn!("requested {} but reader selected {}", requested, protocol);
                }
                info!("protocol {} selected", protocol);
                self.transition(ConnectionState::Ready { atr, protocol });
                Ok(())
            }
            Ok(other) => Err(self.fault(unexpected(&cmd, &other))),
            Err(e) if e.is_card_rejection() => {
                warn!("parameters rejected: {}", e);
                Err(e)
            }
            Err(e) => Err(self.fault(e)),
        }
    }

    /// Exchange one APDU with the card and return the response APDU,
    /// status word included.
    ///
    /// Only valid in `Ready`. Oversized APDUs are rejected before anything
    /// is sent. A card rejection keeps the connection `Ready`.
    pub fn transmit(&mut self, apdu: &[u8]) -> Result<Vec<u8>> {
        self.require(ConnectionStateTag::Ready)?;
        let cmd = Command::xfr_block(apdu, self.config.max_apdu_len)?;

        let timeout = self.config.exchange_timeout_ms;
        match self.exchange(&cmd, timeout) {
            Ok(Response::DataBlockResult { apdu }) => Ok(apdu),
            Ok(other) => Err(self.fault(unexpected(&cmd, &other))),
            Err(e) if e.is_card_rejection() => {
                warn!("transmit rejected: {}", e);
                Err(e)
            }
            Err(e) => Err(self.fault(e)),
        }
    }

    /// Query the slot without changing the card's power state. Valid in
    /// every state except `Faulted`.
    pub fn slot_status(&mut self) -> Result<SlotStatus> {
        if let ConnectionState::Faulted { reason } = &self.state {
            return Err(Error::ConnectionFaulted {
                reason: reason.clone(),
            });
        }

        let cmd = Command::GetSlotStatus;
        let timeout = self.config.control_timeout_ms;
        match self.exchange(&cmd, timeout) {
            Ok(Response::SlotStatusResult { status }) => {
                debug!("slot status: {:?}", status);
                Ok(status)
            }
            Ok(other) => Err(self.fault(unexpected(&cmd, &other))),
            Err(e) if e.is_card_rejection() => Err(e),
            Err(e @ Error::Transport(_)) if !self.state.is_powered() => Err(e),
            Err(e) => Err(self.fault(e)),
        }
    }

    /// Power the card off and return to `Disconnected`.
    ///
    /// Errors from the power-off exchange are logged and swallowed; the
    /// state is `Disconnected` afterwards regardless. A no-op when already
    /// disconnected.
    pub fn disconnect(&mut self) {
        if let ConnectionState::Disconnected = self.state {
            return;
        }

        // A reply to a timed-out command may still be queued ahead of ours.
        let timeout = self.config.control_timeout_ms;
        match self.exchange_skipping_stale(&Command::PowerOff, timeout, MAX_STALE_REPLIES) {
            Ok(_) => debug!("card powered off"),
            Err(e) => warn!("power off failed, ignoring: {}", e),
        }
        self.transition(ConnectionState::Disconnected);
    }

    /// Forget the current state without talking to the reader. This is
    /// the way out of `Faulted`; the card's power state is not touched.
    pub fn reset(&mut self) {
        if let ConnectionState::Disconnected = self.state {
            return;
        }
        self.transition(ConnectionState::Disconnected);
    }

    /// ATR captured by the last successful `connect`, while powered.
    pub fn current_atr(&self) -> Option<&Atr> {
        self.state.atr()
    }

    /// Current state, without its data.
    pub fn current_state(&self) -> ConnectionStateTag {
        self.state.tag()
    }

    /// Current state with ATR, protocol or fault reason.
    pub fn state(&self) -> &ConnectionState {
        &self.state
    }

    /// Protocol negotiated by `set_parameters`, while `Ready`.
    pub fn protocol(&self) -> Option<Protocol> {
        self.state.protocol()
    }

    /// Settings this connection was built with.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// bSeq the next command will carry.
    pub fn next_sequence(&self) -> u8 {
        self.sequence.peek()
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    fn require(&self, required: ConnectionStateTag) -> Result<()> {
        let current = self.state.tag();
        if current == required {
            Ok(())
        } else {
            Err(Error::InvalidState { current, required })
        }
    }

    fn transition(&mut self, next: ConnectionState) {
        let from = self.state.tag();
        let to = next.tag();
        if from != to {
            info!("connection {} -> {}", from, to);
        }
        self.state = next;
    }

    fn fault(&mut self, err: Error) -> Error {
        warn!("connection faulted: {}", err);
        self.transition(ConnectionState::Faulted {
            reason: err.to_string(),
        });
        err
    }

    /// Send one command and wait for its reply.
    ///
    /// The sequence number is consumed before anything is written, so a
    /// failed exchange never reuses it. Time-extension replies are absorbed
    /// here, up to the configured limit.
    fn exchange(&mut self, cmd: &Command, timeout_ms: u32) -> Result<Response> {
        self.exchange_skipping_stale(cmd, timeout_ms, 0)
    }

    /// `exchange`, but up to `stale_limit` replies carrying another bSeq
    /// are read and discarded instead of failing with `SequenceMismatch`.
    fn exchange_skipping_stale(
        &mut self,
        cmd: &Command,
        timeout_ms: u32,
        stale_limit: u8,
    ) -> Result<Response> {
        let frame = cmd.encode(self.sequence.next());
        debug!(">> {}", bytes_to_hex_spaced(frame.as_bytes()));

        let written = self.transport.send(frame.as_bytes(), timeout_ms)?;
        if written != frame.len() {
            return Err(TransportError::ShortWrite {
                expected: frame.len(),
                actual: written,
            }
            .into());
        }

        let context = cmd.response_context();
        let mut extensions: u8 = 0;
        let mut stale: u8 = 0;
        loop {
            let raw = self
                .transport
                .receive(self.config.max_response_len, timeout_ms)?;
            debug!("<< {}", bytes_to_hex_spaced(&raw));
            #[cfg(feature = "diagnostics")]
            log::trace!(
                "seq {} awaiting {:?}, {} bytes",
                frame.sequence(),
                context,
                raw.len()
            );

            if raw.len() < CCID_HEADER_LEN {
                return Err(TransportError::ShortRead { actual: raw.len() }.into());
            }

            let decoded = codec::decode_response_frame(
                context,
                frame.sequence(),
                &raw,
                self.config.length_policy,
            );
            let (_, response) = match decoded {
                Err(Error::Protocol(ProtocolError::SequenceMismatch { received, .. }))
                    if stale < stale_limit =>
                {
                    stale += 1;
                    debug!(
                        "discarding stale reply seq {} while waiting for seq {}",
                        received,
                        frame.sequence()
                    );
                    continue;
                }
                other => other?,
            };

            match response {
                Response::TimeExtension { multiplier } => {
                    if extensions >= self.config.max_time_extensions {
                        return Err(ProtocolError::TooManyTimeExtensions {
                            limit: self.config.max_time_extensions,
                        }
                        .into());
                    }
                    extensions += 1;
                    debug!(
                        "time extension {} (multiplier {}) for seq {}",
                        extensions,
                        multiplier,
                        frame.sequence()
                    );
                }
                other => return other.into_result(),
            }
        }
    }
}

impl<T: Transport> Drop for Connection<T> {
    fn drop(&mut self) {
        if let ConnectionState::Disconnected = self.state {
            return;
        }
        debug!("dropping connection in {}, powering off", self.state.tag());
        self.disconnect();
    }
}

impl<T: Transport> std::fmt::Debug for Connection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("state", &self.state)
            .field("next_sequence", &self.sequence.peek())
            .field("config", &self.config)
            .finish()
    }
}

fn unexpected(cmd: &Command, response: &Response) -> Error {
    ProtocolError::UnexpectedMessageType {
        expected: cmd.response_context().expected_message_type(),
        actual: response.message_type().unwrap_or(0),
    }
    .into()
}
