// libccid/src/connection/builder.rs

use crate::connection::config::ConnectionConfig;
use crate::connection::handle::Connection;
use crate::protocol::LengthPolicy;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Connection with optional configuration.
#[derive(Debug)]
pub struct ConnectionBuilder<T> {
    transport: Option<T>,
    config: ConnectionConfig,
}

impl<T: Transport> ConnectionBuilder<T> {
    /// Builder with the default configuration and no transport.
    pub fn new() -> Self {
        Self {
            transport: None,
            config: ConnectionConfig::default(),
        }
    }

    /// Provide an already-opened transport (e.g. MockTransport or UsbTransport)
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ConnectionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn control_timeout_ms(mut self, ms: u32) -> Self {
        self.config = self.config.control_timeout_ms(ms);
        self
    }

    pub fn exchange_timeout_ms(mut self, ms: u32) -> Self {
        self.config = self.config.exchange_timeout_ms(ms);
        self
    }

    pub fn max_apdu_len(mut self, len: usize) -> Self {
        self.config = self.config.max_apdu_len(len);
        self
    }

    pub fn length_policy(mut self, policy: LengthPolicy) -> Self {
        self.config = self.config.length_policy(policy);
        self
    }

    pub fn max_time_extensions(mut self, n: u8) -> Self {
        self.config = self.config.max_time_extensions(n);
        self
    }

    /// Consume the builder. Fails with `NoTransport` when no transport was
    /// given.
    pub fn build(self) -> Result<Connection<T>> {
        match self.transport {
            Some(t) => Ok(Connection::with_config(t, self.config)),
            None => Err(Error::NoTransport),
        }
    }
}

impl<T: Transport> Default for ConnectionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
