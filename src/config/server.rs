//! Server configuration module.
//!
//! This module defines configuration for the listening socket and the runtime
//! that drives client sessions.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::RangeInclusive;

/// Ports clients may be served on.
pub const PORT_RANGE: RangeInclusive<u16> = 1025..=65535;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Interface to listen on
    pub host: IpAddr,

    /// Port to listen on
    pub port: u16,

    /// Pending connection backlog for the listening socket
    pub backlog: u32,

    /// Number of runtime worker threads
    pub worker_threads: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 4000,
            backlog: 50,
            worker_threads: num_cpus::get(),
        }
    }
}

impl ServerConfig {
    /// The socket address to bind.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !PORT_RANGE.contains(&self.port) {
            return Err(ConfigError::ValueOutOfRange {
                key: "server.port".to_string(),
                message: format!(
                    "{} is not within {}..={}",
                    self.port,
                    PORT_RANGE.start(),
                    PORT_RANGE.end()
                ),
            });
        }

        if self.backlog == 0 {
            return Err(ConfigError::ValidationError(
                "backlog must be greater than 0".to_string(),
            ));
        }

        if self.worker_threads == 0 {
            return Err(ConfigError::ValidationError(
                "worker_threads must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
