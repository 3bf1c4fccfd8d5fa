//! Transport error module.
//!
//! This module defines error types that may occur on the listening socket and
//! on client connections.

use std::io;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur during transport operations.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Binding the listening socket failed. Fatal at startup.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address that could not be bound
        addr: SocketAddr,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Accepting a connection failed.
    #[error("Accept error: {0}")]
    Accept(#[source] io::Error),

    /// Reading from a client failed.
    #[error("Read error: {0}")]
    Read(#[source] io::Error),

    /// Writing to a client failed.
    #[error("Write error: {0}")]
    Write(#[source] io::Error),
}
