//! Protocol error module.
//!
//! Errors raised while parsing a single command line. Every variant is answered
//! on the wire with `400 Bad Request`; the session keeps running.

use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The line held no tokens at all.
    #[error("Empty command line")]
    EmptyLine,

    /// The line did not hold exactly a verb and a URL.
    #[error("Expected 2 tokens, got {0}")]
    WrongTokenCount(usize),

    /// The verb is not one of `POST`, `GET`, `DELETE`.
    #[error("Unknown verb: {0}")]
    UnknownVerb(String),

    /// The URL token failed the accepted grammar.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
