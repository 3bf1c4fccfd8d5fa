//! Bloomgate Library
//!
//! A URL blacklist served over a line-oriented TCP protocol. A Bloom filter
//! answers "definitely not listed" quickly; an exact blacklist is the authority
//! on whether a URL is really listed. Both survive restarts through files in a
//! data directory.
//!
//! # Architecture
//!
//! - [`data_structures`]: [`Url`](data_structures::Url),
//!   [`BloomFilter`](data_structures::BloomFilter) and
//!   [`BlackList`](data_structures::BlackList)
//! - [`protocol`]: command parsing and execution
//! - [`server`]: accept loop, per-connection sessions and persistence
//! - [`config`]: layered configuration with validation
//! - [`error`]: error types and the error reporter

pub mod config;
pub mod data_structures;
pub mod error;
pub mod protocol;
pub mod server;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Bloomgate server.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
