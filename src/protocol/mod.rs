// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Line protocol for the Bloom filter server.
//!
//! Clients send one command per line and receive one response per line:
//!
//! ```text
//! POST <url>    ->  201 Created
//! DELETE <url>  ->  204 No Content | 404 Not Found
//! GET <url>     ->  200 Ok\n\n<bloom> [<blacklist>]
//! <anything>    ->  400 Bad Request
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use bloomgate_lib::data_structures::{BlackList, BloomFilter, BloomFilterConfig};
//! use bloomgate_lib::protocol::CommandManager;
//!
//! let bloom = Arc::new(BloomFilter::with_config(BloomFilterConfig::default()).unwrap());
//! let manager = CommandManager::new(bloom, Arc::new(BlackList::new()));
//!
//! assert_eq!(manager.execute("POST http://example.com").to_wire(), "201 Created\n");
//! assert_eq!(
//!     manager.execute("GET http://example.com").to_wire(),
//!     "200 Ok\n\ntrue true\n"
//! );
//! ```

pub mod command;
pub mod grammar;
pub mod manager;
pub mod response;

// Re-exports
pub use command::{Command, Verb};
pub use grammar::is_valid_url;
pub use manager::CommandManager;
pub use response::Response;
