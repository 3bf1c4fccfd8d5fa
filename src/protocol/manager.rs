// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Command execution against the Bloom filter and the blacklist.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::data_structures::{BlackList, BloomFilter};
use crate::protocol::command::{Command, Verb};
use crate::protocol::response::Response;

/// Applies parsed commands to a Bloom filter and a blacklist.
///
/// | Verb     | Effect                                            | Response                    |
/// |----------|---------------------------------------------------|-----------------------------|
/// | `POST`   | add to filter, and to blacklist unless listed     | `201 Created`               |
/// | `DELETE` | remove from blacklist only                        | `204 No Content` or `404`   |
/// | `GET`    | query filter, then blacklist if the filter hits   | `200 Ok` + one or two bools |
///
/// Anything that does not parse is answered with `400 Bad Request` and
/// changes nothing.
#[derive(Debug, Clone)]
pub struct CommandManager {
    bloom: Arc<BloomFilter>,
    blacklist: Arc<BlackList>,
}

impl CommandManager {
    /// Creates a manager over the given filter and blacklist.
    pub fn new(bloom: Arc<BloomFilter>, blacklist: Arc<BlackList>) -> Self {
        Self { bloom, blacklist }
    }

    /// Parse and execute one command line.
    pub fn execute(&self, line: &str) -> Response {
        match Command::parse(line) {
            Ok(command) => self.apply(&command),
            Err(e) => {
                debug!(error = %e, "Rejected command line");
                Response::BadRequest
            }
        }
    }

    /// Execute an already parsed command.
    pub fn apply(&self, command: &Command) -> Response {
        trace!(verb = %command.verb, url = %command.url, "Executing command");
        let url = &command.url;
        match command.verb {
            Verb::Post => {
                // Bits are set before listing, so a listed URL always hits the filter.
                self.bloom.add(url);
                self.blacklist.insert_if_absent(url.clone());
                Response::Created
            }
            Verb::Delete => {
                if self.blacklist.remove_url(url) {
                    Response::NoContent
                } else {
                    Response::NotFound
                }
            }
            Verb::Get => Response::lookup(self.bloom.possibly_contains(url), || {
                self.blacklist.contains(url)
            }),
        }
    }

    /// The Bloom filter this manager writes to.
    pub fn bloom(&self) -> &Arc<BloomFilter> {
        &self.bloom
    }

    /// The blacklist this manager writes to.
    pub fn blacklist(&self) -> &Arc<BlackList> {
        &self.blacklist
    }
}
