// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Command line parsing.
//!
//! A command line is exactly two tokens, `VERB URL`, separated by ASCII
//! whitespace (vertical tab included).
//! Verbs are matched case-sensitively.

use std::fmt;
use std::str::FromStr;

use crate::data_structures::Url;
use crate::error::protocol::ProtocolError;
use crate::protocol::grammar::is_valid_url;

/// Supported command verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Add a URL to the blacklist and the Bloom filter
    Post,
    /// Query a URL
    Get,
    /// Remove a URL from the blacklist
    Delete,
}

impl Verb {
    /// The wire spelling of this verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "POST",
            Self::Get => "GET",
            Self::Delete => "DELETE",
        }
    }
}

impl FromStr for Verb {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "POST" => Ok(Self::Post),
            "GET" => Ok(Self::Get),
            "DELETE" => Ok(Self::Delete),
            other => Err(ProtocolError::UnknownVerb(other.to_string())),
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// What to do
    pub verb: Verb,
    /// Which URL to do it to
    pub url: Url,
}

impl Command {
    /// Parse one protocol line.
    ///
    /// The token count is checked first, then the URL grammar, then the verb.
    pub fn parse(line: &str) -> Result<Self, ProtocolError> {
        let tokens = line
            .split(is_separator)
            .filter(|token| !token.is_empty())
            .collect::<Vec<_>>();
        let (verb, url) = match tokens.as_slice() {
            [] => return Err(ProtocolError::EmptyLine),
            [verb, url] => (*verb, *url),
            other => return Err(ProtocolError::WrongTokenCount(other.len())),
        };

        if !is_valid_url(url) {
            return Err(ProtocolError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            verb: verb.parse()?,
            url: Url::new(url),
        })
    }
}

/// ASCII whitespace, including vertical tab.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0B'
}

impl FromStr for Command {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
