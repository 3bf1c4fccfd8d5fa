// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Response lines.

use std::fmt;

/// A response to one command line.
///
/// `Display` renders the wire form without the final line feed;
/// [`Response::to_wire`] adds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// `POST` accepted, whether or not the URL was already present
    Created,
    /// `DELETE` removed the URL
    NoContent,
    /// `DELETE` found nothing to remove
    NotFound,
    /// The line could not be parsed
    BadRequest,
    /// `GET` result
    Ok {
        /// What the Bloom filter reported
        in_bloom: bool,
        /// What the blacklist reported, only consulted when `in_bloom` is true
        in_blacklist: Option<bool>,
    },
}

impl Response {
    /// Build a `GET` answer. The blacklist is only reported when the filter
    /// says the URL may be present.
    pub fn lookup(in_bloom: bool, in_blacklist: impl FnOnce() -> bool) -> Self {
        Self::Ok {
            in_bloom,
            in_blacklist: in_bloom.then(in_blacklist),
        }
    }

    /// The numeric status code.
    pub fn status(&self) -> u16 {
        match self {
            Self::Created => 201,
            Self::NoContent => 204,
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Ok { .. } => 200,
        }
    }

    /// The full wire form, terminated by a line feed.
    pub fn to_wire(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("201 Created"),
            Self::NoContent => f.write_str("204 No Content"),
            Self::NotFound => f.write_str("404 Not Found"),
            Self::BadRequest => f.write_str("400 Bad Request"),
            Self::Ok {
                in_bloom,
                in_blacklist: None,
            } => write!(f, "200 Ok\n\n{in_bloom}"),
            Self::Ok {
                in_bloom,
                in_blacklist: Some(in_blacklist),
            } => write!(f, "200 Ok\n\n{in_bloom} {in_blacklist}"),
        }
    }
}
