// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Immutable URL wrapper.
//!
//! A [`Url`] holds the raw string exactly as it was received. Equality is
//! byte-exact: no case folding, scheme stripping or trailing-slash handling,
//! so `http://a.com` and `http://a.com/` are different URLs.

use std::fmt;

/// A URL as received on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url {
    raw: String,
}

impl Url {
    /// Wrap a raw URL string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The raw string this URL was built from.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Url {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for Url {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_equality() {
        assert_eq!(Url::new("http://example.com"), Url::from("http://example.com"));
        assert_ne!(Url::new("http://example.com"), Url::new("http://example.com/"));
        assert_ne!(Url::new("http://Example.com"), Url::new("http://example.com"));
        assert_ne!(Url::new("https://example.com"), Url::new("http://example.com"));
    }

    #[test]
    fn test_raw_round_trip() {
        let url = Url::new("localhost:8080/path?q=1");
        assert_eq!(url.as_str(), "localhost:8080/path?q=1");
        assert_eq!(url.to_string(), "localhost:8080/path?q=1");
    }
}
