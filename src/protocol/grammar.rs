// Copyright (c) 2025 Bloomgate Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! URL acceptance grammar.
//!
//! A URL token is accepted when it has one of these shapes:
//!
//! ```text
//! file:///[drive:][/<anything>]
//! [scheme://]host[:port][/<anything>]
//! ```
//!
//! where `scheme` is `[A-Za-z][A-Za-z0-9+.-]*`, `host` is `localhost`, a dotted
//! name of two or more `[A-Za-z0-9-]+` labels, or a dotted IPv4 quad, and
//! `port` is one or more ASCII digits. A `drive` is a single ASCII letter
//! followed by `:`. Tokens come from whitespace splitting,
//! so none of the pieces ever contain whitespace.

const FILE_PREFIX: &str = "file:///";
const SCHEME_SEPARATOR: &str = "://";

/// Returns true if `token` is an acceptable URL.
pub fn is_valid_url(token: &str) -> bool {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return false;
    }
    if let Some(rest) = token.strip_prefix(FILE_PREFIX) {
        if is_file_path(rest) {
            return true;
        }
    }
    is_network_url(strip_scheme(token))
}

/// `[drive:][/path]` following `file:///`.
fn is_file_path(rest: &str) -> bool {
    let path = match rest.as_bytes() {
        [letter, b':', ..] if letter.is_ascii_alphabetic() => &rest[2..],
        _ => rest,
    };
    path.is_empty() || path.starts_with('/')
}

/// Drop a leading `scheme://` if one is present.
fn strip_scheme(token: &str) -> &str {
    match token.find(SCHEME_SEPARATOR) {
        Some(end) if is_scheme(&token[..end]) => &token[end + SCHEME_SEPARATOR.len()..],
        _ => token,
    }
}

fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-'))
        }
        _ => false,
    }
}

/// `host[:port][/path]` with the scheme already removed.
fn is_network_url(rest: &str) -> bool {
    let host_end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '.'))
        .unwrap_or(rest.len());
    let (host, mut tail) = rest.split_at(host_end);
    if !is_host(host) {
        return false;
    }

    if let Some(after_colon) = tail.strip_prefix(':') {
        let port_end = after_colon
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after_colon.len());
        if port_end == 0 {
            return false;
        }
        tail = &after_colon[port_end..];
    }

    tail.is_empty() || tail.starts_with('/')
}

fn is_host(host: &str) -> bool {
    if host == "localhost" {
        return true;
    }
    let labels = host.split('.').collect::<Vec<_>>();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty() && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.com" ; "plain http")]
    #[test_case("https://example.com/path/to?q=1" ; "https with path")]
    #[test_case("example.com" ; "bare host")]
    #[test_case("www.example.co.uk" ; "multi label host")]
    #[test_case("localhost" ; "localhost")]
    #[test_case("localhost:8080" ; "localhost with port")]
    #[test_case("http://localhost:8080/home" ; "localhost full")]
    #[test_case("127.0.0.1" ; "ipv4")]
    #[test_case("http://127.0.0.1/home" ; "ipv4 with scheme and path")]
    #[test_case("192.168.1.1:3000/api" ; "ipv4 port path")]
    #[test_case("ftp+ssh.v2://files.example.org" ; "exotic scheme")]
    #[test_case("file:///C:/Windows" ; "file drive")]
    #[test_case("file:////etc/passwd" ; "file absolute")]
    #[test_case("file:///" ; "file root only")]
    #[test_case("file:///C:" ; "file bare drive")]
    #[test_case("my-site.com/" ; "trailing slash")]
    fn test_accepts(url: &str) {
        assert!(is_valid_url(url), "expected {url} to be accepted");
    }

    #[test_case("" ; "empty")]
    #[test_case("bar" ; "single label")]
    #[test_case("http://" ; "scheme only")]
    #[test_case("http://bar" ; "scheme with single label")]
    #[test_case("example..com" ; "empty label")]
    #[test_case(".example.com" ; "leading dot")]
    #[test_case("example.com." ; "trailing dot")]
    #[test_case("example.com:" ; "colon without port")]
    #[test_case("example.com:80a" ; "port with letters")]
    #[test_case("exa_mple.com" ; "underscore in host")]
    #[test_case("1http://example.com" ; "scheme starting with digit")]
    #[test_case("file://relative" ; "file without slash")]
    #[test_case("file:///etc/hosts" ; "file path without leading slash")]
    #[test_case("file:///Cx" ; "file drive without colon")]
    #[test_case("file:///C:Windows" ; "file drive without slash")]
    #[test_case("example.com?q=1" ; "query without path")]
    #[test_case("http://exa mple.com" ; "embedded whitespace")]
    fn test_rejects(url: &str) {
        assert!(!is_valid_url(url), "expected {url} to be rejected");
    }
}
