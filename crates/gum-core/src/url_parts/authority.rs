//! Raw authority handling: the `url` crate normalizes hosts and drops default
//! ports, so host/port/user-info are read from the original text instead.

use crate::error::{Error, Result};

/// Authority components as written in the URI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawAuthority<'a> {
    pub userinfo: Option<&'a str>,
    /// `host[:port]` with user-info removed.
    pub host_port: &'a str,
}

/// Schemes the `url` crate parses with WHATWG "special" rules (`\` acts as `/`).
const SPECIAL_SCHEMES: [&str; 6] = ["http", "https", "ws", "wss", "ftp", "file"];

/// Returns the authority slice of `raw`: the text after `<scheme>://` up to
/// the next `/`, `?` or `#` (or `\` for special schemes).
///
/// `scheme` is the parsed scheme. URIs whose scheme is not directly followed
/// by `//` have no authority.
pub fn raw_authority<'a>(raw: &'a str, scheme: &str) -> RawAuthority<'a> {
    let trimmed = raw.trim_matches(|c: char| c <= ' ');
    let after_scheme = match trimmed.get(..scheme.len()) {
        Some(head) if head.eq_ignore_ascii_case(scheme) => &trimmed[scheme.len()..],
        _ => return RawAuthority::default(),
    };
    let Some(rest) = after_scheme.strip_prefix("://") else {
        return RawAuthority::default();
    };
    let special = SPECIAL_SCHEMES.contains(&scheme);
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#') || (special && c == '\\'))
        .unwrap_or(rest.len());
    let authority = &rest[..end];
    match authority.rfind('@') {
        Some(at) => RawAuthority {
            userinfo: Some(&authority[..at]),
            host_port: &authority[at + 1..],
        },
        None => RawAuthority {
            userinfo: None,
            host_port: authority,
        },
    }
}

/// Split `host:port`. Without a `:` the whole input is the host and the port
/// is empty. Otherwise a port separator is required: `[fe80::1]` fails just
/// like `a:b:c`, and `[::1]:3389` yields host `::1`.
pub fn split_host_port(host_port: &str) -> Result<(String, String)> {
    let fail = || Error::HostPortSplit(host_port.to_string());

    if let Some(inner) = host_port.strip_prefix('[') {
        let close = inner.find(']').ok_or_else(fail)?;
        let port = inner[close + 1..].strip_prefix(':').ok_or_else(fail)?;
        return Ok((inner[..close].to_string(), port.to_string()));
    }

    if !host_port.contains(':') {
        return Ok((host_port.to_string(), String::new()));
    }
    match host_port.split_once(':') {
        Some((_, port)) if port.contains(':') => Err(fail()),
        Some((host, port)) => Ok((host.to_string(), port.to_string())),
        None => Err(fail()),
    }
}
