//! Username decoding from URI user-info.

use crate::error::{Error, Result};
use percent_encoding::percent_decode_str;

/// Query-style unescape of the full user-info (`user` or `user:pass`).
///
/// `+` reads as a space. A `%` not followed by two hex digits, or escapes that
/// decode to invalid UTF-8, are rejected.
pub fn decode_username(userinfo: &str) -> Result<String> {
    let fail = || Error::UsernameDecode(userinfo.to_string());

    let bytes = userinfo.as_bytes();
    for (i, _) in userinfo.match_indices('%') {
        let valid = bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
        if !valid {
            return Err(fail());
        }
    }

    let spaced = userinfo.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| fail())
}
