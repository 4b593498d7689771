//! Field rows carried in the URI fragment as `base64(JSON array of arrays)`.

use crate::error::{Error, Result};
use crate::fields::FieldRow;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use percent_encoding::percent_decode_str;

/// Decode a fragment into field rows.
///
/// The fragment is percent-decoded first, then read as padded standard base64.
/// Each inner array must have at least one element (the key).
pub fn decode_fragment(fragment: &str) -> Result<Vec<FieldRow>> {
    let unescaped = percent_decode_str(fragment).decode_utf8_lossy();
    let bytes = STANDARD
        .decode(unescaped.trim().as_bytes())
        .map_err(|e| Error::fragment(fragment, e))?;
    let raw: Vec<Vec<String>> =
        serde_json::from_slice(&bytes).map_err(|e| Error::fragment(fragment, e))?;
    raw.into_iter()
        .enumerate()
        .map(|(i, cells)| {
            FieldRow::from_cells(cells)
                .ok_or_else(|| Error::fragment(fragment, format!("row {i} has no key")))
        })
        .collect()
}

/// Encode field rows into fragment text accepted by [`decode_fragment`].
pub fn encode_fragment(rows: &[FieldRow]) -> String {
    let cells: Vec<Vec<&str>> = rows.iter().map(FieldRow::cells).collect();
    // Serializing nested string vectors cannot fail.
    let json = serde_json::to_vec(&cells).unwrap_or_default();
    STANDARD.encode(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> FieldRow {
        FieldRow::from_cells(cells.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn round_trip() {
        let rows = vec![row(&["K", "v1", "v2"])];
        let fragment = encode_fragment(&rows);
        assert_eq!(decode_fragment(&fragment).unwrap(), rows);
    }

    #[test]
    fn decodes_known_payload() {
        // [["K"]]
        let rows = decode_fragment("W1siSyJdXQ==").unwrap();
        assert_eq!(rows, vec![row(&["K"])]);
        assert!(rows[0].values().is_empty());
    }

    #[test]
    fn percent_escaped_padding() {
        assert_eq!(decode_fragment("W1siSyJdXQ%3D%3D").unwrap(), vec![row(&["K"])]);
    }

    #[test]
    fn invalid_base64() {
        let err = decode_fragment("***").unwrap_err();
        assert!(matches!(err, Error::FragmentDecode { ref fragment, .. } if fragment == "***"));
    }

    #[test]
    fn base64_of_non_json() {
        let fragment = STANDARD.encode("hello");
        assert!(matches!(decode_fragment(&fragment), Err(Error::FragmentDecode { .. })));
    }

    #[test]
    fn wrong_shape() {
        let fragment = STANDARD.encode(r#"{"K": ["v"]}"#);
        assert!(decode_fragment(&fragment).is_err());
        let fragment = STANDARD.encode(r#"[["K", 1]]"#);
        assert!(decode_fragment(&fragment).is_err());
    }

    #[test]
    fn empty_row_rejected() {
        let fragment = STANDARD.encode(r#"[["K"], []]"#);
        assert!(matches!(decode_fragment(&fragment), Err(Error::FragmentDecode { .. })));
    }
}
