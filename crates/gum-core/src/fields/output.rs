//! Field file writer.

use super::MergedFields;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Render the field file body: one `key<d>value<d>...` line per key.
pub fn render_fields(fields: &MergedFields, delimiter: &str) -> String {
    let mut out = String::new();
    for (key, values) in fields.iter() {
        out.push_str(key);
        for value in values {
            out.push_str(delimiter);
            out.push_str(value);
        }
        out.push('\n');
    }
    out
}

/// Create or truncate `path` and write the field file.
///
/// There is no rollback: an interrupted write can leave a partial file.
pub fn write_fields(path: &Path, delimiter: &str, fields: &MergedFields) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::file_io(path, e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_fields(fields, delimiter).as_bytes())
        .and_then(|()| writer.flush())
        .map_err(|e| Error::file_io(path, e))?;
    tracing::debug!("wrote {} field lines to {}", fields.len(), path.display());
    Ok(())
}
