//! Base file rows.

use super::FieldRow;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read the base file at `path` and split each line on `delimiter`.
pub fn load_base_file(path: &Path, delimiter: &str) -> Result<Vec<FieldRow>> {
    let data = fs::read_to_string(path).map_err(|e| Error::file_io(path, e))?;
    Ok(parse_rows(&data, delimiter))
}

/// Split text into rows. Blank lines are skipped; `\r\n` endings are accepted.
pub fn parse_rows(data: &str, delimiter: &str) -> Vec<FieldRow> {
    data.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            FieldRow::from_cells(line.split(delimiter).map(String::from).collect())
        })
        .collect()
}
