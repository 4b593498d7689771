//! Field file assembly: rows from several sources merged into one
//! key → values mapping and written as a delimited text file.

mod base;
mod merge;
mod output;

pub use base::{load_base_file, parse_rows};
pub use merge::assemble_fields;
pub use output::{render_fields, write_fields};

use std::collections::BTreeMap;

/// One delimited row: a key followed by zero or more values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRow {
    key: String,
    values: Vec<String>,
}

impl FieldRow {
    /// Build a row from its cells; `None` when there is no key cell.
    pub fn from_cells(cells: Vec<String>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let key = iter.next()?;
        Some(Self {
            key,
            values: iter.collect(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Key followed by values.
    pub fn cells(&self) -> Vec<&str> {
        std::iter::once(self.key.as_str())
            .chain(self.values.iter().map(String::as_str))
            .collect()
    }
}

/// Merged field mapping. Keys are unique; iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedFields {
    entries: BTreeMap<String, Vec<String>>,
}

impl MergedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, replacing any previous values for its key.
    pub fn insert(&mut self, row: FieldRow) {
        self.entries.insert(row.key, row.values);
    }

    /// Apply a whole layer of rows in order.
    pub fn merge<I: IntoIterator<Item = FieldRow>>(&mut self, rows: I) {
        for row in rows {
            self.insert(row);
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
