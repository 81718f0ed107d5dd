//! Set display name → set code table.
//!
//! The table is an explicitly ordered list of `(name, code)` pairs. The
//! order matters: fuzzy lookups elsewhere walk the table front to back and
//! take the first structural match, so when several names qualify the one
//! listed first wins. The persisted file keeps Scryfall's newest-first
//! release order followed by leftovers sorted alphabetically.

use crate::error::{MtgError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Bundled mapping file, refreshed by the `set_sync` tool
const BUNDLED_MAPPINGS: &str = include_str!("../data/set_mappings.csv");

#[derive(Debug, Deserialize, Serialize)]
struct MappingRow {
    name: String,
    code: String,
}

/// Ordered set name → code table with an exact-name index
#[derive(Debug, Clone, Default)]
pub struct SetMappingTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl SetMappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from pairs in the given order. Later duplicates of a
    /// name are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        for (name, code) in pairs {
            table.insert_if_absent(name, code);
        }
        table
    }

    /// The table compiled into the binary
    pub fn bundled() -> Result<Self> {
        Self::from_csv_str(BUNDLED_MAPPINGS)
    }

    /// Load a mapping file from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        let table = Self::from_csv_reader(file)?;
        log::debug!(
            "Loaded {} set mappings from {}",
            table.len(),
            path.as_ref().display()
        );
        Ok(table)
    }

    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes())
    }

    /// Parse a `name,code` CSV with a header row
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let mut table = Self::new();
        for result in rdr.records() {
            let record = result?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);
            let row: MappingRow = record.deserialize(Some(&headers))?;

            if row.name.is_empty() || row.code.trim().is_empty() {
                return Err(MtgError::InvalidMapping {
                    line,
                    reason: "set name and code must not be empty".to_string(),
                });
            }

            if !table.insert_if_absent(row.name.as_str(), row.code.trim()) {
                log::warn!("Duplicate set mapping for \"{}\" on line {}", row.name, line);
            }
        }

        Ok(table)
    }

    /// Render the table as a `name,code` CSV document
    pub fn to_csv_string(&self) -> Result<String> {
        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        for (name, code) in self.iter() {
            wtr.serialize(MappingRow {
                name: name.to_string(),
                code: code.to_string(),
            })?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| MtgError::Io(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| MtgError::InvalidMapping {
            line: 0,
            reason: e.to_string(),
        })
    }

    /// Write the table to disk, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_csv_string()?;
        std::fs::write(path.as_ref(), content)?;
        log::info!(
            "Wrote {} set mappings to {}",
            self.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Exact lookup by display name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Append a mapping unless the name is already present.
    /// Returns true if the mapping was added.
    pub fn insert_if_absent(&mut self, name: impl Into<String>, code: impl Into<String>) -> bool {
        let name = name.into();
        if self.index.contains_key(&name) {
            return false;
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, code.into()));
        true
    }

    /// Insert or overwrite a mapping. New names are appended; existing
    /// names keep their position.
    pub fn set(&mut self, name: impl Into<String>, code: impl Into<String>) {
        let name = name.into();
        let code = code.into();
        match self.index.get(&name) {
            Some(&i) => self.entries[i].1 = code,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, code));
            }
        }
    }

    /// Iterate `(name, code)` pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "set_mapping_tests.rs"]
mod tests;
