//! Curated overrides for Cardmarket set names that don't match Scryfall.
//!
//! Checked before the synced set mapping table.

use mtg_common::{Result, SetMappingTable};
use std::path::Path;

/// Cardmarket name → Moxfield code overrides shipped with the tool
const DEFAULT_EDGE_CASES: &[(&str, &str)] = &[
    ("Core 2021", "m21"),
    ("Commander: Modern Horizons 3: Extras", "m3c"),
    ("Commander: Adventures in the Forgotten Realms", "afc"),
    ("Commander: Wilds of Eldraine", "woc"),
    ("Commander: Outlaws of Thunder Junction", "otc"),
    ("Commander: Tarkir: Dragonstorm", "tdc"),
    ("Commander: Kamigawa: Neon Dynasty", "nec"),
    ("Gateway Promos", "dci"),
    ("Commander", "cmd"),
];

#[derive(Debug, Clone)]
pub struct EdgeCaseTable {
    table: SetMappingTable,
}

impl EdgeCaseTable {
    /// An empty override table
    pub fn empty() -> Self {
        Self {
            table: SetMappingTable::new(),
        }
    }

    /// The curated defaults
    pub fn defaults() -> Self {
        Self {
            table: SetMappingTable::from_pairs(DEFAULT_EDGE_CASES.iter().copied()),
        }
    }

    /// Defaults overlaid with the `name,code` rows of a CSV file.
    /// File entries win over the defaults.
    pub fn with_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let extra = SetMappingTable::load(path)?;
        let mut table = Self::defaults();
        for (name, code) in extra.iter() {
            table.table.set(name, code);
        }
        Ok(table)
    }

    /// Add or replace an override during a curation session
    pub fn add(&mut self, cardmarket_name: &str, set_code: &str) {
        self.table.set(cardmarket_name, set_code);
        log::info!("Added edge case: \"{}\" -> \"{}\"", cardmarket_name, set_code);
        log::info!(
            "Add this to the edge case list: (\"{}\", \"{}\"),",
            cardmarket_name,
            set_code
        );
    }

    pub fn get(&self, expansion_name: &str) -> Option<&str> {
        self.table.get(expansion_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for EdgeCaseTable {
    fn default() -> Self {
        Self::defaults()
    }
}
