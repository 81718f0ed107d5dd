//! Merging the Scryfall catalog into the set mapping table.

use crate::scryfall::ScryfallSet;
use mtg_common::SetMappingTable;
use std::cmp::Reverse;
use std::collections::HashSet;

/// Result of a merge
#[derive(Debug)]
pub struct MergeOutcome {
    pub table: SetMappingTable,
    /// Names that were not mapped before, newest first
    pub added: Vec<(String, String)>,
}

/// Add every catalog set missing from `current`.
///
/// The output lists catalog sets newest first, followed by mapped names the
/// catalog doesn't know (Cardmarket-only names, curated aliases) sorted
/// alphabetically. Existing codes win over the catalog's.
pub fn merge_sets(current: &SetMappingTable, sets: &[ScryfallSet]) -> MergeOutcome {
    let mut catalog: Vec<&ScryfallSet> = sets.iter().collect();
    catalog.sort_by_key(|set| Reverse(set.released_at));

    let mut table = SetMappingTable::new();
    let mut added = Vec::new();

    for set in &catalog {
        match current.get(&set.name) {
            Some(code) => {
                table.insert_if_absent(set.name.as_str(), code);
            }
            None => {
                if table.insert_if_absent(set.name.as_str(), set.code.as_str()) {
                    log::info!("Added: \"{}\" -> \"{}\"", set.name, set.code);
                    added.push((set.name.clone(), set.code.clone()));
                }
            }
        }
    }

    let catalog_names: HashSet<&str> = catalog.iter().map(|set| set.name.as_str()).collect();
    let mut leftovers: Vec<(&str, &str)> = current
        .iter()
        .filter(|(name, _)| !catalog_names.contains(name))
        .collect();
    leftovers.sort_by(|a, b| a.0.cmp(b.0));

    for (name, code) in leftovers {
        table.insert_if_absent(name, code);
    }

    log::info!("Total new mappings added: {}", added.len());
    MergeOutcome { table, added }
}
