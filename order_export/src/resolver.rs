//! Cardmarket expansion name → Moxfield set code resolution.
//!
//! Lookup order, first hit wins:
//!
//! 1. empty name → empty code
//! 2. exact edge case override
//! 3. exact set mapping
//! 4. `"Commander: X"` → a `"... Commander"` mapping related to `X`
//! 5. substring match in either direction
//! 6. lowercase name stripped to `[a-z0-9]`, recorded as unknown
//!
//! Steps 4 and 5 walk the set mapping table in its stored order and stop at
//! the first qualifying name. When several names qualify, the result depends
//! on that order, and Moxfield expects specific codes, so reordering the
//! mapping file can change exports.

use crate::edge_cases::EdgeCaseTable;
use crate::unknown_sets::UnknownSetTracker;
use mtg_common::SetMappingTable;

const COMMANDER_PREFIX: &str = "Commander: ";
const COMMANDER_SUFFIX: &str = " Commander";

/// Which lookup step produced a code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Empty,
    EdgeCase,
    Exact,
    CommanderBridge,
    Substring,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub code: String,
    pub kind: MatchKind,
}

#[derive(Debug, Clone)]
pub struct SetCodeResolver {
    mappings: SetMappingTable,
    edge_cases: EdgeCaseTable,
}

impl SetCodeResolver {
    pub fn new(mappings: SetMappingTable, edge_cases: EdgeCaseTable) -> Self {
        Self {
            mappings,
            edge_cases,
        }
    }

    /// Bundled set mappings with the curated edge cases
    pub fn bundled() -> mtg_common::Result<Self> {
        Ok(Self::new(SetMappingTable::bundled()?, EdgeCaseTable::defaults()))
    }

    pub fn mappings(&self) -> &SetMappingTable {
        &self.mappings
    }

    pub fn edge_cases(&self) -> &EdgeCaseTable {
        &self.edge_cases
    }

    pub fn edge_cases_mut(&mut self) -> &mut EdgeCaseTable {
        &mut self.edge_cases
    }

    /// Resolve an expansion name to a set code. Never fails; names with no
    /// confident match get a derived code and are recorded in `tracker`.
    pub fn resolve(&self, expansion_name: &str, tracker: &mut UnknownSetTracker) -> String {
        self.resolve_detailed(expansion_name, tracker).code
    }

    /// Like [`resolve`](Self::resolve) but also reports the matching step
    pub fn resolve_detailed(
        &self,
        expansion_name: &str,
        tracker: &mut UnknownSetTracker,
    ) -> Resolution {
        if let Some(resolution) = self.lookup(expansion_name) {
            return resolution;
        }

        let code = fallback_code(expansion_name);
        tracker.record(expansion_name, &code);
        Resolution {
            code,
            kind: MatchKind::Fallback,
        }
    }

    /// Table and fuzzy lookup only, without the derived fallback
    pub fn lookup(&self, expansion_name: &str) -> Option<Resolution> {
        if expansion_name.is_empty() {
            return Some(Resolution {
                code: String::new(),
                kind: MatchKind::Empty,
            });
        }

        let hit = |code: &str, kind: MatchKind| Resolution {
            code: code.to_string(),
            kind,
        };

        if let Some(code) = self.edge_cases.get(expansion_name) {
            log::trace!("Edge case match for \"{}\": {}", expansion_name, code);
            return Some(hit(code, MatchKind::EdgeCase));
        }

        if let Some(code) = self.mappings.get(expansion_name) {
            log::trace!("Exact match for \"{}\": {}", expansion_name, code);
            return Some(hit(code, MatchKind::Exact));
        }

        if let Some((name, code)) = self.commander_bridge(expansion_name) {
            log::debug!(
                "Commander match for \"{}\" via \"{}\": {}",
                expansion_name,
                name,
                code
            );
            return Some(hit(code, MatchKind::CommanderBridge));
        }

        if let Some((name, code)) = self.substring_match(expansion_name) {
            log::debug!(
                "Partial match for \"{}\" via \"{}\": {}",
                expansion_name,
                name,
                code
            );
            return Some(hit(code, MatchKind::Substring));
        }

        None
    }

    /// Cardmarket names Commander products `"Commander: <Set>"` while Scryfall
    /// uses `"<Set> Commander"`
    fn commander_bridge(&self, expansion_name: &str) -> Option<(&str, &str)> {
        let base = expansion_name.strip_prefix(COMMANDER_PREFIX)?;
        self.mappings.iter().find(|(name, _)| {
            name.strip_suffix(COMMANDER_SUFFIX)
                .is_some_and(|stem| name.contains(base) || base.contains(stem))
        })
    }

    fn substring_match(&self, expansion_name: &str) -> Option<(&str, &str)> {
        self.mappings
            .iter()
            .find(|(name, _)| expansion_name.contains(name) || name.contains(expansion_name))
    }
}

/// Lowercased name reduced to ASCII letters and digits. Falls back to the
/// trimmed lowercase name when nothing survives the filter, and to the raw
/// lowercase name when that is blank too.
pub fn fallback_code(expansion_name: &str) -> String {
    let lower = expansion_name.to_lowercase();
    let code: String = lower
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect();

    if !code.is_empty() {
        return code;
    }
    match lower.trim() {
        "" => lower,
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
