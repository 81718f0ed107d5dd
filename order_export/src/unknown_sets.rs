//! Tracks set names the resolver could only guess at.
//!
//! The tracker lives for one export session. It is owned by the caller and
//! passed into the resolver; nothing is persisted, so a new session always
//! starts from an empty list.

use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashMap;

/// One set name that fell through to the derived fallback code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSet {
    pub name: String,
    pub count: u32,
    pub last_seen: DateTime<Utc>,
    pub fallback_code: String,
}

#[derive(Debug, Default)]
pub struct UnknownSetTracker {
    sets: Vec<UnknownSet>,
    index: HashMap<String, usize>,
}

impl UnknownSetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolver miss now
    pub fn record(&mut self, expansion_name: &str, fallback_code: &str) {
        self.record_at(expansion_name, fallback_code, Utc::now());
    }

    /// Record a resolver miss at a given time. Repeated names bump the count
    /// and timestamp but keep the first fallback code.
    pub fn record_at(&mut self, expansion_name: &str, fallback_code: &str, seen: DateTime<Utc>) {
        match self.index.get(expansion_name) {
            Some(&i) => {
                let entry = &mut self.sets[i];
                entry.count += 1;
                entry.last_seen = seen;
            }
            None => {
                self.index
                    .insert(expansion_name.to_string(), self.sets.len());
                self.sets.push(UnknownSet {
                    name: expansion_name.to_string(),
                    count: 1,
                    last_seen: seen,
                    fallback_code: fallback_code.to_string(),
                });
            }
        }

        log::warn!(
            "Unknown set encountered: \"{}\" (used fallback: \"{}\")",
            expansion_name,
            fallback_code
        );
        log::debug!("Total unknown sets: {}", self.sets.len());
    }

    /// Entries by descending count; ties keep first-seen order
    pub fn list(&self) -> Vec<&UnknownSet> {
        let mut sets: Vec<&UnknownSet> = self.sets.iter().collect();
        sets.sort_by(|a, b| b.count.cmp(&a.count));
        sets
    }

    pub fn get(&self, expansion_name: &str) -> Option<&UnknownSet> {
        self.index.get(expansion_name).map(|&i| &self.sets[i])
    }

    pub fn clear(&mut self) {
        self.sets.clear();
        self.index.clear();
        log::info!("Unknown sets list cleared");
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Human-readable report, one line per set, ready to paste into the
    /// edge case list
    pub fn report(&self) -> String {
        let sets = self.list();
        if sets.is_empty() {
            return "No unknown sets found.".to_string();
        }

        let mut output = String::from("Unknown Sets Report\n");
        output.push_str("===================\n\n");
        for set in sets {
            output.push_str(&format!(
                "\"{}\": \"{}\", // Count: {}, Last seen: {}\n",
                set.name,
                set.fallback_code,
                set.count,
                set.last_seen.to_rfc3339_opts(SecondsFormat::Millis, true)
            ));
        }
        output
    }
}
