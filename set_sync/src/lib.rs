//! Set Sync - keeps the set mapping table current
//!
//! Downloads the Scryfall set catalog and adds every set name the mapping
//! table doesn't know yet. Existing codes are never changed, since many of
//! them are hand-tuned for Moxfield.

pub mod merge;
pub mod scryfall;

pub use merge::{merge_sets, MergeOutcome};
pub use scryfall::{fetch_sets, fetch_sets_from, read_sets, ScryfallSet, SetList, SCRYFALL_API};
