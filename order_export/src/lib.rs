//! Order Export - Cardmarket orders to Moxfield and Deckbox
//!
//! Turns Cardmarket order rows into Moxfield collection CSVs, resolving
//! Cardmarket expansion names to Scryfall set codes, and helps repair the
//! rows Moxfield rejects on import.

pub mod article;
pub mod csv_export;
pub mod edge_cases;
pub mod error;
pub mod error_analyzer;
pub mod feed;
pub mod io;
pub mod resolver;
pub mod sinks;
pub mod unknown_sets;

// Re-export commonly used items
pub use article::{collect_articles, extract_article, DeckboxRecord, ExportRecord, RawArticle};
pub use csv_export::{clipboard_text, generate_csv, generate_deckbox_csv, CsvRow};
pub use edge_cases::EdgeCaseTable;
pub use error::{ExportError, ExportResult};
pub use error_analyzer::{analyze, ErrorAnalysis, MoxfieldError};
pub use feed::{ExportSession, RecordKind, RowFeed};
pub use resolver::{MatchKind, Resolution, SetCodeResolver};
pub use unknown_sets::{UnknownSet, UnknownSetTracker};
