//! Row batch subscription and the export session that consumes it.
//!
//! Order pages load article rows in batches ("load more"). A [`RowFeed`]
//! delivers each inserted batch to every subscribed handler; an
//! [`ExportSession`] extracts records as batches arrive.

use crate::article::{collect_articles, collect_deckbox_articles, DeckboxRecord, ExportRecord, RawArticle};
use crate::resolver::SetCodeResolver;
use crate::unknown_sets::UnknownSetTracker;

type RowHandler<'a> = Box<dyn FnMut(&[RawArticle]) + 'a>;

/// Delivers batches of inserted rows to subscribers
#[derive(Default)]
pub struct RowFeed<'a> {
    handlers: Vec<RowHandler<'a>>,
}

impl<'a> RowFeed<'a> {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler invoked once per published batch
    pub fn subscribe(&mut self, handler: impl FnMut(&[RawArticle]) + 'a) {
        self.handlers.push(Box::new(handler));
    }

    /// Hand a batch to every handler in subscription order
    pub fn publish(&mut self, batch: &[RawArticle]) {
        if batch.is_empty() {
            return;
        }
        log::debug!(
            "Publishing {} rows to {} handlers",
            batch.len(),
            self.handlers.len()
        );
        for handler in &mut self.handlers {
            handler(batch);
        }
    }
}

/// Which records a session builds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordKind {
    /// Moxfield rows, with set codes resolved (also used for clipboard text)
    #[default]
    Moxfield,
    /// Deckbox rows, which keep Cardmarket's expansion names
    Deckbox,
}

/// Accumulates export records for one order. Owns the unknown set tracker
/// for the session.
pub struct ExportSession {
    kind: RecordKind,
    resolver: SetCodeResolver,
    tracker: UnknownSetTracker,
    moxfield: Vec<ExportRecord>,
    deckbox: Vec<DeckboxRecord>,
    rows_seen: usize,
}

impl ExportSession {
    /// A session collecting Moxfield records
    pub fn new(resolver: SetCodeResolver) -> Self {
        Self::with_kind(resolver, RecordKind::Moxfield)
    }

    pub fn with_kind(resolver: SetCodeResolver, kind: RecordKind) -> Self {
        Self {
            kind,
            resolver,
            tracker: UnknownSetTracker::new(),
            moxfield: Vec::new(),
            deckbox: Vec::new(),
            rows_seen: 0,
        }
    }

    /// Extract a batch of rows. Returns the number of records added.
    pub fn ingest(&mut self, batch: &[RawArticle]) -> usize {
        let added = match self.kind {
            RecordKind::Moxfield => {
                let records = collect_articles(batch, &self.resolver, &mut self.tracker);
                let added = records.len();
                self.moxfield.extend(records);
                added
            }
            RecordKind::Deckbox => {
                let records = collect_deckbox_articles(batch);
                let added = records.len();
                self.deckbox.extend(records);
                added
            }
        };
        self.rows_seen += batch.len();
        added
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Moxfield records; empty for a Deckbox session
    pub fn records(&self) -> &[ExportRecord] {
        &self.moxfield
    }

    /// Deckbox records; empty for a Moxfield session
    pub fn deckbox_records(&self) -> &[DeckboxRecord] {
        &self.deckbox
    }

    /// Number of records collected so far
    pub fn len(&self) -> usize {
        match self.kind {
            RecordKind::Moxfield => self.moxfield.len(),
            RecordKind::Deckbox => self.deckbox.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows that produced no record
    pub fn skipped(&self) -> usize {
        self.rows_seen - self.len()
    }

    pub fn resolver(&self) -> &SetCodeResolver {
        &self.resolver
    }

    pub fn tracker(&self) -> &UnknownSetTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut UnknownSetTracker {
        &mut self.tracker
    }
}
