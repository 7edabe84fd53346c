//! # Footnote Index
//!
//! Holds the most recent parse for display and lookup. The whole content is
//! swapped on every parse. Single footnotes are never patched in place: the
//! display order depends on every footnote in the document.
//!
//! - **`FootnoteIndex`**: plain owned index for single-threaded hosts.
//! - **`SharedFootnoteIndex`**: immutable snapshots behind an `ArcSwap` for
//!   hosts that read from other threads while a re-parse lands.

use std::collections::HashMap;
use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::models::{Footnote, Position};

/// Ordered footnotes plus an id lookup.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FootnoteIndex {
    footnotes: Vec<Footnote>,
    by_id: HashMap<String, usize>,
}

impl FootnoteIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from footnotes already in display order.
    pub fn from_footnotes(footnotes: Vec<Footnote>) -> Self {
        let by_id = footnotes
            .iter()
            .enumerate()
            .map(|(ordinal, note)| (note.id.clone(), ordinal))
            .collect();
        Self { footnotes, by_id }
    }

    pub fn lookup(&self, id: &str) -> Option<&Footnote> {
        self.by_id.get(id).map(|&ordinal| &self.footnotes[ordinal])
    }

    /// All footnotes in display order.
    pub fn all(&self) -> &[Footnote] {
        &self.footnotes
    }

    /// Replaces the entire content with a new parse result.
    pub fn replace(&mut self, footnotes: Vec<Footnote>) {
        *self = Self::from_footnotes(footnotes);
    }

    pub fn clear(&mut self) {
        self.footnotes.clear();
        self.by_id.clear();
    }

    /// 1-based display number, as shown in the panel (`[1]`, `[2]`, ...).
    pub fn number_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).map(|&ordinal| ordinal + 1)
    }

    /// The footnote cited by the mark under `position`, if any.
    ///
    /// A mark covers its columns from `[` through `]`. Definition anchors are
    /// not citations and never match.
    pub fn at_position(&self, position: Position) -> Option<&Footnote> {
        self.footnotes.iter().find(|note| {
            (0..note.references.len())
                .filter_map(|i| note.reference_span(i))
                .any(|(start, end)| start <= position && position < end)
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.footnotes.iter().map(|note| note.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.footnotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footnotes.is_empty()
    }
}

/// A footnote index that can be read concurrently with replacement.
///
/// Readers take a [`snapshot`](Self::snapshot) and keep a consistent view for
/// as long as they hold it; a concurrent [`replace`](Self::replace) never
/// mixes old and new footnotes in that view.
#[derive(Debug)]
pub struct SharedFootnoteIndex {
    current: ArcSwap<FootnoteIndex>,
}

impl Default for SharedFootnoteIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedFootnoteIndex {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(FootnoteIndex::new()),
        }
    }

    pub fn snapshot(&self) -> Arc<FootnoteIndex> {
        self.current.load_full()
    }

    pub fn lookup(&self, id: &str) -> Option<Footnote> {
        self.current.load().lookup(id).cloned()
    }

    pub fn replace(&self, footnotes: Vec<Footnote>) {
        let next = FootnoteIndex::from_footnotes(footnotes);
        self.current.store(Arc::new(next));
    }

    pub fn clear(&self) {
        self.current.store(Arc::new(FootnoteIndex::new()));
    }
}
