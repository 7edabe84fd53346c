//! # Footnote Panel
//!
//! Ties a [`DocumentSource`] to a [`FootnoteIndex`] and tracks which
//! placeholder, if any, a renderer should show instead of the list.
//!
//! Each failure mode is its own [`PanelState`]: no open document, a document
//! that could not be read, and a document that could not be parsed are all
//! distinct from a document that simply has no footnotes. On every failure
//! the index is cleared so a renderer never shows footnotes from an older
//! parse next to an error.
//!
//! The panel owns no display handles. Renderers key their own widgets by
//! footnote id and drop them whenever [`Refresh::changed`] is set.

use crate::change::needs_refresh;
use crate::index::FootnoteIndex;
use crate::io::DocumentSource;
use crate::models::{Footnote, Position};
use crate::parsing::{ParseError, parse_footnotes_bytes, try_parse_footnotes};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    /// No document is active.
    NoDocument,
    /// The active document could not be read.
    LoadError(String),
    /// The document was read but parsing failed.
    ParseError(String),
    /// The document has no footnotes.
    Empty,
    /// The index holds at least one footnote.
    Ready,
}

impl PanelState {
    /// Text to show in place of the footnote list, if the list is not shown.
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            PanelState::NoDocument => Some("Open a document to see its footnotes"),
            PanelState::LoadError(_) => Some("Could not load the document"),
            PanelState::ParseError(_) => Some("Could not read footnotes from the document"),
            PanelState::Empty => Some("This document has no footnotes"),
            PanelState::Ready => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PanelState::LoadError(_) | PanelState::ParseError(_))
    }
}

/// Outcome of one refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refresh {
    pub state: PanelState,
    /// False when the state and every footnote are unchanged, so a renderer
    /// can keep what it already drew.
    pub changed: bool,
}

#[derive(Debug)]
pub struct FootnotePanel {
    index: FootnoteIndex,
    state: PanelState,
    document: Option<String>,
}

impl Default for FootnotePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl FootnotePanel {
    pub fn new() -> Self {
        Self {
            index: FootnoteIndex::new(),
            state: PanelState::NoDocument,
            document: None,
        }
    }

    pub fn index(&self) -> &FootnoteIndex {
        &self.index
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Label of the document the index was built from.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Re-reads the active document and rebuilds the index.
    pub fn refresh(&mut self, source: &impl DocumentSource) -> Refresh {
        let Some(document) = source.active_document() else {
            self.document = None;
            return self.fail(PanelState::NoDocument);
        };
        self.document = Some(document);

        match source.read() {
            Ok(bytes) => self.apply(parse_footnotes_bytes(&bytes)),
            Err(e) => {
                log::warn!("Failed to read document: {e}");
                self.fail(PanelState::LoadError(e.to_string()))
            }
        }
    }

    /// Rebuilds the index from a buffer the host already holds.
    ///
    /// `document` labels the buffer and replaces the label of any earlier
    /// refresh.
    pub fn refresh_with_text(&mut self, document: impl Into<String>, text: &str) -> Refresh {
        self.document = Some(document.into());
        self.apply(try_parse_footnotes(text))
    }

    fn apply(&mut self, parsed: Result<Vec<Footnote>, ParseError>) -> Refresh {
        let footnotes = match parsed {
            Ok(footnotes) => footnotes,
            Err(e) => {
                log::warn!("Failed to parse footnotes: {e}");
                return self.fail(PanelState::ParseError(e.to_string()));
            }
        };

        let state = if footnotes.is_empty() {
            PanelState::Empty
        } else {
            PanelState::Ready
        };
        let changed = state != self.state || needs_refresh(self.index.all(), &footnotes);
        log::debug!(
            "Refreshed footnote panel: {} footnotes, changed={changed}",
            footnotes.len()
        );

        self.index.replace(footnotes);
        self.state = state.clone();
        Refresh { state, changed }
    }

    fn fail(&mut self, state: PanelState) -> Refresh {
        let changed = state != self.state || !self.index.is_empty();
        self.index.clear();
        self.state = state.clone();
        Refresh { state, changed }
    }

    /// Selection covering the first citation of `id`, for jumping to it.
    pub fn reference_target(&self, id: &str) -> Option<(Position, Position)> {
        self.index.lookup(id)?.reference_span(0)
    }

    /// Where the definition of `id` starts, for editing it.
    pub fn definition_target(&self, id: &str) -> Option<Position> {
        self.index.lookup(id)?.definition
    }

    /// The footnote cited under an editor cursor, for highlighting it.
    pub fn footnote_at(&self, cursor: Position) -> Option<&Footnote> {
        self.index.at_position(cursor)
    }
}
