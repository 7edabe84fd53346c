//! # Footnote Parsing
//!
//! Turns raw markdown text into an ordered list of [`Footnote`]s.
//!
//! Parsing is two passes over the same line buffer:
//!
//! 1. **references**: every `[^id]` not directly followed by `:` is recorded
//!    with its line/column, in scan order.
//! 2. **definitions**: every line starting with `[^id]:` opens a body that
//!    continues over indented and blank lines.
//!
//! Both passes write into one [`FootnoteSet`] keyed by id, which is then
//! sorted into display order: cited footnotes by their first citation, then
//! definition-only footnotes in the order they were defined.
//!
//! The parser is a pure function of its input. It holds no state between
//! calls, so callers may re-run it on every edit.

pub mod definitions;
pub mod lines;
pub mod patterns;
pub mod references;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use crate::models::Footnote;

use definitions::scan_definitions;
use lines::LineRef;
use patterns::patterns;
use references::scan_references;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Document is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Footnote pattern failed to compile: {0}")]
    Pattern(regex::Error),
}

/// Footnotes collected during a parse, in first-seen order.
#[derive(Debug, Default)]
pub struct FootnoteSet {
    notes: Vec<Footnote>,
    slots: HashMap<String, usize>,
}

impl FootnoteSet {
    pub fn get(&self, id: &str) -> Option<&Footnote> {
        self.slots.get(id).map(|&slot| &self.notes[slot])
    }

    /// Returns the footnote for `id`, creating an empty one if unseen.
    pub fn get_or_insert(&mut self, id: &str) -> &mut Footnote {
        let slot = match self.slots.get(id) {
            Some(&slot) => slot,
            None => {
                self.notes.push(Footnote::new(id));
                let slot = self.notes.len() - 1;
                self.slots.insert(id.to_string(), slot);
                slot
            }
        };
        &mut self.notes[slot]
    }

    /// Consumes the set and returns footnotes in display order.
    ///
    /// Cited footnotes come first, ordered by first citation. The sort is
    /// stable, so definition-only footnotes keep their first-seen order.
    pub fn into_display_order(self) -> Vec<Footnote> {
        let mut notes = self.notes;
        notes.sort_by_key(|note| (note.first_reference().is_none(), note.first_reference()));
        notes
    }
}

/// Parses footnotes, reporting internal failures to the caller.
pub fn try_parse_footnotes(text: &str) -> Result<Vec<Footnote>, ParseError> {
    let patterns = patterns()?;
    let lines: Vec<LineRef<'_>> = lines::lines(text).collect();

    let mut notes = FootnoteSet::default();
    scan_references(&lines, patterns, &mut notes);
    scan_definitions(&lines, patterns, &mut notes);

    let footnotes = notes.into_display_order();
    log::debug!(
        "Parsed {} footnotes from {} lines",
        footnotes.len(),
        lines.len()
    );
    Ok(footnotes)
}

/// Parses a raw document buffer. Invalid UTF-8 is a parse failure.
pub fn parse_footnotes_bytes(bytes: &[u8]) -> Result<Vec<Footnote>, ParseError> {
    let text = std::str::from_utf8(bytes)?;
    try_parse_footnotes(text)
}

/// Parses footnotes, returning an empty list if parsing fails.
///
/// Use [`try_parse_footnotes`] when an error must be told apart from a
/// document that simply has no footnotes.
pub fn parse_footnotes(text: &str) -> Vec<Footnote> {
    try_parse_footnotes(text).unwrap_or_else(|e| {
        log::warn!("Footnote parse failed: {e}");
        Vec::new()
    })
}
