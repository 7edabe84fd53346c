use crate::models::{FootnoteReference, Position};

use super::{
    FootnoteSet,
    lines::{LineRef, column_at},
    patterns::Patterns,
};

/// First pass: records every citation mark, creating footnotes on first sight.
///
/// A mark immediately followed by `:` is a definition anchor and is skipped.
/// A label cannot contain `]`, so any match starting inside a rejected mark
/// would end at the same `]` and be rejected too; resuming after the whole
/// mark loses nothing.
pub fn scan_references(lines: &[LineRef<'_>], patterns: &Patterns, notes: &mut FootnoteSet) {
    for line in lines {
        for caps in patterns.reference.captures_iter(line.text) {
            let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            if line.text[whole.end()..].starts_with(':') {
                continue;
            }

            let position = Position::new(line.number, column_at(line.text, whole.start()));
            notes
                .get_or_insert(label.as_str())
                .references
                .push(FootnoteReference::from(position));
        }
    }
}
