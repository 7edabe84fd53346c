use crate::models::Position;

use super::{
    FootnoteSet,
    lines::{LineRef, column_at},
    patterns::Patterns,
};

/// A definition whose body is still being collected.
struct OpenDefinition<'a> {
    id: &'a str,
    lines: Vec<&'a str>,
}

impl OpenDefinition<'_> {
    /// Joins the collected lines and stores the trimmed body.
    fn close(self, notes: &mut FootnoteSet) {
        let body = self.lines.join("\n");
        notes.get_or_insert(self.id).body = body.trim().to_string();
    }
}

/// Strips exactly one indent level: a tab or four spaces.
fn strip_indent(text: &str) -> Option<&str> {
    text.strip_prefix('\t').or(text.strip_prefix("    "))
}

/// Second pass: collects `[^id]: body` definitions and their continuation lines.
///
/// Continuation lines are indented; blank lines inside a body are kept. The
/// first non-blank, unindented line closes the body and is left as ordinary
/// text. A repeated definition overwrites the earlier body and anchor.
pub fn scan_definitions<'a>(lines: &[LineRef<'a>], patterns: &Patterns, notes: &mut FootnoteSet) {
    let mut open: Option<OpenDefinition<'a>> = None;

    for line in lines {
        if let Some(caps) = patterns.definition.captures(line.text)
            && let (Some(whole), Some(label)) = (caps.get(0), caps.get(1))
        {
            if let Some(previous) = open.take() {
                previous.close(notes);
            }

            let id = label.as_str();
            let anchor = Position::new(line.number, column_at(line.text, whole.start()));
            notes.get_or_insert(id).definition = Some(anchor);

            let first = caps.get(2).map_or("", |m| m.as_str());
            open = Some(OpenDefinition {
                id,
                lines: vec![first],
            });
            continue;
        }

        let Some(current) = open.as_mut() else {
            continue;
        };

        if let Some(rest) = strip_indent(line.text) {
            current.lines.push(rest);
        } else if line.text.trim().is_empty() {
            current.lines.push("");
        } else if let Some(finished) = open.take() {
            finished.close(notes);
        }
    }

    if let Some(last) = open {
        last.close(notes);
    }
}
