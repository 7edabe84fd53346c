use super::position::{FootnoteReference, Position};

/// A footnote label together with everything the parser observed about it.
///
/// A footnote exists because it was cited, defined, or both. `references`
/// are kept in scan order (top to bottom, left to right), so the first entry
/// is always the earliest citation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footnote {
    /// Label between `[^` and `]`, case-sensitive.
    pub id: String,
    /// Definition text with continuation indents stripped and outer whitespace
    /// trimmed. Empty when the footnote is never defined.
    pub body: String,
    /// Anchor of the definition line, if any.
    pub definition: Option<Position>,
    pub references: Vec<FootnoteReference>,
}

impl Footnote {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: String::new(),
            definition: None,
            references: Vec::new(),
        }
    }

    pub fn first_reference(&self) -> Option<Position> {
        self.references.first().map(|r| r.position)
    }

    pub fn is_defined(&self) -> bool {
        self.definition.is_some()
    }

    pub fn is_referenced(&self) -> bool {
        !self.references.is_empty()
    }

    /// The citation mark as it appears in the source, e.g. `[^note]`.
    pub fn marker(&self) -> String {
        format!("[^{}]", self.id)
    }

    /// Start and end positions covering the `index`-th citation mark.
    ///
    /// The end is exclusive, matching an editor selection `from..to`.
    pub fn reference_span(&self, index: usize) -> Option<(Position, Position)> {
        let start = self.references.get(index)?.position;
        let width = u32::try_from(self.marker().chars().count()).unwrap_or(u32::MAX);
        Some((start, start.advance(width)))
    }
}
