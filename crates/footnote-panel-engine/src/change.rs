use crate::models::Footnote;

/// Whether a renderer showing `previous` needs to redraw for `current`.
///
/// Compares footnotes pairwise by ordinal: id, body, definition anchor and
/// every reference position. Any difference, including a different count,
/// means a refresh. This is only a hint for skipping redundant rendering;
/// the index itself is always replaced.
pub fn needs_refresh(previous: &[Footnote], current: &[Footnote]) -> bool {
    if previous.len() != current.len() {
        return true;
    }

    previous.iter().zip(current).any(|(old, new)| {
        old.id != new.id
            || old.body != new.body
            || old.definition != new.definition
            || old.references.len() != new.references.len()
            || old
                .references
                .iter()
                .zip(&new.references)
                .any(|(a, b)| a.position != b.position)
    })
}
