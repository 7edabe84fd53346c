/// A single line of the source text with its zero-based line number.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    pub number: u32,
    /// Line text without the `\n` separator or a trailing `\r`.
    pub text: &'a str,
}

/// Splits text on `\n` the way an editor counts lines.
///
/// A trailing newline yields a final empty line, so line numbers match the
/// editor's gutter even at the end of the buffer.
pub fn lines(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n').enumerate().map(|(index, raw)| LineRef {
        number: u32::try_from(index).unwrap_or(u32::MAX),
        text: raw.strip_suffix('\r').unwrap_or(raw),
    })
}

/// Converts a byte offset within a line to a char column.
pub fn column_at(text: &str, byte_offset: usize) -> u32 {
    let prefix = text.get(..byte_offset).unwrap_or(text);
    u32::try_from(prefix.chars().count()).unwrap_or(u32::MAX)
}
