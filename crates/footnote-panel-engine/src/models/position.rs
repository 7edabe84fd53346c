/// A zero-based line/column coordinate in a text buffer.
///
/// `column` counts chars from the start of the line, not bytes, so positions
/// line up with what an editor cursor reports for non-ASCII text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Returns the position `columns` chars further along the same line.
    #[must_use]
    pub const fn advance(self, columns: u32) -> Self {
        Self {
            line: self.line,
            column: self.column.saturating_add(columns),
        }
    }
}

impl std::fmt::Display for Position {
    /// Formats as a 1-based `line:column` pair for humans.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// One occurrence of a citation mark such as `[^1]` in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FootnoteReference {
    pub position: Position,
}

impl FootnoteReference {
    pub const fn new(line: u32, column: u32) -> Self {
        Self {
            position: Position::new(line, column),
        }
    }
}

impl From<Position> for FootnoteReference {
    fn from(position: Position) -> Self {
        Self { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positions_order_by_line_then_column() {
        let mut positions = vec![
            Position::new(2, 0),
            Position::new(0, 7),
            Position::new(0, 3),
            Position::new(1, 0),
        ];
        positions.sort();

        assert_eq!(
            positions,
            vec![
                Position::new(0, 3),
                Position::new(0, 7),
                Position::new(1, 0),
                Position::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_advance_stays_on_line() {
        let start = Position::new(4, 10);
        assert_eq!(start.advance(5), Position::new(4, 15));
        assert_eq!(Position::new(0, u32::MAX).advance(1).column, u32::MAX);
    }

    #[test]
    fn test_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(9, 4).to_string(), "10:5");
    }
}
