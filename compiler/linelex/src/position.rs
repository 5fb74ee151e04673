//! Line/column bookkeeping for diagnostics.

use std::fmt;

/// Where the lexer is in its source.
///
/// `line` is 1-based once the first line has been read (0 before that).
/// `column` is a 0-based counter that resets at each new line and grows by
/// the character length of every consumed match. Whitespace trimmed between
/// matches is not counted, so the column tracks consumed token text rather
/// than the raw character offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
}

impl SourcePosition {
    /// Position before any input has been read.
    pub const START: SourcePosition = SourcePosition { line: 0, column: 0 };

    pub const fn new(line: u32, column: u32) -> Self {
        SourcePosition { line, column }
    }

    /// Move to the start of the next line.
    pub(crate) fn next_line(&mut self) {
        self.line = self.line.saturating_add(1);
        self.column = 0;
    }

    /// Advance the column by `chars` consumed characters.
    pub(crate) fn advance(&mut self, chars: usize) {
        let chars = u32::try_from(chars).unwrap_or(u32::MAX);
        self.column = self.column.saturating_add(chars);
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Columns are reported 1-based, like the line.
        write!(f, "line {}, column {}", self.line, self.column.saturating_add(1))
    }
}
