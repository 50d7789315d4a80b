//! Line index for converting byte offsets into positions.

use crate::Position;
use text_size::TextSize;

/// An index of line starts for converting between byte offsets and
/// [`Position`] values.
///
/// The index stores the byte offset of the start of each line, enabling
/// O(log n) lookups in both directions. Positions use the crate convention:
/// 1-based lines, 0-based columns.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Creates a new line index from source text.
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];

        for (offset, c) in text.char_indices() {
            if c == '\n' {
                line_starts.push(TextSize::from((offset + 1) as u32));
            }
        }

        Self { line_starts }
    }

    /// Returns the number of lines in the source.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset to a position.
    pub fn position(&self, offset: TextSize) -> Position {
        // Binary search for the line containing this offset.
        let index = match self.line_starts.binary_search(&offset) {
            Ok(index) => index,
            Err(index) => index.saturating_sub(1),
        };

        let line_start = self.line_starts[index];
        let column = u32::from(offset) - u32::from(line_start);

        Position::new(index as u32 + 1, column)
    }

    /// Converts a position to a byte offset.
    ///
    /// Returns `None` if the line is out of bounds.
    pub fn offset(&self, position: Position) -> Option<TextSize> {
        if position.line == 0 {
            return None;
        }
        let line_start = self.line_starts.get(position.line as usize - 1)?;
        Some(*line_start + TextSize::from(position.column))
    }

    /// Returns the byte offset where a 1-based line starts.
    pub fn line_start(&self, line: u32) -> Option<TextSize> {
        if line == 0 {
            return None;
        }
        self.line_starts.get(line as usize - 1).copied()
    }
}
