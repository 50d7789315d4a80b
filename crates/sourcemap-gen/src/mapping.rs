//! The mapping value type and its canonical ordering.

use crate::Position;
use std::cmp::Ordering;

/// A reference into an original source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OriginalLocation {
    /// The original source the generated range came from.
    pub source: String,
    /// The position within the original source (1-based line).
    pub position: Position,
    /// The original identifier name, when one applies.
    pub name: Option<String>,
}

impl OriginalLocation {
    /// Creates an original location without a name.
    pub fn new(source: impl Into<String>, position: Position) -> Self {
        Self {
            source: source.into(),
            position,
            name: None,
        }
    }

    /// Creates an original location carrying an identifier name.
    pub fn named(source: impl Into<String>, position: Position, name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            position,
            name: Some(name.into()),
        }
    }
}

// Tie-break order within one generated position: source, then original
// line/column, then name.
impl Ord for OriginalLocation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.source
            .cmp(&other.source)
            .then_with(|| self.position.cmp(&other.position))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for OriginalLocation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One generated-to-original correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mapping {
    /// The position in the generated output.
    pub generated: Position,
    /// The original location, absent for generated-only ranges.
    pub original: Option<OriginalLocation>,
}

impl Mapping {
    /// Creates a new mapping.
    pub fn new(generated: Position, original: Option<OriginalLocation>) -> Self {
        Self {
            generated,
            original,
        }
    }
}

// The encoder visits mappings in exactly this order: generated line, then
// generated column, then the original fields. A mapping without an original
// sorts by its generated position alone, ahead of mappings that have one.
impl Ord for Mapping {
    fn cmp(&self, other: &Self) -> Ordering {
        self.generated
            .cmp(&other.generated)
            .then_with(|| self.original.cmp(&other.original))
    }
}

impl PartialOrd for Mapping {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(line: u32, column: u32, original: Option<OriginalLocation>) -> Mapping {
        Mapping::new(Position::new(line, column), original)
    }

    #[test]
    fn test_generated_position_dominates() {
        let a = mapping(1, 9, Some(OriginalLocation::new("z.js", Position::new(9, 9))));
        let b = mapping(2, 0, None);
        assert!(a < b);

        let c = mapping(2, 1, None);
        assert!(b < c);
    }

    #[test]
    fn test_missing_original_sorts_first() {
        let bare = mapping(1, 0, None);
        let with_original = mapping(1, 0, Some(OriginalLocation::new("a.js", Position::new(1, 0))));
        assert!(bare < with_original);
    }

    #[test]
    fn test_original_tie_break_precedence() {
        let by_source = mapping(1, 0, Some(OriginalLocation::new("a.js", Position::new(9, 9))));
        let by_source_later = mapping(1, 0, Some(OriginalLocation::new("b.js", Position::new(1, 0))));
        assert!(by_source < by_source_later);

        let by_line = mapping(1, 0, Some(OriginalLocation::new("a.js", Position::new(1, 9))));
        let by_line_later = mapping(1, 0, Some(OriginalLocation::new("a.js", Position::new(2, 0))));
        assert!(by_line < by_line_later);

        let unnamed = mapping(1, 0, Some(OriginalLocation::new("a.js", Position::new(1, 0))));
        let named = mapping(
            1,
            0,
            Some(OriginalLocation::named("a.js", Position::new(1, 0), "x")),
        );
        assert!(unnamed < named);
    }

    #[test]
    fn test_equality_requires_every_field() {
        let a = mapping(
            1,
            0,
            Some(OriginalLocation::named("a.js", Position::new(1, 0), "x")),
        );
        let b = mapping(
            1,
            0,
            Some(OriginalLocation::named("a.js", Position::new(1, 0), "y")),
        );
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
