//! Delta serialization of mappings into the `mappings` string.

use crate::{Error, Mapping, Position};
use std::collections::BTreeSet;

/// Returns the sorted, duplicate-free view of a registry list.
///
/// The canonical index of a source or name is its position in this list,
/// not the order it was first registered in.
pub(crate) fn canonicalize(items: &[String]) -> Vec<&str> {
    let mut canonical: Vec<&str> = items.iter().map(String::as_str).collect();
    canonical.sort_unstable();
    canonical.dedup();
    canonical
}

fn canonical_index(canonical: &[&str], item: &str) -> Option<i64> {
    canonical.binary_search(&item).ok().map(|index| index as i64)
}

/// Serializes `mappings` against the given source and name registries.
///
/// The registries may contain duplicates and arrive in any order; indices are
/// assigned by position in the sorted, deduplicated lists. Groups are emitted
/// one per generated line, separated by `;`, with `,` between the segments of
/// one line. Within a segment every field is encoded as a signed VLQ delta
/// against the previous mapping's value; the generated column resets to zero
/// at every line advance, and original lines are converted from 1-based to
/// 0-based before the delta is taken.
///
/// A mapping that references a source or name absent from its registry
/// reports [`Error::UnknownSource`] or [`Error::UnknownName`]. That cannot
/// happen for registries accumulated through
/// [`SourceMapGenerator::add_mapping`](crate::SourceMapGenerator::add_mapping).
pub fn encode_mappings(
    sources: &[String],
    names: &[String],
    mappings: &BTreeSet<Mapping>,
) -> Result<String, Error> {
    let sources = canonicalize(sources);
    let names = canonicalize(names);

    let mut output = String::new();
    let mut prev_generated = Position::new(1, 0);
    // Original-side state is zero-based and shared across the whole string.
    let mut prev_original_line: i64 = 0;
    let mut prev_original_column: i64 = 0;
    let mut prev_source_index: i64 = 0;
    let mut prev_name_index: i64 = 0;
    let mut first = true;

    for mapping in mappings {
        if mapping.generated.line == prev_generated.line {
            if !first {
                output.push(',');
            }
        } else {
            // One ';' per advanced line; lines without mappings stay as
            // empty groups.
            for _ in prev_generated.line..mapping.generated.line {
                output.push(';');
            }
            prev_generated.column = 0;
        }
        prev_generated.line = mapping.generated.line;
        first = false;

        vlq::encode(
            i64::from(mapping.generated.column) - i64::from(prev_generated.column),
            &mut output,
        )?;
        prev_generated.column = mapping.generated.column;

        if let Some(original) = &mapping.original {
            let source_index =
                canonical_index(&sources, &original.source).ok_or_else(|| Error::UnknownSource {
                    source: original.source.clone(),
                })?;
            vlq::encode(source_index - prev_source_index, &mut output)?;
            prev_source_index = source_index;

            let original_line = i64::from(original.position.line) - 1;
            vlq::encode(original_line - prev_original_line, &mut output)?;
            prev_original_line = original_line;

            let original_column = i64::from(original.position.column);
            vlq::encode(original_column - prev_original_column, &mut output)?;
            prev_original_column = original_column;

            if let Some(name) = &original.name {
                let name_index =
                    canonical_index(&names, name).ok_or_else(|| Error::UnknownName {
                        name: name.clone(),
                    })?;
                vlq::encode(name_index - prev_name_index, &mut output)?;
                prev_name_index = name_index;
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OriginalLocation;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_canonicalize_sorts_and_dedups() {
        let items = strings(&["b.js", "a.js", "b.js", "c.js", "a.js"]);
        assert_eq!(canonicalize(&items), vec!["a.js", "b.js", "c.js"]);
    }

    #[test]
    fn test_empty_mappings_serialize_to_empty_string() {
        let mappings = BTreeSet::new();
        assert_eq!(encode_mappings(&[], &[], &mappings).unwrap(), "");
    }

    #[test]
    fn test_unknown_source_is_fatal() {
        let mut mappings = BTreeSet::new();
        mappings.insert(Mapping::new(
            Position::new(1, 0),
            Some(OriginalLocation::new("a.js", Position::new(1, 0))),
        ));

        let error = encode_mappings(&[], &[], &mappings).unwrap_err();
        assert_eq!(
            error,
            Error::UnknownSource {
                source: "a.js".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_name_is_fatal() {
        let mut mappings = BTreeSet::new();
        mappings.insert(Mapping::new(
            Position::new(1, 0),
            Some(OriginalLocation::named("a.js", Position::new(1, 0), "x")),
        ));

        let error = encode_mappings(&strings(&["a.js"]), &[], &mappings).unwrap_err();
        assert_eq!(
            error,
            Error::UnknownName {
                name: "x".to_string()
            }
        );
    }
}
