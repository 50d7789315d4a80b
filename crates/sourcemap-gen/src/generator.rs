//! The incremental mapping accumulator.

use crate::{encode, Error, Mapping, OriginalLocation, Position};
use std::collections::btree_set;
use std::collections::BTreeSet;

/// Options for constructing a [`SourceMapGenerator`].
///
/// Everything here is carried verbatim for the caller's envelope; none of it
/// affects the serialized mappings string.
#[derive(Debug, Clone, Default)]
pub struct GeneratorOptions {
    /// The name of the generated file.
    pub file: Option<String>,
    /// The root prepended to source paths by consumers.
    pub source_root: Option<String>,
    /// Inline content of the original source.
    pub source_contents: Option<String>,
}

/// An immutable accumulator of mappings plus the source and name registries
/// they reference.
///
/// [`add_mapping`](Self::add_mapping) returns a new generator and leaves the
/// receiver untouched, so intermediate states stay valid and can be shared
/// read-only across threads. Mappings are kept in a sorted set: duplicates
/// collapse, and iteration follows the canonical order the encoder relies on.
#[derive(Debug, Clone, Default)]
pub struct SourceMapGenerator {
    file: Option<String>,
    source_root: Option<String>,
    sources: Vec<String>,
    names: Vec<String>,
    mappings: BTreeSet<Mapping>,
    source_contents: Option<String>,
}

impl SourceMapGenerator {
    /// Creates an empty generator with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty generator with the given options.
    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            file: options.file,
            source_root: options.source_root,
            source_contents: options.source_contents,
            ..Self::default()
        }
    }

    /// Returns a new generator with the mapping recorded.
    ///
    /// Inserting an identical mapping twice changes nothing (set semantics).
    /// When an original location is present its source is always appended to
    /// the source registry, duplicates included; deduplication happens at
    /// serialization time. The name registry only grows when the location
    /// carries a name.
    pub fn add_mapping(&self, generated: Position, original: Option<OriginalLocation>) -> Self {
        let mut next = self.clone();
        if let Some(original) = &original {
            next.sources.push(original.source.clone());
            if let Some(name) = &original.name {
                next.names.push(name.clone());
            }
        }
        next.mappings.insert(Mapping::new(generated, original));
        next
    }

    /// The generated file name, when one was configured.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    /// The configured source root, if any.
    pub fn source_root(&self) -> Option<&str> {
        self.source_root.as_deref()
    }

    /// The configured inline source content, if any.
    pub fn source_contents(&self) -> Option<&str> {
        self.source_contents.as_deref()
    }

    /// Returns the number of distinct mappings.
    #[inline]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Returns true if no mappings have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    /// Iterates the mappings in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Mapping> {
        self.mappings.iter()
    }

    /// The canonical source list the encoded source indices refer to:
    /// sorted and duplicate-free.
    pub fn sources(&self) -> Vec<&str> {
        encode::canonicalize(&self.sources)
    }

    /// The canonical name list the encoded name indices refer to: sorted
    /// and duplicate-free.
    pub fn names(&self) -> Vec<&str> {
        encode::canonicalize(&self.names)
    }

    /// Serializes the accumulated mappings into the `mappings` string.
    ///
    /// Only the mapping set and the registries participate; `file`,
    /// `source_root` and `source_contents` belong to the caller's envelope.
    pub fn mappings_string(&self) -> Result<String, Error> {
        encode::encode_mappings(&self.sources, &self.names, &self.mappings)
    }
}
