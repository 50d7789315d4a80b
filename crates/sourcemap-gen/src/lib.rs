//! Incremental generation of Source Map v3 `mappings` strings.
//!
//! This crate builds the delta-encoded `mappings` payload of a source map:
//! positions in generated output linked back to positions in original source
//! files, so debuggers and error reporters can translate transformed or
//! minified code back to what the author wrote. It covers the mapping
//! accumulator and the stateful serializer. Assembling the surrounding JSON
//! envelope (`version`, `file`, `sourceRoot`, `sourcesContent`) is left to
//! the caller, as is decoding existing maps.
//!
//! Source and name indices are assigned by position in the sorted,
//! deduplicated registry lists, not by first appearance. The canonical
//! lists a consumer needs for the envelope are available through
//! [`SourceMapGenerator::sources`] and [`SourceMapGenerator::names`].
//!
//! # Example
//!
//! ```
//! use sourcemap_gen::{OriginalLocation, Position, SourceMapGenerator};
//!
//! let generator = SourceMapGenerator::new()
//!     .add_mapping(
//!         Position::new(1, 0),
//!         Some(OriginalLocation::new("a.js", Position::new(1, 0))),
//!     )
//!     .add_mapping(Position::new(2, 0), None);
//!
//! assert_eq!(generator.mappings_string().unwrap(), "AAAA;A");
//! assert_eq!(generator.sources(), vec!["a.js"]);
//! ```

mod encode;
mod error;
mod generator;
mod line_index;
mod mapping;
mod position;

pub use encode::encode_mappings;
pub use error::Error;
pub use generator::{GeneratorOptions, SourceMapGenerator};
pub use line_index::LineIndex;
pub use mapping::{Mapping, OriginalLocation};
pub use position::Position;
