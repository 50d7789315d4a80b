//! Snapshot tests for serialized mappings output.

use sourcemap_gen::{GeneratorOptions, OriginalLocation, Position, SourceMapGenerator};

/// A small two-source scenario: a call into a utility file inlined into the
/// first output line, followed by generated-only glue and a named result.
fn fixture() -> SourceMapGenerator {
    SourceMapGenerator::with_options(GeneratorOptions {
        file: Some("out.js".to_string()),
        ..GeneratorOptions::default()
    })
    .add_mapping(
        Position::new(1, 0),
        Some(OriginalLocation::new("util.js", Position::new(1, 0))),
    )
    .add_mapping(
        Position::new(1, 8),
        Some(OriginalLocation::named(
            "util.js",
            Position::new(1, 4),
            "add",
        )),
    )
    .add_mapping(
        Position::new(1, 10),
        Some(OriginalLocation::new("main.js", Position::new(2, 2))),
    )
    .add_mapping(Position::new(2, 0), None)
    .add_mapping(
        Position::new(4, 6),
        Some(OriginalLocation::named(
            "main.js",
            Position::new(3, 4),
            "result",
        )),
    )
}

#[test]
fn test_snapshot_multiline_mappings() {
    let mappings = fixture().mappings_string().unwrap();
    insta::assert_snapshot!(mappings, @"ACAA,QAAIA,EDCF;A;;MACEC");
}

#[test]
fn test_snapshot_canonical_registries() {
    let generator = fixture();
    let output = format!(
        "file: {}\nsources: {}\nnames: {}",
        generator.file().unwrap_or("-"),
        generator.sources().join(", "),
        generator.names().join(", "),
    );
    insta::assert_snapshot!(output, @r"
    file: out.js
    sources: main.js, util.js
    names: add, result
    ");
}
