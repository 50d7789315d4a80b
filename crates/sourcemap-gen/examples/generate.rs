use sourcemap_gen::{GeneratorOptions, LineIndex, OriginalLocation, Position, SourceMapGenerator};
use std::fs;

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Usage: generate <file>");
    let source = fs::read_to_string(&path).expect("Failed to read file");

    // Identity-map the start of every line back to itself.
    let index = LineIndex::new(&source);
    let mut generator = SourceMapGenerator::with_options(GeneratorOptions {
        file: Some(format!("{}.out", path)),
        ..GeneratorOptions::default()
    });
    for line in 1..=index.line_count() as u32 {
        generator = generator.add_mapping(
            Position::new(line, 0),
            Some(OriginalLocation::new(path.clone(), Position::new(line, 0))),
        );
    }

    println!("sources: {}", generator.sources().join(", "));
    println!("mappings: {}", generator.mappings_string().expect("serialize mappings"));
}
