//! Build script to generate embedded word pools
//!
//! Reads one word file per difficulty tier and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let tiers = [
        ("data/easy.txt", "EASY_WORDS", "Short, well-known dinosaur names"),
        ("data/medium.txt", "MEDIUM_WORDS", "Full genus names of familiar dinosaurs"),
        ("data/hard.txt", "HARD_WORDS", "Long and obscure dinosaur names"),
    ];

    let out_path = Path::new(&out_dir).join("pools.rs");
    let mut output = fs::File::create(&out_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out_path.display()));

    writeln!(output, "// Generated word pools").unwrap();

    for (input_path, const_name, doc_comment) in tiers {
        generate_word_pool(&mut output, input_path, const_name, doc_comment);

        // Rebuild if word pools change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_pool(
    output: &mut fs::File,
    input_path: &str,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
