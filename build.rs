//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let out = Path::new(&out_dir).join("wordlists.rs");

    let mut output = fs::File::create(&out)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", out.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for (input_path, const_name, doc_comment) in [
        ("data/easy.txt", "EASY", "Secret words for the easy tier (common words)"),
        ("data/medium.txt", "MEDIUM", "Secret words for the medium tier"),
        ("data/hard.txt", "HARD", "Secret words for the hard tier (obscure words)"),
        ("data/allowed.txt", "ALLOWED", "Permissive dictionary of acceptable guesses"),
    ] {
        generate_word_list(&mut output, input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_uppercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
