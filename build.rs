//! Build script to generate embedded word lists
//!
//! Reads the four corpus files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: [(&str, &str, &str); 4] = [
    (
        "data/five_letter_words.txt",
        "FIVE_LETTER_WORDS",
        "Full five-letter list: hard answer pool and guess validation",
    ),
    (
        "data/five_letter_words_guess.txt",
        "FIVE_LETTER_COMMON",
        "Common five-letter words: easy answer pool",
    ),
    (
        "data/seven_letter_words.txt",
        "SEVEN_LETTER_WORDS",
        "Seven-letter boss answers",
    ),
    (
        "data/seven_letter_words_guess.txt",
        "SEVEN_LETTER_GUESSES",
        "Seven-letter words accepted as boss guesses",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("corpus.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for (input_path, const_name, doc_comment) in LISTS {
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
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
    writeln!(output).unwrap();
}
