//! Word list loading utilities
//!
//! Parses newline-delimited word lists from files or embedded constants. Every line is
//! trimmed and lower-cased; lines of the wrong length or with embedded whitespace are skipped.

use crate::core::{Word, WordLength};
use std::fs;
use std::io;
use std::path::Path;

/// Parse a newline-delimited list, keeping only valid words of `length`
///
/// # Examples
/// ```
/// use wordrun::core::WordLength;
/// use wordrun::wordlists::loader::parse_list;
///
/// let words = parse_list("Crane\n  slate \nno way\njourney\n", WordLength::Five);
/// assert_eq!(words.len(), 2);
/// assert_eq!(words[0].text(), "crane");
/// ```
#[must_use]
pub fn parse_list(content: &str, length: WordLength) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
                None
            } else {
                Word::with_length(trimmed, length).ok()
            }
        })
        .collect()
}

/// Load words of `length` from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P, length: WordLength) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_list(&content, length))
}

/// Convert an embedded string slice to a Word vector, skipping entries of the wrong length
#[must_use]
pub fn words_from_slice(slice: &[&str], length: WordLength) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s.trim(), length).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_normalizes_and_filters() {
        let words = parse_list("CRANE\r\n slate\n\nab cd\ntoolong\nirate", WordLength::Five);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_list_seven_letters() {
        let words = parse_list("journey\ncrane\nhistory\n", WordLength::Seven);
        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "history");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input, WordLength::Five);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input, WordLength::Five).is_empty());
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here.txt", WordLength::Five).is_err());
    }
}
