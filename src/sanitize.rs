//! Free-text sanitization for front matter embedding.
//!
//! Field values arrive from BibTeX with brace groups, LaTeX escapes, and
//! arbitrary whitespace. This module flattens them into single-line
//! strings that are safe inside a double-quoted TOML value, and
//! transliterates contributor names to plain ASCII.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Sanitizes free text for embedding in a double-quoted field value.
///
/// Transforms, in order:
/// 1. escape every backslash,
/// 2. strip literal braces,
/// 3. escape every double quote,
/// 4. collapse whitespace runs to single spaces and trim.
///
/// Backslashes must be escaped before quotes: reversing steps 1 and 3
/// would double-escape the quotes.
pub fn sanitize(raw: &str) -> String {
    let escaped = raw.replace('\\', "\\\\");
    let unbraced = escaped.replace('{', "").replace('}', "");
    let quoted = unbraced.replace('"', "\\\"");
    collapse_whitespace(&quoted)
}

/// Collapses all whitespace runs (including newlines and tabs) to single
/// spaces and trims leading/trailing whitespace.
pub fn collapse_whitespace(raw: &str) -> String {
    let ws = Regex::new(r"\s+").unwrap();
    ws.replace_all(raw, " ").trim().to_string()
}

/// Transliterates accented Latin characters to their unaccented ASCII
/// equivalents.
///
/// NFKD decomposition separates base characters from combining marks;
/// everything non-ASCII (the marks, plus characters with no
/// decomposition such as `ø`) is then dropped.
pub fn transliterate(raw: &str) -> String {
    raw.nfkd().filter(char::is_ascii).collect()
}

/// Splits a BibTeX contributor string into individual ASCII names.
///
/// The raw string is whitespace-collapsed, split on the literal `" and "`
/// separator, and each name transliterated. Empty names are discarded.
pub fn split_contributors(raw: &str) -> Vec<String> {
    collapse_whitespace(raw)
        .split(" and ")
        .map(transliterate)
        .filter(|name| !name.is_empty())
        .collect()
}
