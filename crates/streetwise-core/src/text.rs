//! Text processing utilities for listing lines.
//!
//! Provides line cleaning, column splitting, and detection of page
//! furniture (page numbers, column headers) for use by the parser and
//! extractor.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for column separators: a tab or a run of two or more spaces.
static COLUMN_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t+|\s{2,}").expect("valid regex"));

/// Regex for page-number lines ("12", "Page 3", "Page 3 of 39", "- 3 -").
static PAGE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:page\s+)?-?\s*\d+\s*-?(?:\s+of\s+\d+)?$").expect("valid regex")
});

/// Regex for the column header printed at the top of each page.
static COLUMN_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^street(?:\s+name)?(?:\s+(?:type|from|to|limits?|between))*$")
        .expect("valid regex")
});

/// Clean a raw listing line.
///
/// Drops control characters (keeping tabs), trims both ends, and turns
/// non-breaking spaces into plain spaces. Column spacing is preserved so
/// [`split_columns`] still sees it.
pub fn clean_line(line: &str) -> String {
    line.chars()
        .filter_map(|c| match c {
            '\t' => Some('\t'),
            '\u{a0}' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Split a cleaned line into columns.
///
/// Columns are separated by tabs or runs of two or more spaces. Each column
/// has its internal whitespace collapsed to single spaces.
pub fn split_columns(line: &str) -> Vec<String> {
    COLUMN_SEPARATOR
        .split(line.trim())
        .map(collapse_whitespace)
        .filter(|c| !c.is_empty())
        .collect()
}

/// Collapse runs of whitespace into single spaces and trim.
pub fn collapse_whitespace(text: &str) -> String {
    tokens(text).collect::<Vec<_>>().join(" ")
}

/// Whitespace-separated tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Lowercased, whitespace-collapsed form used as a lookup key.
pub fn normalize_key(text: &str) -> String {
    tokens(text)
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Whether a cleaned line is page furniture rather than a listing entry.
///
/// Blank lines, page numbers, and the column header all count.
pub fn is_page_furniture(line: &str) -> bool {
    let collapsed = collapse_whitespace(line);
    collapsed.is_empty() || PAGE_NUMBER.is_match(&collapsed) || COLUMN_HEADER.is_match(&collapsed)
}
