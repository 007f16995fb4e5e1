//! Text normalization for extracted statute text.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

/// Any run of whitespace, including newlines and tabs.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize raw XML text into a single clean line.
///
/// - Non-breaking spaces become ordinary spaces
/// - NFKC normalization folds compatibility characters
/// - Whitespace runs collapse to a single space, ends are trimmed
///
/// Absent or empty input yields an empty string. Applying `clean` to its own
/// output returns the same string.
///
/// # Examples
/// ```
/// use regelrecht_wettenparser::text::clean;
///
/// assert_eq!(clean(Some("  Artikel\u{a0}1\n\t lid  ")), "Artikel 1 lid");
/// assert_eq!(clean(None), "");
/// ```
pub fn clean(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return String::new();
    };

    let normalized: String = raw.replace('\u{a0}', " ").nfkc().collect();
    WHITESPACE_RUN
        .replace_all(&normalized, " ")
        .trim()
        .to_string()
}

/// Strip a redundant paragraph number from the start of paragraph text.
///
/// Source XML often repeats the `lidnr` at the start of the first `al`
/// ("1. De tekst volgt."). When `text` starts with exactly `number`, that
/// prefix is removed together with any following run of `.` and spaces.
/// An empty `number` leaves the text untouched.
///
/// # Examples
/// ```
/// use regelrecht_wettenparser::text::strip_number_prefix;
///
/// assert_eq!(strip_number_prefix("1. De tekst volgt.", "1"), "De tekst volgt.");
/// assert_eq!(strip_number_prefix("De tekst volgt.", "1"), "De tekst volgt.");
/// ```
pub fn strip_number_prefix(text: &str, number: &str) -> String {
    if number.is_empty() {
        return text.to_string();
    }

    match text.strip_prefix(number) {
        Some(rest) => rest.trim_start_matches(['.', ' ']).trim_start().to_string(),
        None => text.to_string(),
    }
}
