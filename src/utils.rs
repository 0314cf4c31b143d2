//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

/// Qt argument placeholders: `%1`..`%99`, `%n`, and their localized `%L` forms.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%L?([1-9][0-9]?|n)").unwrap());

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Returns false for empty strings, pure numbers, or pure symbols.
///
/// # Examples
///
/// ```
/// use tsling::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Sketcher"));
/// assert!(contains_alphabetic("スケッチ"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("---"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Extracts Qt argument placeholders from text, sorted, with `%L` folded into `%`.
///
/// The result is a multiset: `"%1 of %1"` yields two `%1` entries.
///
/// # Examples
///
/// ```
/// use tsling::utils::placeholders;
///
/// assert_eq!(placeholders("%2 constraints linking to %1"), vec!["%1", "%2"]);
/// assert_eq!(placeholders("%Ln item(s)"), vec!["%n"]);
/// assert!(placeholders("100% done").is_empty());
/// ```
pub fn placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|c| format!("%{}", &c[1]))
        .collect();
    found.sort();
    found
}

/// Shortens text to `max_chars` characters for single-line display.
///
/// Newlines are shown as `⏎` so multi-line sources stay on one report line.
pub fn truncate_for_display(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' { '\u{23ce}' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let mut truncated: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('\u{2026}');
        truncated
    }
}
