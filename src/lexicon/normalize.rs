//! Label normalization and tokenization.
//!
//! Pure transformations from a raw label string to a stemmed token set:
//! case-style normalization first, then delimiter tokenization, then
//! stemming, then set deduplication. Identical input always yields an
//! identical token set.

use std::collections::HashSet;

use super::stem::stem;

/// Delimiters separating tokens within a normalized label.
const DELIMITERS: [char; 4] = [' ', ':', ',', '.'];

/// Split camelCase and snake_case boundaries into separate lowercase words.
///
/// `DarkScape` and `dark_scape` both normalize to `dark scape`; an uppercase
/// run followed by a lowercase letter breaks before its last letter, so
/// `HTTPServer` becomes `http server`.
pub fn normalize_case_style(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    let mut out = String::with_capacity(label.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            out.push(' ');
            continue;
        }
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_lower) {
                out.push(' ');
            }
        }
        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

/// Split a normalized label on the delimiter class and stem each token.
pub fn tokenize(normalized: &str) -> HashSet<String> {
    normalized
        .split(DELIMITERS)
        .filter(|t| !t.is_empty())
        .map(stem)
        .collect()
}

/// Full pipeline: raw label to stemmed token set.
pub fn token_set(label: &str) -> HashSet<String> {
    tokenize(&normalize_case_style(label))
}
