//! Canonicalization routines shared by every supplier adapter and by the
//! merge rules.
//!
//! Suppliers disagree on formatting: amenity tokens arrive as
//! `"BusinessCenter"`, `" business center "`, or `"Business Center"`;
//! coordinates arrive as numbers, numeric strings, `0.0`, or not at all.
//! Everything that crosses the adapter boundary goes through these functions
//! so that equivalent values compare equal regardless of source.

use std::collections::HashSet;

/// Trim a text field; an empty or whitespace-only value becomes absent.
pub fn clean_text(raw: Option<String>) -> Option<String> {
    raw.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        }
    })
}

/// Treat a zero coordinate as absent.
///
/// Upstream feeds send `0.0` (or `""`) for unknown coordinates, so a
/// legitimate zero coordinate is indistinguishable from missing data. The
/// quirk is preserved for compatibility with the supplier convention.
pub fn clean_coord(raw: Option<f64>) -> Option<f64> {
    raw.filter(|value| *value != 0.0)
}

/// Canonicalize one amenity token.
///
/// Inserts a space before every ASCII capital that is not the first
/// character, then lowercases and trims: `"BusinessCenter "` becomes
/// `"business center"`. Applied identically by every adapter so tokens are
/// comparable across suppliers.
pub fn amenity_token(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + 4);
    for (index, ch) in raw.chars().enumerate() {
        if index > 0 && ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    spaced.trim().to_lowercase()
}

/// Canonicalize a whole amenity list.
pub fn format_amenities<I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    raw.into_iter()
        .map(|token| amenity_token(&token))
        .collect()
}

/// Comparison key for amenity equality: lowercase with all spaces removed.
pub fn amenity_key(value: &str) -> String {
    value.trim().to_lowercase().replace(' ', "")
}

/// Keep the first-seen entry for each distinct [`amenity_key`], preserving
/// order of first appearance.
pub fn dedupe_amenities<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    for item in items {
        if seen.insert(amenity_key(&item)) {
            unique.push(item);
        }
    }
    unique
}
