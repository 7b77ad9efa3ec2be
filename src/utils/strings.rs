//! String helpers

use std::collections::HashSet;

/// Joins `items` with `separator` after stripping the separator out of each
/// item, so the result always splits back into the same set.
///
/// Duplicates (after stripping) are dropped, keeping the first occurrence.
pub fn safe_join<I, S>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut parts = Vec::new();

    for item in items {
        let cleaned = if separator.is_empty() {
            item.as_ref().to_string()
        } else {
            item.as_ref().replace(separator, "")
        };
        if seen.insert(cleaned.clone()) {
            parts.push(cleaned);
        }
    }

    parts.join(separator)
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
