//! Canonical form of institution names for equality checks.

/// Lowercase `s`, turn everything outside `[a-z0-9]` into a separator and
/// join the remaining words with single spaces.
///
/// The result is only meant for comparison, never for display.
pub fn normalize(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether two names are equal after normalization.
pub fn names_match(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
