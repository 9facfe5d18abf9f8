//! Canonical form for technology identifiers.
//!
//! The matcher, the synthesizer, and selection identity all go through
//! [`normalize`] so that a name entering through the catalog and the same
//! name entering through a selection can never diverge on spacing.

/// Canonical form of a technology identifier: surrounding whitespace removed,
/// case preserved.
///
/// Comparison is case-sensitive on purpose. "React.js" and "react.js" are
/// different catalog entries as far as matching is concerned.
pub fn normalize(identifier: &str) -> &str {
    identifier.trim()
}

/// Split a comma-separated company string into trimmed, non-empty tokens.
pub fn split_companies(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
        .map(normalize)
        .filter(|company| !company.is_empty())
}
