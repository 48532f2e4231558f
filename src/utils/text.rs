use unicode_normalization::UnicodeNormalization;

/// Fold text for case-insensitive matching.
///
/// NFKC first so that composed and decomposed accents (and full-width forms) compare equal,
/// then a full Unicode lowercase.
pub fn fold(s: &str) -> String {
    s.nfkc().flat_map(char::to_lowercase).collect()
}

/// Case-insensitive substring test. `needle` must already be folded.
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold(haystack).contains(folded_needle)
}
