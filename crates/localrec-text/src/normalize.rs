use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, NFKD-decompose, and drop combining marks.
///
/// `"Barbería"` becomes `"barberia"`. Nothing else is removed: punctuation,
/// digits and whitespace pass through unchanged.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .nfkd()
        .filter(|&c| canonical_combining_class(c) == 0)
        .collect()
}
