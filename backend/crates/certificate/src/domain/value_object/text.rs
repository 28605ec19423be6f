//! Free-text normalization for names, signatures and countries.

use unicode_normalization::UnicodeNormalization;

/// Trim and NFC-normalize. Thai input methods can emit decomposed vowel
/// sequences, which would otherwise break name matching.
pub fn normalize(input: &str) -> String {
    input.trim().nfc().collect()
}

/// Normalized value, or `None` when only whitespace remains
pub fn non_blank(input: &str) -> Option<String> {
    let value = normalize(input);
    (!value.is_empty()).then_some(value)
}
