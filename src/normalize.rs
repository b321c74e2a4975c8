//! Label normalization applied before any catalog lookup.

/// Strip whitespace and everything outside ASCII `[A-Za-z0-9]`.
///
/// `"Google Chrome!"` becomes `"GoogleChrome"`. Letters outside ASCII are
/// dropped too, so the result is always plain ASCII and the function is
/// idempotent.
pub fn normalize_icon_name(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Placeholder glyph for a normalized name: its first character, uppercased.
pub fn fallback_glyph(normalized: &str) -> char {
    normalized
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}
