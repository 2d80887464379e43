//! Display text helpers.

/// Keep at most `max` characters of `s`.
///
/// Counts Unicode scalar values, never splitting a character. Strings
/// already within the limit are returned unchanged, so applying it twice is
/// the same as applying it once.
///
/// ```
/// use site_probe::text::truncate_chars;
///
/// assert_eq!(truncate_chars("héllo", 2), "hé");
/// assert_eq!(truncate_chars("short", 40), "short");
/// ```
#[must_use]
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Trim surrounding whitespace, then truncate for display.
///
/// Trimming happens first, so leading whitespace never eats into the limit.
/// Whitespace exposed at the cut point is kept.
#[must_use]
pub fn display_text(raw: &str, max: usize) -> String {
    truncate_chars(raw.trim(), max).to_string()
}
