//! Response body decoding.
//!
//! The body arrives as bytes. The charset is taken from the `Content-Type`
//! header first, then from a `<meta>` declaration near the top of the
//! document, and falls back to UTF-8. Undecodable bytes become U+FFFD.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `charset=...` parameter of a `Content-Type` header value
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex"));

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

/// Bytes of the document scanned for a `<meta>` declaration.
const META_SCAN_LIMIT: usize = 1024;

/// Charset label from a `Content-Type` header value, if it names one.
fn header_charset(content_type: &str) -> Option<&str> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Charset label declared by a `<meta>` tag in the head of the document.
///
/// Covers both `<meta charset>` and the `http-equiv="Content-Type"` form,
/// since the latter's `content` attribute also contains `charset=`.
fn meta_charset(body: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&body[..body.len().min(META_SCAN_LIMIT)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pick the encoding for a response body.
#[must_use]
pub fn detect_encoding(body: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
    {
        return encoding;
    }

    meta_charset(body)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode a response body to a UTF-8 string.
///
/// # Examples
///
/// ```
/// use site_probe::encoding::decode_body;
///
/// let text = decode_body(b"Caf\xE9", Some("text/html; charset=ISO-8859-1"));
/// assert_eq!(text, "Café");
/// ```
#[must_use]
pub fn decode_body(body: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(body, content_type);
    debug!(encoding = encoding.name(), "decoding body");

    if encoding == UTF_8 {
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _encoding_used, _had_errors) = encoding.decode(body);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_charset_wins_over_meta() {
        let body = br#"<html><head><meta charset="utf-8"></head></html>"#;
        let encoding = detect_encoding(body, Some("text/html; charset=windows-1252"));
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn falls_back_to_meta_charset() {
        let body = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // encoding_rs maps ISO-8859-1 to windows-1252 per WHATWG
        assert_eq!(detect_encoding(body, Some("text/html")).name(), "windows-1252");
    }

    #[test]
    fn reads_http_equiv_declaration() {
        let body = br#"<meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS">"#;
        assert_eq!(detect_encoding(body, None).name(), "Shift_JIS");
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        let body = b"<html></html>";
        assert_eq!(detect_encoding(body, Some("text/html; charset=x-bogus")), UTF_8);
        assert_eq!(detect_encoding(body, None), UTF_8);
    }

    #[test]
    fn header_charset_quoted_and_mixed_case() {
        assert_eq!(header_charset(r#"text/html; Charset="UTF-8""#), Some("UTF-8"));
        assert_eq!(header_charset("text/html"), None);
    }

    #[test]
    fn decodes_windows1252_smart_quotes() {
        let body = b"<p>\x93Hello\x94</p>";
        let text = decode_body(body, Some("text/html; charset=windows-1252"));
        assert!(text.contains("\u{201C}Hello\u{201D}"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let text = decode_body(b"ok \xFF\xFE ok", None);
        assert!(text.starts_with("ok "));
        assert!(text.contains('\u{FFFD}'));
    }
}
