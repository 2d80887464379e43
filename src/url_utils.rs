//! URL helpers for link targets.

use url::Url;

use crate::error::{Error, Result};

/// Resolve an anchor's `href` against the page it was found on.
///
/// Returns `None` for empty values, fragment-only links and schemes that do
/// not point at another document (`javascript:`, `mailto:`, `tel:`, `data:`).
#[must_use]
pub fn resolve_href(href: &str, base: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lower = href.to_ascii_lowercase();
    if ["javascript:", "mailto:", "tel:", "data:"]
        .iter()
        .any(|scheme| lower.starts_with(scheme))
    {
        return None;
    }

    base.join(href).ok()
}

/// Parse the configured target, which must be an absolute http(s) URL.
pub fn parse_target(url_str: &str) -> Result<Url> {
    let url = Url::parse(url_str.trim())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(Error::UnsupportedScheme(url.scheme().to_string()));
    }
    Ok(url)
}
