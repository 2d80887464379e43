//! DOM queries over the parsed page, via `dom_query`.

pub use dom_query::{Document, Selection};
pub use tendril::StrTendril;

/// An `<a>` element as found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// Concatenated text of the element and its descendants, untrimmed.
    pub text: String,

    /// Raw `href` attribute.
    pub href: Option<String>,
}

/// Parse an HTML string. Never fails; malformed markup is repaired the way
/// browsers do.
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Text content of a selection and all of its descendants.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Trimmed text of the first `<title>` element.
///
/// `None` only when the document has no `<title>` at all; an empty element
/// yields `Some("")`.
#[must_use]
pub fn title(doc: &Document) -> Option<String> {
    let titles = doc.select("title");
    let node = titles.nodes().first()?;
    let sel = Selection::from(*node);
    Some(text_content(&sel).trim().to_string())
}

/// The first `limit` `<a>` elements in document order.
#[must_use]
pub fn anchors(doc: &Document, limit: usize) -> Vec<Anchor> {
    doc.select("a")
        .nodes()
        .iter()
        .take(limit)
        .map(|node| {
            let a = Selection::from(*node);
            Anchor {
                text: text_content(&a).to_string(),
                href: a.attr("href").map(|s| s.to_string()),
            }
        })
        .collect()
}
