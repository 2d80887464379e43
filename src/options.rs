//! Configuration for a probe run.
//!
//! The binary always runs with `Options::default()`, which carries the
//! compiled-in target. Tests and library callers override individual
//! fields with struct update syntax.

use std::time::Duration;

/// Page fetched when no other URL is configured.
pub const DEFAULT_URL: &str = "https://topai.tools";

/// Browser-like user agent sent with the request.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Upper bound on the whole request, connect through body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Number of leading `<a>` elements considered for the link listing.
pub const DEFAULT_MAX_LINKS: usize = 5;

/// Link text is cut to this many characters for display.
pub const DEFAULT_MAX_LINK_CHARS: usize = 40;

/// Configuration options for a probe run.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use site_probe::Options;
///
/// let options = Options {
///     url: "http://127.0.0.1:8080/".to_string(),
///     timeout: Duration::from_secs(2),
///     ..Options::default()
/// };
/// assert_eq!(options.max_links, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Absolute URL of the page to fetch.
    ///
    /// Default: [`DEFAULT_URL`]
    pub url: String,

    /// Value of the `User-Agent` request header.
    ///
    /// Default: [`DEFAULT_USER_AGENT`]
    pub user_agent: String,

    /// Total request timeout.
    ///
    /// Default: 15 seconds
    pub timeout: Duration,

    /// How many leading anchors to look at.
    ///
    /// Anchors whose trimmed text is empty still count toward this limit;
    /// they are just not printed.
    ///
    /// Default: `5`
    pub max_links: usize,

    /// Maximum characters of link text shown per line.
    ///
    /// Default: `40`
    pub max_link_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_links: DEFAULT_MAX_LINKS,
            max_link_chars: DEFAULT_MAX_LINK_CHARS,
        }
    }
}
