//! Error types for site-probe.
//!
//! Every variant ends up as one printed `Error:` line; the distinction only
//! matters for logging and tests. Variants that wrap another error leave the
//! wrapped message to [`describe`], which walks the `source()` chain.

/// Error type for probe operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured URL could not be parsed.
    #[error("invalid URL")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured URL parsed but is not http or https.
    #[error("unsupported URL scheme `{0}`, expected http or https")]
    UnsupportedScheme(String),

    /// The configured user agent is not a valid header value.
    #[error("invalid header value: {0}")]
    InvalidHeader(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Connecting, sending, waiting or reading the body failed.
    #[error("request failed")]
    Request(#[source] reqwest::Error),
}

/// Result type alias for probe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// One-line description of `err` and every error in its `source()` chain,
/// joined by `": "`.
///
/// A source whose message already appears in the line is skipped, so
/// wrappers that repeat their cause do not print it twice.
#[must_use]
pub fn describe(err: &dyn std::error::Error) -> String {
    let mut line = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let message = cause.to_string();
        if !message.is_empty() && !line.contains(&message) {
            line.push_str(": ");
            line.push_str(&message);
        }
        source = cause.source();
    }
    line
}
