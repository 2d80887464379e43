use tracing::{subscriber, Level};
use tracing_subscriber::{
    filter::{Builder, ParseError},
    EnvFilter, FmtSubscriber,
};

fn builder(default_level: Level) -> Builder {
    EnvFilter::builder().with_default_directive(default_level.into())
}

/// Filter from a `RUST_LOG`-style spec on top of `default_level`.
///
/// An unparsable spec falls back to `default_level` alone; the parse error is
/// handed back so the caller can report it.
#[must_use]
pub fn filter(default_level: Level, spec: Option<&str>) -> (EnvFilter, Option<ParseError>) {
    match builder(default_level).parse(spec.unwrap_or_default()) {
        Ok(filter) => (filter, None),
        Err(err) => (builder(default_level).parse_lossy(""), Some(err)),
    }
}

/// Install the global subscriber.
///
/// Diagnostics go to stderr so stdout carries only the report. A subscriber
/// is always installed, even when `RUST_LOG` is invalid; that error is
/// returned for the caller to print. If a subscriber is already installed
/// this leaves it in place.
pub fn init(default_level: Level) -> Option<ParseError> {
    let spec = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (env_filter, parse_error) = filter(default_level, spec.as_deref());

    let s = FmtSubscriber::builder()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false)
        .with_file(false)
        .compact()
        .with_env_filter(env_filter)
        .finish();

    if subscriber::set_global_default(s).is_err() {
        tracing::debug!("global subscriber already set");
    }
    parse_error
}
