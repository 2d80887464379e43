//! # site-probe
//!
//! A one-shot smoke test for a website: fetch one page, print its status,
//! its title and the text of its first few links.
//!
//! The work is a fixed pipeline of stages, each feeding the next:
//!
//! 1. **request** - one GET with a browser-like user agent and a timeout
//! 2. **status check** - only a 200 response is parsed
//! 3. **decode** - body bytes to UTF-8 using the declared charset
//! 4. **parse / extract** - first `<title>` and the leading `<a>` elements
//! 5. **report** - human-readable console lines
//!
//! Any failure in stages 1-4 is returned as a single [`Error`] and printed as
//! one line; nothing is retried.
//!
//! ## Quick Start
//!
//! ```rust
//! use site_probe::{summarize, Options};
//! use url::Url;
//!
//! let html = r#"<html><head><title> Tools </title></head>
//! <body><a href="/a">First link</a><a href="/b">  </a><a href="/c">Third</a></body></html>"#;
//! let base = Url::parse("https://example.com/")?;
//!
//! let summary = summarize(html, &base, &Options::default());
//! assert_eq!(summary.title.as_deref(), Some("Tools"));
//! assert_eq!(summary.links.len(), 2);
//! assert_eq!(summary.links[1].index, 3);
//! # Ok::<(), url::ParseError>(())
//! ```

mod error;
mod options;

/// Outbound request stage.
pub mod fetch;

/// Response body charset detection and decoding.
pub mod encoding;

/// DOM queries over the parsed page.
pub mod dom;

/// Text trimming and truncation for display.
pub mod text;

/// Link target resolution.
pub mod url_utils;

/// Results and console rendering.
pub mod report;

/// Diagnostic logging setup for the binary.
pub mod logging;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use url::Url;

pub use error::{describe, Error, Result};
pub use fetch::{Fetcher, HttpFetcher, Response};
pub use options::Options;
pub use report::{Console, Link, Report, Summary};

/// Status code that is treated as a parsable page.
const OK_STATUS: u16 = 200;

/// Extract the title and link lines from an HTML document.
///
/// `base` is the URL the document was served from; it is only used to
/// resolve link targets.
#[must_use]
pub fn summarize(html: &str, base: &Url, options: &Options) -> Summary {
    let doc = dom::parse(html);
    let title = dom::title(&doc);

    let links = dom::anchors(&doc, options.max_links)
        .into_iter()
        .enumerate()
        .filter_map(|(i, anchor)| {
            let text = text::display_text(&anchor.text, options.max_link_chars);
            if text.is_empty() {
                return None;
            }
            let href = anchor
                .href
                .as_deref()
                .and_then(|href| url_utils::resolve_href(href, base));
            debug!(index = i + 1, text = %text, href = ?href.as_ref().map(Url::as_str), "link");
            Some(Link {
                index: i + 1,
                text,
                href,
            })
        })
        .collect();

    Summary { title, links }
}

/// Run the pipeline against a caller-supplied fetcher.
pub fn probe_with(fetcher: &impl Fetcher, options: &Options) -> Result<Report> {
    let target = url_utils::parse_target(&options.url)?;
    let response = fetcher.get(&target)?;
    info!(status = response.status, url = %response.url, "connected");

    if response.status != OK_STATUS {
        return Ok(Report {
            status: response.status,
            summary: None,
        });
    }

    let html = encoding::decode_body(&response.body, response.content_type.as_deref());
    let summary = summarize(&html, &response.url, options);
    info!(
        title = summary.title.is_some(),
        links = summary.links.len(),
        "page summarized"
    );

    Ok(Report {
        status: response.status,
        summary: Some(summary),
    })
}

/// Run the pipeline over HTTP with a client built from `options`.
pub fn probe(options: &Options) -> Result<Report> {
    let fetcher = HttpFetcher::new(options)?;
    probe_with(&fetcher, options)
}

/// Full console session: banners, one probe, its report or error line, and
/// the final wait for Enter.
///
/// Probe failures are printed, not returned. Only console I/O errors are.
pub fn run(
    fetcher: &impl Fetcher,
    options: &Options,
    out: &mut impl Write,
    input: &mut impl BufRead,
) -> io::Result<()> {
    session(options, out, input, || probe_with(fetcher, options))
}

/// [`run`] over HTTP. Failing to build the client is reported like any other
/// probe failure.
pub fn run_http(options: &Options, out: &mut impl Write, input: &mut impl BufRead) -> io::Result<()> {
    session(options, out, input, || probe(options))
}

fn session(
    options: &Options,
    out: &mut impl Write,
    input: &mut impl BufRead,
    probe: impl FnOnce() -> Result<Report>,
) -> io::Result<()> {
    let mut console = Console::new(out);
    console.banner()?;
    console.connecting(&options.url)?;

    match probe() {
        Ok(report) => console.report(&report, options.max_links)?,
        Err(err) => {
            debug!(error = %describe(&err), "probe failed");
            console.error(&err)?;
        }
    }

    console.wait_for_enter(input)
}
