//! Probe results and their console rendering.
//!
//! The pipeline produces a [`Report`] (or one error); [`Console`] turns it
//! into the human-readable lines. Rendering is kept apart from fetching so
//! the same report always prints the same bytes.

use std::io::{self, BufRead, Write};

use url::Url;

use crate::error::describe;

/// A link line candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// 1-based position among the leading anchors that were examined.
    ///
    /// Anchors with empty text are skipped but still occupy their position,
    /// so indices can have gaps.
    pub index: usize,

    /// Trimmed, truncated, non-empty display text.
    pub text: String,

    /// Absolute link target, when the `href` resolves to a document.
    pub href: Option<Url>,
}

/// What was extracted from a 200 response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    /// Trimmed text of the first `<title>`, if the element exists.
    pub title: Option<String>,

    /// Links with non-empty display text, in document order.
    pub links: Vec<Link>,
}

/// Outcome of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// HTTP status code.
    pub status: u16,

    /// Present only when `status` is 200.
    pub summary: Option<Summary>,
}

const BANNER: &str = "Quick site crawl test";
const RULE_WIDTH: usize = 30;
const COMPLETE: &str = "Crawl test complete!";
const EXIT_PROMPT: &str = "Press Enter to exit...";

/// Writes probe output to a console-like sink.
pub struct Console<W> {
    out: W,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Opening banner and underline.
    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    pub fn connecting(&mut self, url: &str) -> io::Result<()> {
        writeln!(self.out, "Connecting to {url}...")
    }

    /// Status line, then title and links when the page was parsed, then the
    /// completion line.
    pub fn report(&mut self, report: &Report, max_links: usize) -> io::Result<()> {
        writeln!(self.out, "Connected: {}", report.status)?;

        if let Some(summary) = &report.summary {
            if let Some(title) = &summary.title {
                writeln!(self.out, "Page title: {title}")?;
            }
            writeln!(self.out, "Top {max_links} links:")?;
            for link in &summary.links {
                writeln!(self.out, "   {}. {}", link.index, link.text)?;
            }
        }

        writeln!(self.out, "{COMPLETE}")
    }

    /// The single diagnostic line for any failure.
    ///
    /// Carries the whole `source()` chain so the cause (refused, timed out,
    /// DNS) is visible.
    pub fn error(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        writeln!(self.out, "Error: {}", describe(err))
    }

    /// Print the exit prompt and block until one line (or EOF) is read.
    pub fn wait_for_enter(&mut self, input: &mut impl BufRead) -> io::Result<()> {
        write!(self.out, "{EXIT_PROMPT}")?;
        self.out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
