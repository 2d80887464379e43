//! Fetches the compiled-in page once and prints what it found, then waits
//! for Enter so a double-clicked console window stays open.
//!
//! Always exits with status 0, even when the probe fails.

use std::io;

use site_probe::{logging, run_http, Options};
use tracing::{error, Level};

fn main() {
    if let Some(err) = logging::init(Level::WARN) {
        eprintln!("Ignoring invalid RUST_LOG filter: {err}");
    }

    let options = Options::default();
    if let Err(err) = run_http(&options, &mut io::stdout().lock(), &mut io::stdin().lock()) {
        error!(error = %err, "console I/O failed");
    }
}
