//! Diagnostics on stderr
//!
//! stdout carries the merged records, so log output always goes to stderr.

use std::io::IsTerminal;

use tracing::Level;

/// Install the global subscriber.
///
/// Only warnings are shown unless `verbose` is set. A second call reports
/// the failure and leaves the first subscriber in place.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let result = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to set logger: {e:?}");
    }
}
