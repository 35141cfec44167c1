//! Command implementations for the squish CLI

pub mod completions;
pub mod filter;

use tracing::debug;

use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{Result, SquishError};

/// Run whatever the command line asks for.
///
/// A reader that stops consuming the output early, as `head` does, ends the
/// run without an error.
pub fn run(cli: &Cli) -> Result<()> {
    if let Some(shell) = cli.completions {
        return completions::run(shell, &mut std::io::stdout().lock());
    }

    let settings = Settings::try_from(cli)?;
    match filter::run(&settings) {
        Err(SquishError::OutputClosed { sink_name }) => {
            debug!(output = %sink_name, "output closed, stopping");
            Ok(())
        }
        result => result.map(|_| ()),
    }
}
