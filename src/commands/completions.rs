//! Shell completions

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;
use crate::error::Result;

/// Write the completion script for `shell` to `wtr`
pub fn run<W: Write>(shell: Shell, wtr: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "squish", wtr);
    wtr.flush()?;
    Ok(())
}
