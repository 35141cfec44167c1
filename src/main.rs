//! squish - merge adjacent records that share a key
//!
//! Reads records from stdin or a file and writes every run of records with
//! the same leading key as a single record.

use clap::Parser;
use miette::Diagnostic;

use squish::cli::Cli;
use squish::{commands, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::run(&cli) {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("Help: {}", help);
        }
        std::process::exit(1);
    }
}
