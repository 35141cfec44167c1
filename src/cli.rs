//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::ffi::OsString;
use std::path::PathBuf;

/// squish - merge adjacent records sharing a key
///
/// Like `uniq`, but records are compared on their leading key only.
#[derive(Parser, Debug)]
#[command(
    name = "squish",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge adjacent records that share a leading key",
    long_about = "Reads records separated by the terminator byte and merges every run of \
                  adjacent records with the same key into one. The key of a record is \
                  everything before its first delimiter byte. A merged record keeps the \
                  first record whole and appends the rest of each following record, \
                  starting at its delimiter.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  printf 'a 1\\na 2\\nb 3\\n' | squish    \x1b[90m# a 1 2 / b 3\x1b[0m\n   \
                  squish -d , data.csv -o merged.csv    \x1b[90m# Key on the first CSV column\x1b[0m\n   \
                  find . -print0 | squish -d / -t '\\0'  \x1b[90m# NUL terminated records\x1b[0m\n"
)]
pub struct Cli {
    /// Input file (defaults to stdin, '-' also reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Byte that marks the end of the key (defaults to ' ')
    #[arg(long, short = 'd', value_name = "BYTE", allow_hyphen_values = true)]
    pub delimiter: Option<OsString>,

    /// Byte that ends a record (defaults to '\n')
    #[arg(long, short = 't', value_name = "BYTE", allow_hyphen_values = true)]
    pub terminator: Option<OsString>,

    /// File to write output to (defaults to stdout, '-' also writes stdout)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Enable verbose output on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print a completion script for the given shell and exit
    #[arg(long, value_name = "SHELL", value_enum, exclusive = true)]
    pub completions: Option<clap_complete::Shell>,
}
