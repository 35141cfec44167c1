//! Error types and handling for squish
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//! Merging itself cannot fail; every variant here comes from the command
//! line or from the input/output streams around it.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for squish operations
#[derive(Error, Diagnostic, Debug)]
pub enum SquishError {
    // Configuration errors
    #[error("delimiter must be a single byte, got '{value}'")]
    #[diagnostic(
        code(squish::config::invalid_delimiter),
        help("Pass exactly one byte, e.g. -d ',' or one of the escapes \\0 \\t \\n \\r \\\\")
    )]
    InvalidDelimiter { value: String },

    #[error("terminator must be a single byte, got '{value}'")]
    #[diagnostic(
        code(squish::config::invalid_terminator),
        help("Pass exactly one byte, e.g. -t ';' or one of the escapes \\0 \\t \\n \\r \\\\")
    )]
    InvalidTerminator { value: String },

    #[error("{path} is both the input and the output")]
    #[diagnostic(
        code(squish::config::same_input_output),
        help("Write to a different file, then move it over the input")
    )]
    SameInputOutput { path: String },

    // Stream errors
    #[error("Could not open input file {path} for reading: {reason}")]
    #[diagnostic(code(squish::fs::input_open_failed))]
    InputOpenFailed { path: String, reason: String },

    #[error("Could not open output file {path} for writing: {reason}")]
    #[diagnostic(code(squish::fs::output_open_failed))]
    OutputOpenFailed { path: String, reason: String },

    #[error("Failed to read {source_name}: {reason}")]
    #[diagnostic(code(squish::io::read_failed))]
    ReadFailed { source_name: String, reason: String },

    #[error("Failed to write {sink_name}: {reason}")]
    #[diagnostic(code(squish::io::write_failed))]
    WriteFailed { sink_name: String, reason: String },

    #[error("{sink_name} was closed before all output was written")]
    #[diagnostic(code(squish::io::output_closed))]
    OutputClosed { sink_name: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(squish::io::error))]
    IoError { message: String },
}

impl From<std::io::Error> for SquishError {
    fn from(err: std::io::Error) -> Self {
        SquishError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SquishError>;
