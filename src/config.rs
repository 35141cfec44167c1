//! Runtime settings resolved from the command line
//!
//! There is no configuration file and no environment lookup: every setting
//! comes from a flag, falling back to the defaults of [`Settings::default`].

use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::PathBuf;

use crate::cli::Cli;
use crate::error::SquishError;
use crate::merge::{DEFAULT_DELIMITER, DEFAULT_TERMINATOR};

/// Everything one run of the filter needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Byte ending the key of a record
    pub delimiter: u8,
    /// Byte ending a record
    pub terminator: u8,
    /// File to read, `None` for stdin
    pub input: Option<PathBuf>,
    /// File to write, `None` for stdout
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            terminator: DEFAULT_TERMINATOR,
            input: None,
            output: None,
        }
    }
}

impl TryFrom<&Cli> for Settings {
    type Error = SquishError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        let mut settings = Settings::default();

        if let Some(value) = cli.delimiter.as_deref() {
            settings.delimiter =
                parse_byte(value).ok_or_else(|| SquishError::InvalidDelimiter {
                    value: value.to_string_lossy().into_owned(),
                })?;
        }

        if let Some(value) = cli.terminator.as_deref() {
            settings.terminator =
                parse_byte(value).ok_or_else(|| SquishError::InvalidTerminator {
                    value: value.to_string_lossy().into_owned(),
                })?;
        }

        settings.input = cli.input.clone().filter(|path| !is_stdio(path));
        settings.output = cli.output.clone().filter(|path| !is_stdio(path));

        Ok(settings)
    }
}

/// Interpret a command line value as a single byte.
///
/// A value of exactly one byte stands for itself. The escapes `\0`, `\t`,
/// `\n`, `\r` and `\\` stand for the byte they name. Anything else is
/// rejected.
///
/// # Examples
/// ```
/// use std::ffi::OsStr;
/// use squish::config::parse_byte;
///
/// assert_eq!(parse_byte(OsStr::new(",")), Some(b','));
/// assert_eq!(parse_byte(OsStr::new("\\0")), Some(0));
/// assert_eq!(parse_byte(OsStr::new("ab")), None);
/// ```
pub fn parse_byte(value: &OsStr) -> Option<u8> {
    match os_bytes(value).as_ref() {
        [byte] => Some(*byte),
        [b'\\', b'0'] => Some(b'\0'),
        [b'\\', b't'] => Some(b'\t'),
        [b'\\', b'n'] => Some(b'\n'),
        [b'\\', b'r'] => Some(b'\r'),
        [b'\\', b'\\'] => Some(b'\\'),
        _ => None,
    }
}

/// `-` names stdin or stdout
fn is_stdio(path: &std::path::Path) -> bool {
    path.as_os_str() == "-"
}

#[cfg(unix)]
fn os_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(value.as_bytes())
}

#[cfg(not(unix))]
fn os_bytes(value: &OsStr) -> Cow<'_, [u8]> {
    match value.to_str() {
        Some(s) => Cow::Borrowed(s.as_bytes()),
        None => Cow::Owned(value.to_string_lossy().into_owned().into_bytes()),
    }
}
