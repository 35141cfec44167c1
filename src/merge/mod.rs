//! Keyed merging of adjacent records
//!
//! Input is split into records on a terminator byte. The key of a record is
//! everything before its first delimiter byte (or the whole record when it
//! has none). Adjacent records with equal keys are collapsed into one: the
//! first record is kept whole and every following record of the run only
//! contributes its remainder, i.e. the bytes from its delimiter onward.
//!
//! ```text
//! a 1          a 1 2 3
//! a 2    ->    b 4
//! a 3
//! b 4
//! ```
//!
//! The same fold is available in three shapes:
//! - [`merge`]: whole buffer in, whole buffer out
//! - [`Merger`]: push arbitrary chunks, collect the decided output bytes
//! - [`Squisher`]: an [`std::io::Write`] adapter in front of another writer

mod merger;
mod squisher;


pub use merger::{Merger, Stats};
pub use squisher::Squisher;

/// Delimiter used when none is configured
pub const DEFAULT_DELIMITER: u8 = b' ';

/// Terminator used when none is configured
pub const DEFAULT_TERMINATOR: u8 = b'\n';

/// Merge adjacent records of `input` that share a key.
///
/// Empty input yields empty output. Every byte sequence and every pair of
/// delimiter/terminator bytes is valid input; when both bytes are equal the
/// terminator wins, so each record is its own key.
///
/// # Examples
/// ```
/// use squish::merge;
/// assert_eq!(merge(b"a 1\na 2\nb 3", b' ', b'\n'), b"a 1 2\nb 3");
/// assert_eq!(merge(b"0\n0\n", b' ', b'\n'), b"0\n");
/// assert_eq!(merge(b"", b' ', b'\n'), b"");
/// ```
pub fn merge(input: &[u8], delimiter: u8, terminator: u8) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut merger = Merger::new(delimiter, terminator);
    merger.push(input, &mut out);
    merger.finish(&mut out);
    out
}
