//! squish - merge adjacent records that share a key
//!
//! A streaming filter in the spirit of `uniq`: records (lines by default)
//! are compared on their leading key rather than as a whole, and each run of
//! adjacent records with the same key becomes a single record.
//!
//! ```
//! assert_eq!(
//!     squish::merge(b"tags rust\ntags cli\nowner me", b' ', b'\n'),
//!     b"tags rust cli\nowner me"
//! );
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod io;
pub mod logging;
pub mod merge;

pub use error::{Result, SquishError};
pub use merge::{DEFAULT_DELIMITER, DEFAULT_TERMINATOR, Merger, Squisher, Stats, merge};
