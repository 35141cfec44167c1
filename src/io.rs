//! Opening the input source and output sink

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::error::{Result, SquishError};

pub type Reader = Box<dyn io::Read + Send + 'static>;
pub type Writer = BufWriter<Box<dyn io::Write + Send + 'static>>;

/// Open `path` for reading, or stdin when there is none.
pub fn open_input(path: Option<&Path>) -> Result<Reader> {
    Ok(match path {
        None => Box::new(io::stdin()),
        Some(path) => Box::new(File::open(path).map_err(|e| SquishError::InputOpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?),
    })
}

/// Open `path` for writing, or stdout when there is none.
///
/// Existing files are truncated.
pub fn open_output(path: Option<&Path>) -> Result<Writer> {
    let wtr: Box<dyn io::Write + Send + 'static> = match path {
        None => Box::new(io::stdout()),
        Some(path) => Box::new(File::create(path).map_err(|e| SquishError::OutputOpenFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?),
    };
    Ok(BufWriter::new(wtr))
}

/// Whether `input` and `output` name the same existing file.
///
/// Symlinks and relative spellings are resolved. On Unix, hard links to one
/// file also count as the same file. An output that does not exist yet can
/// never be the input.
pub fn is_same_file(input: &Path, output: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let (Ok(a), Ok(b)) = (std::fs::metadata(input), std::fs::metadata(output)) {
            return a.dev() == b.dev() && a.ino() == b.ino();
        }
    }
    match (input.canonicalize(), output.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Name of a stream for messages
pub fn display_name(path: Option<&Path>, stdio: &str) -> String {
    path.map_or_else(|| stdio.to_string(), |path| path.display().to_string())
}
