//! The filter itself: read, merge, write

use std::io::{self, Read, Write};

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::{Result, SquishError};
use crate::io::{display_name, is_same_file, open_input, open_output};
use crate::merge::{Squisher, Stats};

/// Size of each read from the input
const CHUNK_SIZE: usize = 64 * 1024;

/// Run the filter described by `settings`
pub fn run(settings: &Settings) -> Result<Stats> {
    let source_name = display_name(settings.input.as_deref(), "<stdin>");
    let sink_name = display_name(settings.output.as_deref(), "<stdout>");
    debug!(
        delimiter = %escape(settings.delimiter),
        terminator = %escape(settings.terminator),
        input = %source_name,
        output = %sink_name,
        "squishing"
    );

    if let (Some(input), Some(output)) = (&settings.input, &settings.output) {
        if is_same_file(input, output) {
            return Err(SquishError::SameInputOutput {
                path: input.display().to_string(),
            });
        }
    }

    let rdr = open_input(settings.input.as_deref())?;
    let wtr = open_output(settings.output.as_deref())?;
    let stats = squish_stream(
        rdr,
        wtr,
        settings.delimiter,
        settings.terminator,
        &source_name,
        &sink_name,
    )?;

    info!(
        records_in = stats.records_in,
        records_out = stats.records_out,
        records_merged = stats.records_merged(),
        bytes_in = stats.bytes_in,
        bytes_out = stats.bytes_out,
        "done"
    );
    Ok(stats)
}

/// Merge everything `rdr` yields into `wtr`, chunk by chunk.
///
/// A broken pipe on `wtr` is reported as [`SquishError::OutputClosed`].
pub fn squish_stream<R: Read, W: Write>(
    mut rdr: R,
    wtr: W,
    delimiter: u8,
    terminator: u8,
    source_name: &str,
    sink_name: &str,
) -> Result<Stats> {
    let write_failed = |e: io::Error| {
        if e.kind() == io::ErrorKind::BrokenPipe {
            SquishError::OutputClosed {
                sink_name: sink_name.to_string(),
            }
        } else {
            SquishError::WriteFailed {
                sink_name: sink_name.to_string(),
                reason: e.to_string(),
            }
        }
    };

    let mut squisher = Squisher::new(wtr, delimiter, terminator);
    let mut chunk = vec![0; CHUNK_SIZE];
    loop {
        let n = match rdr.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(SquishError::ReadFailed {
                    source_name: source_name.to_string(),
                    reason: e.to_string(),
                });
            }
        };
        squisher.write_all(&chunk[..n]).map_err(write_failed)?;
    }
    squisher.finish().map_err(write_failed)
}

/// Printable form of a separator byte
fn escape(byte: u8) -> String {
    std::ascii::escape_default(byte).to_string()
}
