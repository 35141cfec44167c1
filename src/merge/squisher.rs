use std::io;

use super::{Merger, Stats};

/// Merges everything written to it and forwards the result to `W`.
///
/// Each call to `write` pushes the chunk through a [`Merger`] and writes the
/// bytes it produced to the wrapped writer. The last record can only be
/// decided once the input is complete, so callers must end with
/// [`finish`](Squisher::finish) or [`into_inner`](Squisher::into_inner);
/// dropping a squisher loses whatever was still held back.
///
/// An I/O error leaves the merger ahead of the wrapped writer. The squisher
/// should be discarded after one.
///
/// # Examples
/// ```
/// use std::io::Write;
/// use squish::Squisher;
///
/// let mut squisher = Squisher::new(Vec::new(), b',', b'\n');
/// squisher.write_all(b"k,1\nk,2\nj,3\n")?;
/// let out = squisher.into_inner()?;
/// assert_eq!(out, b"k,1,2\nj,3\n");
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Squisher<W> {
    wtr: W,
    merger: Merger,
    buf: Vec<u8>,
}

impl<W: io::Write> Squisher<W> {
    /// Wrap `wtr`, merging records on `delimiter` and `terminator`.
    pub fn new(wtr: W, delimiter: u8, terminator: u8) -> Self {
        Self {
            wtr,
            merger: Merger::new(delimiter, terminator),
            buf: Vec::new(),
        }
    }

    /// Counters for everything written so far
    pub fn stats(&self) -> Stats {
        self.merger.stats()
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.wtr
    }

    /// Flush the final record and the underlying writer.
    pub fn finish(self) -> io::Result<Stats> {
        self.close().map(|(_, stats)| stats)
    }

    /// Flush the final record and return the underlying writer.
    pub fn into_inner(self) -> io::Result<W> {
        self.close().map(|(wtr, _)| wtr)
    }

    fn close(self) -> io::Result<(W, Stats)> {
        let Self {
            mut wtr,
            merger,
            mut buf,
        } = self;
        buf.clear();
        let stats = merger.finish(&mut buf);
        wtr.write_all(&buf)?;
        wtr.flush()?;
        Ok((wtr, stats))
    }
}

impl<W: io::Write> io::Write for Squisher<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.merger.push(data, &mut self.buf);
        let written = self.wtr.write_all(&self.buf);
        self.buf.clear();
        written.map(|()| data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.wtr.flush()
    }
}
