use std::fmt;

/// Position of the merger within the record currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading the key of the first record of a run. Bytes are written out
    /// and appended to the run key.
    Key,
    /// At the start of a record whose first `matched` bytes agree with the
    /// run key. None of its bytes have been written yet.
    Matching { matched: usize },
    /// Past the key of the current record. Bytes are written out as is.
    Remainder,
}

/// Counters describing one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    /// Bytes consumed
    pub bytes_in: u64,
    /// Bytes produced
    pub bytes_out: u64,
    /// Records read, i.e. terminators seen plus one (zero for empty input)
    pub records_in: u64,
    /// Records written, one per run
    pub records_out: u64,
}

impl Stats {
    /// Number of input records that were folded into a previous one
    pub fn records_merged(&self) -> u64 {
        self.records_in.saturating_sub(self.records_out)
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records in, {} records out ({} merged), {} bytes in, {} bytes out",
            self.records_in,
            self.records_out,
            self.records_merged(),
            self.bytes_in,
            self.bytes_out
        )
    }
}

/// Incremental form of [`merge`](super::merge).
///
/// Input may be pushed in chunks of any size; the output is the same as
/// merging the concatenated chunks in one go. The only state kept between
/// chunks is the key of the current run, so memory does not grow with the
/// length of the input.
///
/// # Examples
/// ```
/// use squish::Merger;
///
/// let mut out = Vec::new();
/// let mut merger = Merger::new(b' ', b'\n');
/// merger.push(b"user alice\nus", &mut out);
/// merger.push(b"er bob\ngroup staff", &mut out);
/// let stats = merger.finish(&mut out);
///
/// assert_eq!(out, b"user alice bob\ngroup staff");
/// assert_eq!(stats.records_merged(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Merger {
    delimiter: u8,
    terminator: u8,
    key: Vec<u8>,
    state: State,
    bytes_in: u64,
    bytes_out: u64,
    terminators: u64,
    flushes: u64,
}

impl Merger {
    /// Create a merger splitting records on `terminator` and keys on
    /// `delimiter`.
    pub fn new(delimiter: u8, terminator: u8) -> Self {
        Self {
            delimiter,
            terminator,
            key: Vec::new(),
            state: State::Key,
            bytes_in: 0,
            bytes_out: 0,
            terminators: 0,
            flushes: 0,
        }
    }

    /// Byte ending the key of a record
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Byte ending a record
    pub fn terminator(&self) -> u8 {
        self.terminator
    }

    /// Key of the run currently being merged
    pub fn current_key(&self) -> &[u8] {
        &self.key
    }

    /// Counters for everything pushed so far.
    ///
    /// Bytes held back while matching a key are not yet counted as output.
    pub fn stats(&self) -> Stats {
        let started = self.bytes_in > 0;
        Stats {
            bytes_in: self.bytes_in,
            bytes_out: self.bytes_out,
            records_in: if started { self.terminators + 1 } else { 0 },
            records_out: if started { self.flushes + 1 } else { 0 },
        }
    }

    /// Consume `input` and append every output byte that is already decided
    /// to `out`.
    pub fn push(&mut self, mut input: &[u8], out: &mut Vec<u8>) {
        let start = out.len();
        self.bytes_in += input.len() as u64;
        while !input.is_empty() {
            let consumed = match self.state {
                State::Key => self.push_key(input, out),
                State::Matching { matched } => self.push_matching(matched, input, out),
                State::Remainder => self.push_remainder(input, out),
            };
            input = &input[consumed..];
        }
        self.bytes_out += (out.len() - start) as u64;
    }

    /// Flush the last record and return the final counters.
    pub fn finish(mut self, out: &mut Vec<u8>) -> Stats {
        let start = out.len();
        if let State::Matching { matched } = self.state {
            self.close_key(matched, out);
        }
        self.bytes_out += (out.len() - start) as u64;
        self.stats()
    }

    fn push_key(&mut self, input: &[u8], out: &mut Vec<u8>) -> usize {
        let (delimiter, terminator) = (self.delimiter, self.terminator);
        let Some(end) = input
            .iter()
            .position(|&b| b == terminator || b == delimiter)
        else {
            self.key.extend_from_slice(input);
            out.extend_from_slice(input);
            return input.len();
        };

        self.key.extend_from_slice(&input[..end]);
        out.extend_from_slice(&input[..end]);
        if input[end] == terminator {
            self.end_record();
        } else {
            out.push(delimiter);
            self.state = State::Remainder;
        }
        end + 1
    }

    fn push_remainder(&mut self, input: &[u8], out: &mut Vec<u8>) -> usize {
        let terminator = self.terminator;
        match input.iter().position(|&b| b == terminator) {
            Some(end) => {
                out.extend_from_slice(&input[..end]);
                self.end_record();
                end + 1
            }
            None => {
                out.extend_from_slice(input);
                input.len()
            }
        }
    }

    fn push_matching(&mut self, mut matched: usize, input: &[u8], out: &mut Vec<u8>) -> usize {
        for (i, &b) in input.iter().enumerate() {
            if b == self.terminator {
                self.close_key(matched, out);
                self.end_record();
                return i + 1;
            }
            if b == self.delimiter {
                self.close_key(matched, out);
                out.push(b);
                self.state = State::Remainder;
                return i + 1;
            }
            if self.key.get(matched) == Some(&b) {
                matched += 1;
                continue;
            }
            // Diverged from the run key (or ran past its end).
            self.start_run(matched, out);
            self.key.push(b);
            out.push(b);
            self.state = State::Key;
            return i + 1;
        }
        self.state = State::Matching { matched };
        input.len()
    }

    fn end_record(&mut self) {
        self.terminators += 1;
        self.state = State::Matching { matched: 0 };
    }

    /// The key of the record being matched ended after `matched` bytes.
    fn close_key(&mut self, matched: usize, out: &mut Vec<u8>) {
        if matched != self.key.len() {
            self.start_run(matched, out);
        }
    }

    /// Emit the held back prefix as the start of a new run.
    fn start_run(&mut self, matched: usize, out: &mut Vec<u8>) {
        self.key.truncate(matched);
        out.push(self.terminator);
        out.extend_from_slice(&self.key);
        self.flushes += 1;
    }
}
