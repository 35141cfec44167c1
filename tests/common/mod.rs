//! Common test utilities for squish integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Straightforward split-then-fold merge used as the oracle.
///
/// Splits the whole input on `terminator`, then folds adjacent records with
/// equal keys by appending the later record's bytes after its key.
pub fn reference_merge(input: &[u8], delimiter: u8, terminator: u8) -> Vec<u8> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut records = input.split(|&b| b == terminator);
    let first = records.next().unwrap_or_default();
    let mut current_key = key_of(first, delimiter);
    let mut results = vec![first.to_vec()];
    for record in records {
        let key = key_of(record, delimiter);
        if key == current_key {
            results
                .last_mut()
                .unwrap()
                .extend_from_slice(&record[key.len()..]);
        } else {
            results.push(record.to_vec());
            current_key = key;
        }
    }
    results.join(&terminator)
}

/// Key of `record`: everything before the first delimiter
pub fn key_of(record: &[u8], delimiter: u8) -> &[u8] {
    match record.iter().position(|&b| b == delimiter) {
        Some(i) => &record[..i],
        None => record,
    }
}

/// A scratch directory for tests that read or write files
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace and return its path
    pub fn write_file(&self, name: &str, content: &[u8]) -> PathBuf {
        let file_path = self.path.join(name);
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path.join(name)).expect("Failed to read file")
    }
}

/// Literal input/output pairs for the default delimiter and terminator
pub const STANDARD_EXAMPLES: &[(&[u8], &[u8])] = &[
    (b"", b""),
    (b"\n", b""),
    (b"0\n0", b"0"),
    (b"0\n0\n", b"0\n"),
    (b"0\n0\n1", b"0\n1"),
    (b"\n0\n0\n1", b"\n0\n1"),
    (b"\n0\n", b"\n0\n"),
    (b"\n0 ", b"\n0 "),
    (b"\n0\n \n0", b"\n0\n \n0"),
    (b"\n0\n0", b"\n0"),
];

/// Inputs found by fuzzing an earlier implementation
pub const FUZZ_CORPUS: &[&[u8]] = &[
    b"\n0",
    b"\n0\n \n0000\n\n0\n \n\n0\n0\n\x15\n\n0\n \n0\n\n0\n \n0\n \n\n0\n0\n\x15\n\n0\n \n0\n\n0\n \n0000\n \n00",
    b" \n \n0",
    b"0",
    b"\n0\n1",
    b"\n\n\n\n\n0\n\n\n\n0",
    b"00000000000000000",
    b"00000000000000000000000000000000 0000000000000000000000000000000000000 00000000000000000000000000000000000000000000000000000000 00000000000000000000000000000000000",
    b"\n0\n1\n0\n1",
    b"D000\n00\n1\n00\nN00\nF\n00\n1\n00\n\x000\n000\nF\n00\n\x000\n00\n\x000\n000\nF\n00\n\x00000\n00\n1\n00\n0\x10\n1\n000000\nF\n00\n\x00000\n00\n05\n1\n10\n00",
    b"\n\n\n\n00",
    b"0000000\n10\n00000000000\n10\n      00\n00\n                            0000\n1\n1",
    b"0\n0000",
    b"015\n015\n50000000\n5010\n0",
    b"00\n+\n1\n10\n0\n1\n10\n\x000\n00\n1\n\n00\n1\n10\n00\n+\n1\n1\n\n\x00000000000000\n0",
    b"00\n \n ",
    b"00\n \n \n\n 0\n \n \n\n \n \n  ",
    b" 00",
    b"\n0\nC000000 \nC000000 0000\n\nC0\n00",
    b"00\nI0000\n000\n\n00000\n\x800 00\n0000000000\n40000 \n0+0\n00 00\n 00\n0000000\n40\n00 00000 \n400000\n4\x7f\n00 0000\n0\xff00 \n400000 \n40(000\n4\x7f\n00 00000000\n40000000\n00 00\n 000000000\n\xff\x7f0\n\xff0 00000000\n40000 \n0+0\n00 00\n 00\n00000000\n\xff00000000",
    b"0\n\n\n\n\n\n\n\n\n\n00",
    b"00\n\n\n\n\n\n0\n\n\n\n\n\n\n\n\n\n\n\xff00 00000000\n0000000\n\n\n\n\n\n\n\n\n\n\n\n0\n\n\n\n\n\n\n\n\n\n\n\xff00 000000 00000000\n0",
    b"\n0\n0\n1",
    b"000\n\n\n\n\n\n\n\n\n\n\n\n\n\n\n\n\n\n0",
    b"00\n,0000\n\n0\n 0\n\n0\n \n0\n \n\n0\n0\n\x15\n\n0\n \n0\n\n0\n\n\n0\n1\n0\n\n0\n \n0\n\n0\n \n0\n \n0\n\n0\n\n\n00\n \n0\n\n0\n\n\n0\n1\n0\n\n0\n \n0\n\n0\n \n0\n \n0\n\x15\n\n0\n \n0\n\n0\n \n0\n \n\n0\n0\n\x15\n\n0\n \n0\n\n0\n \n0000",
    b"0\n0\n",
    b"0\n\x07\n0\n\x0700\n000",
    b"00\n000\n00\n\xb101\xdc\xdc\xdc000\n\xb101\xdc\xdc\xdc\xdc\xdc0\n\xb101\xdc\xdc\xdc\xdc\xdc\xdc\xdc\xdc\xdc\xdc\n\xb101\xdc\xdc\xdc\xdc\xdc\xdc\xdc\xdc\xdc\xdc00\n00\n1\n1",
    b"0\n0\n1",
    b"000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    b"\n0\n \n0",
    b"0\n10\n0\n1",
    b"000000000000000000000000000000000000000000000000000000000000000000000000000000000000000 00000000000000000000000000000000000000000",
    b"\n00\n00",
    b"\n000\n 000 \n\n00\n \n \n \n\n 0\n \n \n\n \n \n00000\n \n \n \n\n \n\n \n\n \n\n00\n \n \n 0\n \n \n\n \n\n \n\n \n\n\n 0\n \n \n\n  \n \n 0\n \n\n 0\n \n \n\n \n\n \n  ",
    b"00 ",
    b"\n \n\n \n 0",
    b"\n\n<0\n0",
    b"0\n",
    b"00\n,000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    b"0000\n1\n000\n1\n1\n000\n1\n\x190\n00\n1\n1\n00\n1\n\x190\n00\n1\n10\n0000\n\x10\n1\n1",
    b"\n0 ",
    b"00000000 00000 00  00000000000 000 000 000000 00",
    b"\n\n00000\n 000 \n\n00\n \n \n \n\n 0\n \n \n\n \n \n 0\n00\n \n\n 0\n \n \n \n\n \n\n00\n \n \n \n\n 0\n \n \n\n  \n \n 0\n \n\n 0\n \n \n\n \n\n \n  ",
    b" 000000\n \n \n\n \n \n 0000\n 0\n \n \n\n  \n \n 0 0\n \n \n\n \n\n \n  ",
    b"\n0\n",
    b"0\n0",
    b"0 000000",
    b"00\n00\n1\n100\n00\n1\n10 00\n\n10\n00\n1\n10 00\n\n10\n00\n1\n1\n\n10\n00\n1\n10 00\n\n10\n00\n1\n10",
    b"000\n\n000000000\n\n000000\n\n0",
    b"00000\n1\n1000\n1 00000\n0000\n1\n1000\n1 00\n0000000\n\x000\n 00000\n00\n ",
    b"00\n0\n00\n 0\n 00  0\n 0 0   \n 0 0\n 0 0   \n0\n0",
    b"B0\n0000000\n10\n1\n10\n0000\n\x0000\n00\n\x0000\n0000\n30\n000 00\n10\n000\n1000\n1\n000\n10\n\n1\n1",
    b"\x0e0\n0000\n0\x0e00000\n40\n00 00\n40000 00000000\n0\x0e0\n00 00000000000000 00000000\n4",
    b"000 00 0 0 ",
    b"000000000000000000000000000000000",
    b"00\n10",
    b"00\n00\n1\n10\n00\n1\n1",
    b"000 00000000",
    b"00\n\n0\n\n0",
    b"00\n \n \n\xfd 0\n0\n \n \n 00\n \n 0000\n\n00000 \n 0\n \n00\n 0 0\n \n00\n.\n 0000\n\n\n \n \n 00\n\n 0000 ",
    b"0000000\n\xed0\n0\n\n1\n0",
    b"\n0\n \n0",
    b"00\n00\nG\n00\n1000\n1 000\n\x000\n00\nG\n00\n1\n10\n1 \n000\nG\n00\n1\n10\n1 \n00\n100",
    b"000",
    b"000000000",
    b" 0\n \n \n\n 0\n \n \n\n \n \n  ",
    b"0000",
    b"0\n1",
    b" 0 000000000 000000",
    b"\n0 ",
    b"00\n\r0\n0000",
    b"00\n\n0000000\n\x1c0\n\n0000\n\x1c10\n\x1c10\n\x1c00000000\n\n000000000\n\n00000\n\n00",
    b"0\n0\n0\n\n0",
    b"\n \n \n",
    b"0000\n\xeb00000000000 0\n0000\xc2\xc2\xc2\xc200000000000000000 000\n0000\xc2\xc2\xc2\xc2\xc200000000000000000000000000000000000000000000000000000000000000000000000000000000000000\n70000000\n0",
    b"00\n0\n00\n\xb1010000000000\n\xb10100000000000000\n00\n1\n1",
    b"\n0000",
    b"000\n 0\n0\n 0\n",
    b"00000",
    b"\xff\n00000000000000000",
    b"00000   0000 00000            000000000000000000",
    b" 00000000\n000000000",
    b"\x7f0\n00000000\n000\"\n0Q0000\n\"00000\n00\n\xff00\n000000\n<00\n0000000",
    b"0000\n\x030000000\n\xff0000000\n0000\n\x1b000\n00000000000000000000000000000000000000000000000000000000000000 0000000000000000\n1<0<000\n1<0000000000000\n1\n000000000000000000000\n1\n0",
    b"0\n\n0",
    b"\n0\n",
    b"  ",
    b"\n100\n10\n\n1\n10\n00",
    b"00 000",
    b"\n000\n0t000000000000000000000000000000",
    b"0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
    b"0\n0\n000000\n00\x140000\n0",
    b"\n0\n0",
    b"\n0\n\n0000\n\n\n\xed\n00\n\n0\n\n0\n\n0\n\n\n\n0000\n\n0\n\xff\n\n0\n\n0\n\n\n\n\n00\n\n\n\n0\n\xff\n\n\n\n\n0\n\n\n\n00\n\n\n\n\n0\n\xff\n\n0\n\n0000",
    b"0 0",
    b"00\nP\n0",
    b"\n",
    b"0000000000000000\nF\n00\nU0\n00\nF\n00\n0/00\nd\n00000\n\n0000\n\n\n\n\n\n\n\n\n0\n\n000\n\n\n000000\n\n\n\n\n\n\n\n\n0\n\n0000000\n\n000000\n\n\n00",
    b"00\n,00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000 0",
];
