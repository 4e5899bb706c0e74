//! Line record counting.
//!
//! Files are decoded as strict UTF-8 and read one character at a time. A
//! record ends at `\n`, `\r\n` or a lone `\r`; a trailing record without a
//! terminator still counts, and an empty input has zero records.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use utf8_chars::BufReadCharsExt;

use crate::error::CountlineError;
use crate::Result;

/// Streams a reader and counts its line records.
pub struct LineVisitor<T: Read> {
    reader: BufReader<T>,
    lines: u64,
    /// Characters seen since the last terminator
    open_record: bool,
    /// Last character was `\r`, so a following `\n` belongs to it
    after_cr: bool,
}

impl LineVisitor<File> {
    /// Open a file for counting.
    pub fn new(file_path: impl AsRef<Path>) -> Result<Self> {
        let path = file_path.as_ref();
        let file = File::open(path).map_err(|e| CountlineError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_reader(file))
    }
}

impl<T: Read> LineVisitor<T> {
    /// Create a visitor over any reader.
    pub fn from_reader(reader: T) -> Self {
        Self {
            reader: BufReader::new(reader),
            lines: 0,
            open_record: false,
            after_cr: false,
        }
    }

    /// Consume the input and return the number of line records.
    ///
    /// Fails with [`io::ErrorKind::InvalidData`] on bytes that are not UTF-8.
    pub fn visit(mut self) -> io::Result<u64> {
        for c in self.reader.chars() {
            let c = c?;
            match c {
                '\n' if self.after_cr => {
                    self.after_cr = false;
                }
                '\n' | '\r' => {
                    self.lines += 1;
                    self.open_record = false;
                    self.after_cr = c == '\r';
                }
                _ => {
                    self.open_record = true;
                    self.after_cr = false;
                }
            }
        }

        if self.open_record {
            self.lines += 1;
        }
        Ok(self.lines)
    }
}

/// Count the line records of a file.
pub fn count_lines(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    LineVisitor::new(path)?
        .visit()
        .map_err(|e| CountlineError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Count the line records of an in-memory string.
pub fn count_lines_str(content: &str) -> u64 {
    LineVisitor::from_reader(content.as_bytes())
        .visit()
        .expect("reading valid UTF-8 from memory cannot fail")
}
