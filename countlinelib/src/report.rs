//! The per-file report written alongside a counting run.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::CountlineError;
use crate::stats::FileRecord;
use crate::Result;

/// Default report file name, relative to the working directory.
pub const DEFAULT_REPORT_FILE: &str = "line.txt";

/// Writes one `<path>: <count>` line per matched file.
pub struct ReportWriter<W: Write> {
    out: W,
    /// Destination shown in error messages
    path: PathBuf,
}

impl ReportWriter<BufWriter<File>> {
    /// Create (or truncate) the report file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| CountlineError::ReportWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            out: BufWriter::new(file),
            path: path.to_path_buf(),
        })
    }
}

impl<W: Write> ReportWriter<W> {
    /// Wrap an arbitrary writer. `label` names it in errors.
    pub fn new(out: W, label: impl Into<PathBuf>) -> Self {
        Self {
            out,
            path: label.into(),
        }
    }

    /// Append a record.
    pub fn write_record(&mut self, record: &FileRecord) -> Result<()> {
        writeln!(self.out, "{record}").map_err(|e| self.error(e))
    }

    /// Flush buffered records and give back the writer.
    pub fn finish(mut self) -> Result<W> {
        self.out.flush().map_err(|e| self.error(e))?;
        Ok(self.out)
    }

    fn error(&self, source: std::io::Error) -> CountlineError {
        CountlineError::ReportWrite {
            path: self.path.clone(),
            source,
        }
    }
}
