//! High-level counting API.
//!
//! This module ties the pipeline together: discover files under a root,
//! classify each one, count its lines, append it to the report and fold it
//! into the totals. The first error ends the run.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use crate::error::CountlineError;
use crate::filter::discover_files;
use crate::options::CountConfig;
use crate::report::ReportWriter;
use crate::stats::{CountResult, FileRecord};
use crate::visitor::count_lines;
use crate::Result;

/// Path of `path` relative to `base`, or `path` unchanged if it is not below it.
fn make_relative<'a>(path: &'a Path, base: &Path) -> &'a Path {
    path.strip_prefix(base).unwrap_or(path)
}

/// Count every matched file under `root`, writing records to `report`.
///
/// Report paths are relative to `root`, and sub-category markers are matched
/// against that relative path. Records are written in visitation order.
pub fn count_directory<W: Write>(
    root: impl AsRef<Path>,
    config: &CountConfig,
    report: &mut ReportWriter<W>,
) -> Result<CountResult> {
    let root = root.as_ref();
    let mut result = CountResult::new(config);

    for (path, category) in discover_files(root, config)? {
        let relative = make_relative(&path, root);
        let shown = if relative.as_os_str().is_empty() {
            path.as_path()
        } else {
            relative
        };
        let Some(shown_str) = shown.to_str() else {
            return Err(CountlineError::NonUtf8Path(path.clone()));
        };
        let bucket = category.bucket(shown_str);

        let lines = count_lines(&path)?;

        let record = FileRecord {
            path: shown.to_path_buf(),
            category: category.label.clone(),
            lines,
        };
        report.write_record(&record)?;
        debug!(
            path = shown_str,
            category = %record.category,
            bucket,
            lines,
            "counted file"
        );

        result.add(bucket, lines);
    }

    Ok(result)
}

/// Count `root` and write the report to `report_path`.
///
/// The report is created (or truncated) before the walk starts. On error it
/// may be left incomplete.
pub fn count_to_report(
    root: impl AsRef<Path>,
    config: &CountConfig,
    report_path: impl AsRef<Path>,
) -> Result<CountResult> {
    let root = root.as_ref();
    let report_path = report_path.as_ref();
    info!(root = %root.display(), report = %report_path.display(), "counting lines");

    let mut report = ReportWriter::create(report_path)?;
    let result = count_directory(root, config, &mut report)?;
    report.finish()?;

    info!(files = result.file_count, total = result.total, "count finished");
    Ok(result)
}
