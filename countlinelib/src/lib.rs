//! # countlinelib
//!
//! A line counter library that buckets files by extension and separates test
//! files from the rest of their category.
//!
//! ## Overview
//!
//! A run walks a directory tree, skipping excluded directory names at any
//! depth, and matches each file name against an ordered list of categories.
//! The first category whose extension matches claims the file. A category may
//! carry a sub-category selected by path substrings; the default `Rust`
//! category diverts paths containing `_test` or `mod.rs` to `Rust Test`.
//!
//! Every matched file produces one `<path>: <count>` report line, and the
//! run returns per-category totals plus a grand total.
//!
//! ## Example
//!
//! ```rust
//! use countlinelib::{count_directory, CountConfig, ReportWriter};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir(dir.path().join("src")).unwrap();
//! fs::write(dir.path().join("src/lib.rs"), "pub fn hello() {\n}\n").unwrap();
//! fs::write(dir.path().join("src/lib_test.rs"), "#[test]\nfn t() {}\n").unwrap();
//!
//! let mut report = ReportWriter::new(Vec::new(), "<memory>");
//! let result = count_directory(dir.path(), &CountConfig::default(), &mut report).unwrap();
//!
//! assert_eq!(result.get("Rust"), Some(2));
//! assert_eq!(result.get("Rust Test"), Some(2));
//! assert_eq!(result.total, 4);
//! ```

pub mod counter;
pub mod error;
pub mod filter;
pub mod options;
pub mod report;
pub mod stats;
pub mod visitor;

pub use counter::{count_directory, count_to_report};
pub use error::CountlineError;
pub use filter::discover_files;
pub use options::{Category, CountConfig, SubCategory, DEFAULT_EXCLUDED_DIRS, RUST_TEST_MARKERS};
pub use report::{ReportWriter, DEFAULT_REPORT_FILE};
pub use stats::{CategoryTotal, CountResult, FileRecord};
pub use visitor::{count_lines, count_lines_str, LineVisitor};

/// Result type for countlinelib operations
pub type Result<T> = std::result::Result<T, CountlineError>;
