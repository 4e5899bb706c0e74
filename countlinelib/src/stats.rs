//! Core data structures for line totals

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::options::CountConfig;

/// One matched file, as written to the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path relative to the counted root
    pub path: PathBuf,
    /// Label of the category whose extension matched
    pub category: String,
    /// Number of line records
    pub lines: u64,
}

impl std::fmt::Display for FileRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.lines)
    }
}

/// Accumulated lines for one category or sub-category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category label
    pub name: String,
    /// Lines credited to this label
    pub lines: u64,
}

/// Result of a counting run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResult {
    /// Number of matched files
    pub file_count: u64,
    /// Per-label totals in display order (a category, then its sub-category)
    pub categories: Vec<CategoryTotal>,
    /// Sum of all category totals
    pub total: u64,
}

impl CountResult {
    /// Create a result with a zeroed entry for every label of the config.
    pub fn new(config: &CountConfig) -> Self {
        Self {
            file_count: 0,
            categories: config
                .labels()
                .into_iter()
                .map(|name| CategoryTotal {
                    name: name.to_string(),
                    lines: 0,
                })
                .collect(),
            total: 0,
        }
    }

    /// Credit `lines` to `bucket` and to the grand total.
    pub fn add(&mut self, bucket: &str, lines: u64) {
        match self.categories.iter_mut().find(|c| c.name == bucket) {
            Some(entry) => entry.lines += lines,
            None => self.categories.push(CategoryTotal {
                name: bucket.to_string(),
                lines,
            }),
        }
        self.file_count += 1;
        self.total += lines;
    }

    /// Lines credited to a label, if the label exists.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.lines)
    }
}
