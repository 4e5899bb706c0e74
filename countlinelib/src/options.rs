//! Counting configuration.
//!
//! A [`CountConfig`] is an immutable value handed to the counting functions.
//! It holds the directory names to prune and the ordered list of
//! [`Category`] rules. Rules are tested in declaration order and the first
//! one whose extensions match a file name wins.

use std::collections::BTreeSet;
use std::path::Path;

/// Directory names pruned by [`CountConfig::default`].
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[
    ".venv",
    "static",
    "migrations",
    "staticfiles",
    "node_modules",
    "dist",
    "target",
];

/// Path substrings that mark a Rust file as test code.
pub const RUST_TEST_MARKERS: &[&str] = &["_test", "mod.rs"];

/// A secondary split attached to a [`Category`].
///
/// Files of the parent category whose path contains any marker are counted
/// under `label` instead of the parent label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubCategory {
    /// Label of the synthetic bucket (e.g. "Rust Test")
    pub label: String,
    /// Substrings searched for in the file path
    pub markers: Vec<String>,
}

impl SubCategory {
    /// Check whether a path carries one of the markers.
    pub fn matches(&self, path: &str) -> bool {
        self.markers.iter().any(|m| path.contains(m.as_str()))
    }
}

/// A named bucket of files identified by extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category label, used in the report totals
    pub label: String,
    /// Extensions including the leading dot (suffix match on the file name)
    pub extensions: Vec<String>,
    /// Optional secondary split
    pub sub: Option<SubCategory>,
}

impl Category {
    /// Create a category without a sub-classifier.
    pub fn new(label: impl Into<String>, extensions: &[&str]) -> Self {
        Self {
            label: label.into(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
            sub: None,
        }
    }

    /// Builder: attach a sub-category selected by path substrings.
    pub fn with_sub_category(mut self, label: impl Into<String>, markers: &[&str]) -> Self {
        self.sub = Some(SubCategory {
            label: label.into(),
            markers: markers.iter().map(|m| m.to_string()).collect(),
        });
        self
    }

    /// Check if a file name ends with one of this category's extensions.
    pub fn matches(&self, file_name: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()))
    }

    /// Label of the bucket a matched file's lines go to.
    pub fn bucket(&self, path: &str) -> &str {
        match &self.sub {
            Some(sub) if sub.matches(path) => &sub.label,
            _ => &self.label,
        }
    }

    /// All labels this category can produce, parent first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.label.as_str()).chain(self.sub.iter().map(|s| s.label.as_str()))
    }
}

/// Configuration for a counting run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountConfig {
    /// Directory base names skipped together with their subtrees
    pub excluded_dirs: BTreeSet<String>,
    /// Category rules in evaluation order
    pub categories: Vec<Category>,
}

impl Default for CountConfig {
    /// Rust sources split into `Rust` and `Rust Test`, pruning common
    /// build, vendor and virtualenv directories.
    fn default() -> Self {
        let mut config = Self::new().category(
            Category::new("Rust", &[".rs"]).with_sub_category("Rust Test", RUST_TEST_MARKERS),
        );
        for dir in DEFAULT_EXCLUDED_DIRS {
            config = config.exclude_dir(*dir);
        }
        config
    }
}

impl CountConfig {
    /// Create an empty config: nothing excluded, no categories.
    pub fn new() -> Self {
        Self {
            excluded_dirs: BTreeSet::new(),
            categories: Vec::new(),
        }
    }

    /// Builder: prune directories with this base name.
    pub fn exclude_dir(mut self, name: impl Into<String>) -> Self {
        self.excluded_dirs.insert(name.into());
        self
    }

    /// Builder: append a category rule. Earlier rules take precedence.
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Check if a directory name is pruned.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    /// Find the first category whose extensions match the file's name.
    pub fn classify(&self, path: &Path) -> Option<&Category> {
        let name = path.file_name()?.to_string_lossy();
        self.categories.iter().find(|c| c.matches(&name))
    }

    /// Every total label in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.categories.iter().flat_map(|c| c.labels()).collect()
    }
}
