//! Summary rendering for CLI output

use countlinelib::CountResult;

/// Output format for the summary printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One line per category followed by the grand total
    Text,
    /// The full `CountResult` as pretty JSON
    Json,
}

impl OutputMode {
    /// Parse a value accepted by `--output`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputMode::Text),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// Render the text summary.
pub fn render_text(result: &CountResult) -> String {
    let mut out = String::new();
    for category in &result.categories {
        out.push_str(&format!("{} files: {} lines\n", category.name, category.lines));
    }
    out.push_str(&format!("Total lines: {}\n", result.total));
    out
}

/// Render the summary in the requested mode.
pub fn render(result: &CountResult, mode: OutputMode) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Text => Ok(render_text(result)),
        OutputMode::Json => serde_json::to_string_pretty(result).map(|s| s + "\n"),
    }
}
