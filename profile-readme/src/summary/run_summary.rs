//! Run summary.

use std::path::PathBuf;

/// What a completed run produced.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Repositories shown, in table order.
    pub repositories: Vec<String>,

    /// Path of the rendered README.
    pub output_path: PathBuf,

    /// Path of the HTML rendering.
    pub html_output_path: PathBuf,
}
