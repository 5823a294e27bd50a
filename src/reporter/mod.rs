//! Output renderers.
//!
//! Reporters are pure functions from the final comment list to a string;
//! the parse engine never invokes them. The comment list is expected to be
//! sorted by (file, line) already.

pub mod json;
pub mod markdown;
pub mod raw;
pub mod table;

use clap::ValueEnum;
use serde::Deserialize;

use crate::comment::TodoComment;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReporterKind {
    /// Human-readable table grouped by file (default).
    Table,
    /// Pretty-printed JSON array.
    Json,
    /// Markdown sections per tag.
    Markdown,
    /// One `file:line tag text` line per item.
    Raw,
}

impl ReporterKind {
    pub fn render(self, comments: &[TodoComment]) -> String {
        match self {
            ReporterKind::Table => table::render(comments),
            ReporterKind::Json => json::render(comments),
            ReporterKind::Markdown => markdown::render(comments),
            ReporterKind::Raw => raw::render(comments),
        }
    }
}
