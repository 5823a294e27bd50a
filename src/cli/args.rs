//! CLI argument definitions using clap.
//!
//! tagscan is a single-command tool: it takes file patterns, scans the
//! matching files for annotated comments, and prints a report.

use clap::Parser;

use crate::reporter::ReporterKind;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Files, directories, or glob patterns to scan
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Glob patterns to exclude from scanning
    /// Can be specified multiple times: --ignore "vendor/**" --ignore "*.min.js"
    #[arg(short, long)]
    pub ignore: Vec<String>,

    /// Additional tags to search for besides TODO and FIXME
    /// Can be specified multiple times: --tags review --tags hack
    #[arg(short, long)]
    pub tags: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub reporter: Option<ReporterKind>,

    /// Also parse languages embedded in files (scripts and styles in markup)
    #[arg(long)]
    pub inline_files: bool,

    /// Exit with code 0 even when comments are found
    #[arg(short = 'x', long)]
    pub exit_nicely: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
