//! The scan pipeline behind the CLI: discover files from the given
//! patterns, parse each one in parallel, and collect a sorted comment list.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{Pattern, glob};
use rayon::prelude::*;
use walkdir::WalkDir;

use super::args::Arguments;
use crate::comment::TodoComment;
use crate::config::Config;
use crate::engine::{self, ParseConfig};

/// Check if a pattern contains glob wildcards (`*`, `?`, or a `[` class).
/// Patterns without wildcards are treated as literal file or directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// Result of a scan run.
#[derive(Debug)]
pub struct ScanOutcome {
    /// All comments found, sorted by (file, line).
    pub comments: Vec<TodoComment>,
    /// Number of files parsed.
    pub files_scanned: usize,
    /// Number of files skipped because their extension is not supported.
    pub skipped: usize,
}

pub fn run(args: &Arguments, config: &Config) -> Result<ScanOutcome> {
    engine::register_extensions(&config.associations)
        .context("Failed to register extension associations")?;

    let mut ignores: Vec<&str> = config.ignores.iter().map(String::as_str).collect();
    ignores.extend(args.ignore.iter().map(String::as_str));
    let ignore_patterns = compile_ignores(&ignores)?;

    let mut tags = config.tags.clone();
    for tag in &args.tags {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }

    let files = collect_files(&args.patterns, &ignore_patterns, args.verbose)?;
    if files.is_empty() {
        anyhow::bail!("No files found to scan");
    }

    let with_inline = args.inline_files || config.inline_files;

    let per_file: Vec<Option<Vec<TodoComment>>> = files
        .par_iter()
        .map(|path| scan_file(path, &tags, with_inline, args.verbose))
        .collect::<Result<_>>()?;

    let mut skipped = 0;
    let mut comments = Vec::new();
    for result in per_file {
        match result {
            Some(found) => comments.extend(found),
            None => skipped += 1,
        }
    }
    comments.sort();

    Ok(ScanOutcome {
        comments,
        files_scanned: files.len() - skipped,
        skipped,
    })
}

/// Parse one file. Returns `None` when the file's extension has no
/// registered parser.
fn scan_file(
    path: &Path,
    tags: &[String],
    with_inline: bool,
    verbose: bool,
) -> Result<Option<Vec<TodoComment>>> {
    let extension = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    };
    if extension.is_empty() || !engine::is_extension_supported(&extension) {
        if verbose {
            eprintln!("skipping unsupported file: {}", path.display());
        }
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let parse_config = ParseConfig::new(extension)
        .filename(path.to_string_lossy())
        .custom_tags(tags.iter().cloned())
        .with_inline_files(with_inline);

    let comments = engine::parse(&content, &parse_config)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(comments))
}

fn compile_ignores(patterns: &[&str]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| {
            Pattern::new(p).with_context(|| format!("Invalid ignore pattern \"{}\"", p))
        })
        .collect()
}

/// Expand the positional patterns into a sorted, deduplicated file list.
///
/// Glob patterns expand to their matches; literal paths name a file or a
/// directory to walk recursively.
fn collect_files(
    patterns: &[String],
    ignore_patterns: &[Pattern],
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        if is_glob_pattern(pattern) {
            let entries =
                glob(pattern).with_context(|| format!("Invalid glob pattern \"{}\"", pattern))?;
            for entry in entries {
                let path = entry.with_context(|| format!("Cannot access match of \"{pattern}\""))?;
                if path.is_file() {
                    files.push(path);
                }
            }
        } else {
            let path = Path::new(pattern);
            if path.is_file() {
                files.push(path.to_path_buf());
            } else if path.is_dir() {
                for entry in WalkDir::new(path) {
                    let entry = entry.context("Cannot access path")?;
                    if entry.path().is_file() {
                        files.push(entry.path().to_path_buf());
                    }
                }
            } else if verbose {
                eprintln!("warning: path does not exist: {}", pattern);
            }
        }
    }

    files.retain(|path| {
        let path_str = path.to_string_lossy();
        !ignore_patterns.iter().any(|p| p.matches(&path_str))
    });
    files.sort();
    files.dedup();
    Ok(files)
}
