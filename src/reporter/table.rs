//! Human-readable table output, grouped by file.

use std::collections::BTreeMap;
use std::fmt::Write;

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::{FAILURE_MARK, SUCCESS_MARK};
use crate::comment::TodoComment;

pub fn render(comments: &[TodoComment]) -> String {
    if comments.is_empty() {
        return format!(
            "{} {}",
            SUCCESS_MARK.green(),
            "No annotated comments found".green()
        );
    }

    let line_width = comments
        .iter()
        .map(|c| c.line.to_string().len())
        .max()
        .unwrap_or(1);
    let tag_width = comments
        .iter()
        .map(|c| UnicodeWidthStr::width(c.tag.as_str()))
        .max()
        .unwrap_or(4);

    let mut out = String::new();
    let mut current_file: Option<&str> = None;

    for comment in comments {
        if current_file != Some(comment.file.as_str()) {
            if current_file.is_some() {
                let _ = writeln!(out);
            }
            let header = if comment.file.is_empty() {
                "(stdin)"
            } else {
                &comment.file
            };
            let _ = writeln!(out, "{}", header.bold().underline());
            current_file = Some(comment.file.as_str());
        }

        let tag_padding = tag_width - UnicodeWidthStr::width(comment.tag.as_str());
        let _ = write!(
            out,
            "  {} {:>width$}  {}{:pad$}  {}",
            "line".dimmed(),
            comment.line.to_string().cyan(),
            colorize_tag(&comment.tag),
            "",
            comment.text,
            width = line_width,
            pad = tag_padding
        );
        if !comment.reference.is_empty() {
            let _ = write!(out, " {}", format!("({})", comment.reference).dimmed());
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out);
    let _ = write!(out, "{} {}", FAILURE_MARK.red(), summary(comments));
    out
}

fn colorize_tag(tag: &str) -> ColoredString {
    match tag {
        "TODO" => tag.yellow().bold(),
        "FIXME" => tag.red().bold(),
        _ => tag.magenta().bold(),
    }
}

/// `"3 comments found (1 FIXME, 2 TODO)"`, tags in alphabetical order.
fn summary(comments: &[TodoComment]) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for comment in comments {
        *counts.entry(comment.tag.as_str()).or_default() += 1;
    }
    let breakdown = counts
        .iter()
        .map(|(tag, count)| format!("{count} {tag}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{} {} found ({})",
        comments.len(),
        if comments.len() == 1 {
            "comment"
        } else {
            "comments"
        },
        breakdown
    )
}
