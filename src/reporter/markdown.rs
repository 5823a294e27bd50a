//! Markdown output: one section per tag, items in a table.

use std::fmt::Write;

use crate::comment::TodoComment;

pub fn render(comments: &[TodoComment]) -> String {
    if comments.is_empty() {
        return "No annotated comments found.".to_string();
    }

    // Section order follows first appearance in the (file, line) sorted list.
    let mut tags: Vec<&str> = Vec::new();
    for comment in comments {
        if !tags.contains(&comment.tag.as_str()) {
            tags.push(&comment.tag);
        }
    }

    let mut out = String::new();
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "## {}s", tag);
        let _ = writeln!(out, "| Filename | Line | Text |");
        let _ = writeln!(out, "| --- | --- | --- |");
        for comment in comments.iter().filter(|c| c.tag == *tag) {
            let mut text = escape_pipes(&comment.text);
            if !comment.reference.is_empty() {
                text = format!("{} ({})", text, comment.reference);
            }
            let _ = writeln!(out, "| {} | {} | {} |", comment.file, comment.line, text);
        }
    }
    out
}

fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}
