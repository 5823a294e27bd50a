//! Minimal line-oriented output for piping into other tools.

use std::fmt::Write;

use crate::comment::TodoComment;

pub fn render(comments: &[TodoComment]) -> String {
    let mut out = String::new();
    for comment in comments {
        let _ = write!(out, "{}:{} {}", comment.file, comment.line, comment.tag);
        if !comment.text.is_empty() {
            let _ = write!(out, " {}", comment.text);
        }
        if !comment.reference.is_empty() {
            let _ = write!(out, " ({})", comment.reference);
        }
        let _ = writeln!(out);
    }
    out
}
