//! Fan-out and aggregation.
//!
//! All extraction functions of a request run over identical input and are
//! pure, so they execute in parallel. Merge order is declared parser order,
//! not completion order: the ordered `collect` below reassembles results by
//! input position regardless of which task finished first.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::comment::TodoComment;
use crate::error::{Error, Result};
use crate::parsers::CommentParser;

/// Run every parser, merge in declared order, stable-sort by line, then
/// drop `(line, tag, text)` duplicates keeping the first-seen instance.
///
/// Any parser failure fails the whole request; no partial results.
pub fn run(parsers: &[CommentParser], content: &str, filename: &str) -> Result<Vec<TodoComment>> {
    let outputs: Vec<Vec<TodoComment>> = parsers
        .par_iter()
        .map(|parser| parser(content, filename).map_err(Error::Parser))
        .collect::<Result<_>>()?;

    let mut merged: Vec<TodoComment> = outputs.into_iter().flatten().collect();

    // Stable: entries sharing a line keep parser/emission order.
    merged.sort_by_key(|comment| comment.line);

    let mut seen = HashSet::new();
    merged.retain(|comment| seen.insert((comment.line, comment.tag.clone(), comment.text.clone())));

    Ok(merged)
}
