use std::{cmp::Ordering, fmt};

use serde::Serialize;

/// A single annotated comment extracted from source text.
///
/// Instances are created by parsers and never mutated afterwards. The
/// `(line, tag, text)` triple identifies a comment for deduplication;
/// `file` and `reference` are carried along from whichever instance
/// was seen first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoComment {
    /// File the comment came from, echoed from the parse request.
    pub file: String,
    /// Upper-cased annotation keyword, e.g. `TODO`.
    pub tag: String,
    /// 1-based line number.
    pub line: usize,
    /// Trimmed message body. May be empty.
    pub text: String,
    /// Optional secondary token (attribution, issue id). Empty when absent.
    #[serde(rename = "ref")]
    pub reference: String,
}

impl TodoComment {
    pub fn new(
        file: impl Into<String>,
        tag: impl Into<String>,
        line: usize,
        text: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            tag: tag.into(),
            line,
            text: text.into(),
            reference: String::new(),
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = reference.into();
        self
    }

    /// Dedup identity within one parse result.
    pub fn dedup_key(&self) -> (usize, &str, &str) {
        (self.line, &self.tag, &self.text)
    }
}

impl fmt::Display for TodoComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {} {}", self.file, self.line, self.tag, self.text)
    }
}

impl Ord for TodoComment {
    fn cmp(&self, other: &Self) -> Ordering {
        // File then line then tag then text, for deterministic multi-file
        // report output. Within a single parse result only the line matters
        // and the engine relies on a stable sort instead of this ordering.
        self.file
            .cmp(&other.file)
            .then_with(|| self.line.cmp(&other.line))
            .then_with(|| self.tag.cmp(&other.tag))
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for TodoComment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
