//! Machine-readable JSON output.

use crate::comment::TodoComment;

pub fn render(comments: &[TodoComment]) -> String {
    // TodoComment serialization has no fallible fields.
    serde_json::to_string_pretty(comments).unwrap_or_else(|_| "[]".to_string())
}
