use regex::Regex;

/// Tags recognized by every grammar, before any request-scoped additions.
pub const DEFAULT_TAGS: &[&str] = &["todo", "fixme"];

/// A successful tag match within one candidate comment line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    /// Upper-cased tag, e.g. `TODO`.
    pub tag: String,
    /// Trimmed message body, may be empty.
    pub text: String,
    /// Attribution or issue id, empty when absent.
    pub reference: String,
}

/// Matches annotation tags inside already-isolated comment text.
///
/// The grammar is shared by every builtin parser: optional `@` prefix,
/// a recognized tag (case-insensitive), an optional leading `(reference)`,
/// an optional colon, then the message. A trailing ` /token` becomes the
/// reference when no leading one was given.
pub struct TagMatcher {
    tag_regex: Regex,
    trailing_ref: Regex,
}

impl TagMatcher {
    /// Build a matcher for the default tags plus `custom_tags`.
    ///
    /// Custom tags are regex-escaped before splicing, so any string is safe
    /// here; the engine additionally validates tag content up front.
    pub fn new(custom_tags: &[String]) -> Self {
        let mut tags: Vec<String> = DEFAULT_TAGS.iter().map(|t| (*t).to_string()).collect();
        tags.extend(custom_tags.iter().map(|t| regex::escape(t)));

        let pattern = format!(
            r"(?i)^\s*@?(?P<tag>{})\b\s*(?:\((?P<ref>[^)]*)\))?:?\s*(?P<text>.*?)\s*$",
            tags.join("|")
        );
        Self {
            tag_regex: Regex::new(&pattern).expect("escaped tag alternation always compiles"),
            trailing_ref: Regex::new(r"\s+/\S+\s*$").expect("static pattern"),
        }
    }

    /// Match `candidate` against the tag grammar.
    ///
    /// `candidate` is the text of a comment with its syntax markers already
    /// stripped. Returns `None` when no recognized tag opens the comment.
    pub fn match_comment(&self, candidate: &str) -> Option<TagMatch> {
        let caps = self.tag_regex.captures(candidate)?;

        let tag = caps["tag"].to_uppercase();
        let mut reference = caps
            .name("ref")
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default();
        let mut text = caps["text"].to_string();

        if reference.is_empty()
            && let Some(m) = self.trailing_ref.find(&text)
        {
            reference = m.as_str().trim()[1..].to_string();
            text.truncate(m.start());
        }

        Some(TagMatch {
            tag,
            text: text.trim().to_string(),
            reference,
        })
    }
}
