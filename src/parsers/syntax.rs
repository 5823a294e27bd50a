use crate::comment::TodoComment;
use crate::parsers::matcher::TagMatcher;

/// A single-line comment marker, e.g. `//` or `#`.
#[derive(Debug, Clone, Copy)]
pub struct LineMarker {
    pub token: &'static str,
    /// When true the marker only counts as the first non-whitespace of a
    /// line (indentation-based dialects like haml and pug, where `/` or
    /// `//` mid-line is ordinary content).
    pub anchored: bool,
}

impl LineMarker {
    pub const fn new(token: &'static str) -> Self {
        Self {
            token,
            anchored: false,
        }
    }

    pub const fn anchored(token: &'static str) -> Self {
        Self {
            token,
            anchored: true,
        }
    }
}

/// A block comment delimiter pair, e.g. `/* … */`.
///
/// Open and close may be identical (python docstrings).
#[derive(Debug, Clone, Copy)]
pub struct BlockDelim {
    pub open: &'static str,
    pub close: &'static str,
}

impl BlockDelim {
    pub const fn new(open: &'static str, close: &'static str) -> Self {
        Self { open, close }
    }
}

/// The comment grammar of one language: which markers start a line comment
/// and which delimiter pairs enclose block comments.
///
/// One scanner drives every builtin parser; the per-language differences are
/// entirely in these tables.
#[derive(Debug, Clone, Copy)]
pub struct CommentSyntax {
    pub line: &'static [LineMarker],
    pub block: &'static [BlockDelim],
}

enum Marker {
    Line(usize, &'static LineMarker),
    Block(usize, &'static BlockDelim),
}

impl CommentSyntax {
    /// Extract every tagged comment from `content`.
    ///
    /// Lines are numbered from 1. Inside block comments each line is matched
    /// individually, so a multi-line block can emit several items.
    pub fn scan(&self, content: &str, matcher: &TagMatcher, filename: &str) -> Vec<TodoComment> {
        let mut out = Vec::new();
        let mut open: Option<&'static BlockDelim> = None;

        for (idx, line) in content.lines().enumerate() {
            let line_num = idx + 1;
            let mut rest = line;

            // Continuation of a block opened on an earlier line.
            if let Some(block) = open {
                match rest.find(block.close) {
                    Some(pos) => {
                        emit(matcher, &rest[..pos], true, line_num, filename, &mut out);
                        rest = &rest[pos + block.close.len()..];
                        open = None;
                    }
                    None => {
                        emit(matcher, rest, true, line_num, filename, &mut out);
                        continue;
                    }
                }
            }

            while let Some(marker) = self.first_marker(rest) {
                match marker {
                    Marker::Line(pos, m) => {
                        let body = &rest[pos + m.token.len()..];
                        emit(matcher, body, false, line_num, filename, &mut out);
                        rest = "";
                    }
                    Marker::Block(pos, b) => {
                        let body_start = pos + b.open.len();
                        match rest[body_start..].find(b.close) {
                            Some(rel) => {
                                let body = &rest[body_start..body_start + rel];
                                emit(matcher, body, true, line_num, filename, &mut out);
                                rest = &rest[body_start + rel + b.close.len()..];
                            }
                            None => {
                                emit(
                                    matcher,
                                    &rest[body_start..],
                                    true,
                                    line_num,
                                    filename,
                                    &mut out,
                                );
                                open = Some(b);
                                rest = "";
                            }
                        }
                    }
                }
                if rest.is_empty() {
                    break;
                }
            }
        }

        out
    }

    /// Earliest comment marker in `rest`. Ties on position go to the longest
    /// token, so `--[[` beats `--` and `//-` beats `//`.
    fn first_marker(&self, rest: &str) -> Option<Marker> {
        if rest.is_empty() {
            return None;
        }

        let mut best: Option<(usize, usize, Marker)> = None;
        let leading_ws = rest.len() - rest.trim_start().len();

        for m in self.line {
            let pos = if m.anchored {
                rest[leading_ws..]
                    .starts_with(m.token)
                    .then_some(leading_ws)
            } else {
                rest.find(m.token)
            };
            if let Some(pos) = pos {
                consider(&mut best, pos, m.token.len(), Marker::Line(pos, m));
            }
        }
        for b in self.block {
            if let Some(pos) = rest.find(b.open) {
                consider(&mut best, pos, b.open.len(), Marker::Block(pos, b));
            }
        }

        best.map(|(_, _, marker)| marker)
    }
}

fn consider(best: &mut Option<(usize, usize, Marker)>, pos: usize, len: usize, marker: Marker) {
    let better = match best {
        Some((bp, bl, _)) => pos < *bp || (pos == *bp && len > *bl),
        None => true,
    };
    if better {
        *best = Some((pos, len, marker));
    }
}

fn emit(
    matcher: &TagMatcher,
    candidate: &str,
    in_block: bool,
    line: usize,
    filename: &str,
    out: &mut Vec<TodoComment>,
) {
    let candidate = if in_block {
        // Doc-comment gutters: `* @todo …` inside `/** … */`.
        candidate.trim_start().trim_start_matches('*')
    } else {
        candidate
    };

    if let Some(hit) = matcher.match_comment(candidate) {
        out.push(
            TodoComment::new(filename, hit.tag, line, hit.text).with_reference(hit.reference),
        );
    }
}
