//! Builtin comment-grammar parsers.
//!
//! Every builtin parser is a [`CommentSyntax`] table driven through one
//! shared scanner and tag matcher. The catalogue is keyed by the same
//! opaque identifiers the extension registry stores, so callers can
//! override any of them per call with their own factories.

pub mod matcher;
pub mod syntax;

use std::sync::Arc;

use crate::comment::TodoComment;
use matcher::TagMatcher;
use syntax::{BlockDelim, CommentSyntax, LineMarker};

pub use matcher::DEFAULT_TAGS;

/// Fixed configuration handed to a parser factory: the request-scoped
/// additions to the recognized tag set.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub custom_tags: Vec<String>,
}

/// A stateless extraction function of shape `(content, filename) -> items`.
///
/// `filename` is echoed into emitted items, never interpreted. Failures
/// propagate to the caller of `parse` unmodified.
pub type CommentParser =
    Arc<dyn Fn(&str, &str) -> anyhow::Result<Vec<TodoComment>> + Send + Sync>;

/// A factory producing an extraction function for one tag configuration.
/// Called once per distinct identifier per request.
pub type ParserFactory = Arc<dyn Fn(&ParseOptions) -> CommentParser + Send + Sync>;

const DEFAULT: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("//")],
    block: &[BlockDelim::new("/*", "*/")],
};

const COFFEE: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("#")],
    block: &[BlockDelim::new("###", "###")],
};

const PYTHON: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("#")],
    block: &[BlockDelim::new("\"\"\"", "\"\"\"")],
};

const TWIG: CommentSyntax = CommentSyntax {
    line: &[],
    block: &[BlockDelim::new("{#", "#}"), BlockDelim::new("<!--", "-->")],
};

const HBS: CommentSyntax = CommentSyntax {
    line: &[],
    block: &[
        BlockDelim::new("{{!--", "--}}"),
        BlockDelim::new("{{!", "}}"),
    ],
};

const EJS: CommentSyntax = CommentSyntax {
    line: &[],
    block: &[BlockDelim::new("<%#", "%>"), BlockDelim::new("<!--", "-->")],
};

const ERLANG: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("%")],
    block: &[],
};

const HASKELL: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("--")],
    block: &[BlockDelim::new("{-", "-}")],
};

const HAML: CommentSyntax = CommentSyntax {
    line: &[LineMarker::anchored("-#"), LineMarker::anchored("/")],
    block: &[],
};

const JADE: CommentSyntax = CommentSyntax {
    line: &[LineMarker::anchored("//-"), LineMarker::anchored("//")],
    block: &[],
};

const LATEX: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("%")],
    block: &[BlockDelim::new("\\begin{comment}", "\\end{comment}")],
};

const LUA: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("--")],
    block: &[BlockDelim::new("--[[", "]]")],
};

const PASCAL: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("//")],
    block: &[BlockDelim::new("{", "}"), BlockDelim::new("(*", "*)")],
};

const SILVERSTRIPE: CommentSyntax = CommentSyntax {
    line: &[],
    block: &[
        BlockDelim::new("<%--", "--%>"),
        BlockDelim::new("<!--", "-->"),
    ],
};

const CLOJURE: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new(";")],
    block: &[],
};

const FSHARP: CommentSyntax = CommentSyntax {
    line: &[LineMarker::new("//")],
    block: &[BlockDelim::new("(*", "*)")],
};

/// Look up a builtin parser factory by identifier.
///
/// Returns `None` for identifiers the catalogue does not know; the resolver
/// turns that into an `UnknownParser` error.
pub fn builtin(identifier: &str) -> Option<ParserFactory> {
    let syntax = syntax_for(identifier)?;
    Some(Arc::new(move |options: &ParseOptions| {
        let matcher = TagMatcher::new(&options.custom_tags);
        let parser: CommentParser = Arc::new(move |content: &str, filename: &str| {
            Ok(syntax.scan(content, &matcher, filename))
        });
        parser
    }))
}

fn syntax_for(identifier: &str) -> Option<CommentSyntax> {
    Some(match identifier {
        "defaultParser" => DEFAULT,
        "coffeeParser" => COFFEE,
        "pythonParser" => PYTHON,
        "twigParser" => TWIG,
        "hbsParser" => HBS,
        "ejsParser" => EJS,
        "erlangParser" => ERLANG,
        "haskellParser" => HASKELL,
        "hamlParser" => HAML,
        "jadeParser" => JADE,
        "latexParser" => LATEX,
        "luaParser" => LUA,
        "pascalParser" => PASCAL,
        "ssParser" => SILVERSTRIPE,
        "clojureParser" => CLOJURE,
        "fsharpParser" => FSHARP,
        _ => return None,
    })
}
