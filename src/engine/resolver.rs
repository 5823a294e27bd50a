//! Parser-identifier resolution.
//!
//! An identifier is an opaque lookup key: caller-supplied overrides are
//! consulted first, then the builtin catalogue. Factories and the extraction
//! functions they return are treated as pure; the resolver assumes no shared
//! mutable state across invocations.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::parsers::{self, ParserFactory};

/// Resolve `identifier` to a parser factory.
pub fn resolve(
    identifier: &str,
    overrides: &HashMap<String, ParserFactory>,
) -> Result<ParserFactory> {
    if let Some(factory) = overrides.get(identifier) {
        return Ok(factory.clone());
    }
    parsers::builtin(identifier).ok_or_else(|| Error::UnknownParser(identifier.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::comment::TodoComment;
    use crate::parsers::{CommentParser, ParseOptions};

    fn stub_factory(text: &'static str) -> ParserFactory {
        Arc::new(move |_options: &ParseOptions| {
            let parser: CommentParser = Arc::new(move |_content, filename| {
                Ok(vec![TodoComment::new(filename, "TODO", 1, text)])
            });
            parser
        })
    }

    #[test]
    fn test_builtin_fallback() {
        let factory = resolve("defaultParser", &HashMap::new()).unwrap();
        let parser = factory(&ParseOptions::default());
        let comments = parser("// TODO: x\n", "a.js").unwrap();
        assert_eq!(comments.len(), 1);
    }

    #[test]
    fn test_override_wins_over_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("defaultParser".to_string(), stub_factory("overridden"));

        let factory = resolve("defaultParser", &overrides).unwrap();
        let parser = factory(&ParseOptions::default());
        let comments = parser("// TODO: x\n", "a.js").unwrap();
        assert_eq!(comments[0].text, "overridden");
    }

    #[test]
    fn test_unknown_identifier_errors() {
        // Factories are not Debug, so drop the Ok payload before unwrapping.
        let err = resolve("mysteryParser", &HashMap::new())
            .map(|_| ())
            .unwrap_err();
        assert!(matches!(err, Error::UnknownParser(name) if name == "mysteryParser"));
    }
}
