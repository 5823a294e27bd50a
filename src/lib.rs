//! tagscan - annotated-comment extractor
//!
//! tagscan is a CLI tool and library for collecting TODO, FIXME, and other
//! annotated comments from source files. An extension registry maps file
//! extensions to comment grammars for dozens of languages; the parse engine
//! runs the active grammars over a file and returns an ordered,
//! duplicate-free comment list.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (file discovery, scanning, output)
//! - `comment`: The `TodoComment` item type
//! - `config`: Configuration file loading and parsing
//! - `engine`: Extension registry, parser resolution, and aggregation
//! - `error`: Library error type
//! - `parsers`: Comment grammars and the tag matcher
//! - `reporter`: Output renderers (table, json, markdown, raw)

pub mod cli;
pub mod comment;
pub mod config;
pub mod engine;
pub mod error;
pub mod parsers;
pub mod reporter;

pub use comment::TodoComment;
pub use engine::{
    ExtensionEntry, ExtensionRegistry, ParseConfig, is_extension_supported, parse,
    register_extensions,
};
pub use error::Error;
