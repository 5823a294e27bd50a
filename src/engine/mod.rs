//! The parse engine: registry lookup, parser resolution, and aggregation
//! behind one `parse` call.
//!
//! The extension registry is process-wide state: it is seeded once with the
//! builtins and mutated only by explicit registration. Registrations made
//! through [`ParseConfig::associate`] are deliberately **not** request
//! scoped — they mutate the same registry every other request consults,
//! including concurrently in-flight ones. Callers that need isolation should
//! register once up front rather than per call.

pub mod aggregate;
pub mod registry;
pub mod resolver;

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::comment::TodoComment;
use crate::error::{Error, Result};
use crate::parsers::{CommentParser, ParseOptions, ParserFactory};

pub use registry::{ExtensionEntry, ExtensionRegistry};

static REGISTRY: LazyLock<Mutex<ExtensionRegistry>> =
    LazyLock::new(|| Mutex::new(ExtensionRegistry::builtin()));

/// Lock the process-wide extension registry.
///
/// The guard is held only for registration and resolution, never across
/// parser execution.
pub fn registry() -> MutexGuard<'static, ExtensionRegistry> {
    REGISTRY.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Register extension associations with the process-wide registry.
///
/// Immediate and global: later and concurrent requests observe the change.
pub fn register_extensions(entries: &HashMap<String, ExtensionEntry>) -> Result<()> {
    registry().register(entries)
}

/// Whether the process-wide registry currently supports `extension`.
pub fn is_extension_supported(extension: &str) -> bool {
    registry().is_supported(extension)
}

/// Configuration for one `parse` call. Only `extension` is required.
#[derive(Clone, Default)]
pub struct ParseConfig {
    /// Selects the registry entry; must be registered, directly or via
    /// `associate`.
    pub extension: String,
    /// Echoed into every emitted item; never interpreted.
    pub filename: Option<String>,
    /// Associations merged into the global registry before resolution.
    pub associate_parser: HashMap<String, ExtensionEntry>,
    /// Identifier overrides consulted before the builtin catalogue.
    pub custom_parsers: HashMap<String, ParserFactory>,
    /// Additional recognized tags, scoped to this call only.
    pub custom_tags: Vec<String>,
    /// Also run the parsers of the extension's embedded-language sections.
    pub with_inline_files: bool,
}

impl ParseConfig {
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            ..Default::default()
        }
    }

    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn associate(mut self, extension: impl Into<String>, entry: ExtensionEntry) -> Self {
        self.associate_parser.insert(extension.into(), entry);
        self
    }

    pub fn custom_parser(mut self, identifier: impl Into<String>, factory: ParserFactory) -> Self {
        self.custom_parsers.insert(identifier.into(), factory);
        self
    }

    pub fn custom_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_inline_files(mut self, enabled: bool) -> Self {
        self.with_inline_files = enabled;
        self
    }
}

/// Parse `content` and return the ordered, duplicate-free comment list.
///
/// Linear pipeline: merge caller-supplied registry additions, resolve the
/// active parser set, validate custom tags, fan out, aggregate. Any step's
/// failure terminates the request; exactly one of a full result or a
/// specific [`Error`] is produced.
pub fn parse(content: &str, config: &ParseConfig) -> Result<Vec<TodoComment>> {
    let parser_names = {
        let mut reg = registry();
        if !config.associate_parser.is_empty() {
            reg.register(&config.associate_parser)?;
        }
        reg.active_parsers(&config.extension, config.with_inline_files)?
    };

    validate_tags(&config.custom_tags)?;

    let options = ParseOptions {
        custom_tags: config.custom_tags.clone(),
    };
    let mut parsers: Vec<CommentParser> = Vec::with_capacity(parser_names.len());
    for name in &parser_names {
        let factory = resolver::resolve(name, &config.custom_parsers)?;
        parsers.push(factory(&options));
    }

    let filename = config.filename.as_deref().unwrap_or("");
    aggregate::run(&parsers, content, filename)
}

/// Custom tags are spliced into the grammar regexes; restrict them to
/// word-like content so a stray string cannot change the grammar.
fn validate_tags(tags: &[String]) -> Result<()> {
    for tag in tags {
        let well_formed = !tag.is_empty()
            && tag
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !well_formed {
            return Err(Error::Validation(format!("invalid custom tag {tag:?}")));
        }
    }
    Ok(())
}
