use thiserror::Error;

/// Errors produced by the parse engine.
///
/// Every `parse` call yields exactly one of a full result or one of these;
/// there are no partial results. Parser plugin failures are wrapped
/// unmodified in [`Error::Parser`].
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed registry entries or malformed custom tags.
    #[error("{0}")]
    Validation(String),

    /// The requested extension is absent from the registry.
    #[error("extension {0} is not supported")]
    UnsupportedExtension(String),

    /// A parser identifier resolved to neither an override nor a builtin.
    #[error("unknown parser: {0}")]
    UnknownParser(String),

    /// A plugin's extraction function failed; surfaced verbatim.
    #[error(transparent)]
    Parser(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
