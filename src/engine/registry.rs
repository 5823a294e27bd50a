//! Extension registry: which parsers run for which file extension.
//!
//! The registry is seeded once with the builtin association table and only
//! grows (or overwrites) through explicit registration. Registration
//! validates the whole batch before touching the map, so a malformed entry
//! never leaves partial state behind.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

/// The parsers associated with one file extension.
///
/// `parsers` is ordered and non-empty; declaration order is the tie-break
/// when several parsers fire on one extension. `included_files` names other
/// extensions whose grammars also apply to this extension's files when
/// embedded fan-out is requested (templates embedding markup, script and
/// style sections).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtensionEntry {
    /// A bare string or an array in serialized form; always a list here.
    #[serde(rename = "parserName", deserialize_with = "one_or_many")]
    pub parsers: Vec<String>,
    #[serde(rename = "includedFiles", default)]
    pub included_files: Vec<String>,
}

impl ExtensionEntry {
    pub fn new(parser: impl Into<String>) -> Self {
        Self {
            parsers: vec![parser.into()],
            included_files: Vec::new(),
        }
    }

    pub fn with_parsers<I, S>(parsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parsers: parsers.into_iter().map(Into::into).collect(),
            included_files: Vec::new(),
        }
    }

    pub fn include_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_files = files.into_iter().map(Into::into).collect();
        self
    }
}

/// Normalizes the one-parser and many-parser serialized forms to a list, so
/// downstream logic never special-cases the scalar shape.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}

/// Map from file extension to its [`ExtensionEntry`].
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    entries: HashMap<String, ExtensionEntry>,
}

impl ExtensionRegistry {
    /// A registry with no associations. Unit tests and embedders that want
    /// full control start here.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A registry seeded with the builtin association table.
    pub fn builtin() -> Self {
        let entries = BUILTIN_ASSOCIATIONS
            .iter()
            .map(|(ext, parsers, included)| {
                (
                    (*ext).to_string(),
                    ExtensionEntry::with_parsers(parsers.iter().copied())
                        .include_files(included.iter().copied()),
                )
            })
            .collect();
        Self { entries }
    }

    /// Merge `entries` into the registry.
    ///
    /// Every key and value is validated before any mutation: keys must start
    /// with `.` and be longer than one character, and every entry must carry
    /// at least one non-empty parser identifier. On success, present keys
    /// are fully overwritten (last write wins, no field-level merge).
    pub fn register(&mut self, entries: &HashMap<String, ExtensionEntry>) -> Result<()> {
        for (extension, entry) in entries {
            validate_entry(extension, entry)?;
        }
        for (extension, entry) in entries {
            self.entries.insert(extension.clone(), entry.clone());
        }
        Ok(())
    }

    /// Whether `extension` currently has an association.
    pub fn is_supported(&self, extension: &str) -> bool {
        self.entries.contains_key(extension)
    }

    /// The effective, ordered, duplicate-free parser identifiers for
    /// `extension`.
    ///
    /// The extension's own parsers come first. When `with_inline` is set,
    /// each included extension contributes its own parsers, expanded exactly
    /// one level deep: an included extension's own inclusions are ignored.
    /// First occurrence wins on duplicates.
    pub fn active_parsers(&self, extension: &str, with_inline: bool) -> Result<Vec<String>> {
        let entry = self.get(extension)?;

        let mut names: Vec<String> = Vec::new();
        push_unique(&mut names, &entry.parsers);

        if with_inline {
            for included in &entry.included_files {
                push_unique(&mut names, &self.get(included)?.parsers);
            }
        }

        Ok(names)
    }

    fn get(&self, extension: &str) -> Result<&ExtensionEntry> {
        self.entries
            .get(extension)
            .ok_or_else(|| Error::UnsupportedExtension(extension.to_string()))
    }
}

fn validate_entry(extension: &str, entry: &ExtensionEntry) -> Result<()> {
    if extension.len() <= 1 || !extension.starts_with('.') {
        return Err(Error::Validation(format!(
            "invalid extension {extension:?}"
        )));
    }
    if entry.parsers.is_empty() || entry.parsers.iter().any(|name| name.trim().is_empty()) {
        return Err(Error::Validation(format!(
            "entry for {extension} must name at least one parser"
        )));
    }
    Ok(())
}

fn push_unique(names: &mut Vec<String>, additions: &[String]) {
    for name in additions {
        if !names.iter().any(|existing| existing == name) {
            names.push(name.clone());
        }
    }
}

/// Builtin extension associations: `(extension, parsers, included files)`.
const BUILTIN_ASSOCIATIONS: &[(&str, &[&str], &[&str])] = &[
    (".bash", &["coffeeParser"], &[]),
    (".c", &["defaultParser"], &[]),
    (".cjs", &["defaultParser"], &[]),
    (".cjsx", &["coffeeParser"], &[]),
    (".clj", &["clojureParser"], &[]),
    (".cljs", &["clojureParser"], &[]),
    (".cljc", &["clojureParser"], &[]),
    (".coffee", &["coffeeParser"], &[]),
    (".cpp", &["defaultParser"], &[]),
    (".cr", &["coffeeParser"], &[]),
    (".cs", &["defaultParser"], &[]),
    (".cson", &["coffeeParser"], &[]),
    (".css", &["defaultParser"], &[]),
    (".ctp", &["defaultParser"], &[".html", ".js", ".css"]),
    (".cts", &["defaultParser"], &[]),
    (".ejs", &["ejsParser"], &[]),
    (".erb", &["ejsParser"], &[]),
    (".erl", &["erlangParser"], &[]),
    (".es", &["defaultParser"], &[]),
    (".es6", &["defaultParser"], &[]),
    (".ex", &["coffeeParser"], &[]),
    (".exs", &["coffeeParser"], &[]),
    (".fs", &["fsharpParser"], &[]),
    (".gd", &["coffeeParser"], &[]),
    (".go", &["defaultParser"], &[]),
    (".h", &["defaultParser"], &[]),
    (".haml", &["hamlParser"], &[]),
    (".handlebars", &["hbsParser"], &[]),
    (".hbs", &["hbsParser"], &[]),
    (".hcl", &["defaultParser", "coffeeParser"], &[]),
    (".hgn", &["hbsParser"], &[]),
    (".hogan", &["hbsParser"], &[]),
    (".hrl", &["erlangParser"], &[]),
    (".hs", &["haskellParser"], &[]),
    (".htm", &["twigParser"], &[]),
    (".html", &["twigParser"], &[]),
    (".jade", &["jadeParser"], &[]),
    (".java", &["defaultParser"], &[]),
    (".jl", &["pythonParser"], &[]),
    (".js", &["defaultParser"], &[]),
    (".jsx", &["defaultParser"], &[]),
    (".kt", &["defaultParser"], &[]),
    (".less", &["defaultParser"], &[]),
    (".lua", &["luaParser"], &[]),
    (".m", &["defaultParser"], &[]),
    (".markdown", &["twigParser"], &[]),
    (".md", &["twigParser"], &[]),
    (".mjs", &["defaultParser"], &[]),
    (".mm", &["defaultParser"], &[]),
    (".mts", &["defaultParser"], &[]),
    (".mustache", &["hbsParser"], &[]),
    (".njk", &["twigParser"], &[]),
    (".pas", &["pascalParser"], &[]),
    (".php", &["defaultParser"], &[".html", ".js", ".css"]),
    (".pl", &["coffeeParser"], &[]),
    (".pm", &["coffeeParser"], &[]),
    (".proto", &["defaultParser"], &[]),
    (".pug", &["jadeParser"], &[]),
    (".py", &["pythonParser"], &[]),
    (".rb", &["coffeeParser"], &[]),
    (".rs", &["defaultParser"], &[]),
    (".sass", &["defaultParser"], &[]),
    (".scala", &["defaultParser"], &[]),
    (".scss", &["defaultParser"], &[]),
    (".sh", &["coffeeParser"], &[]),
    (".sql", &["defaultParser", "haskellParser"], &[]),
    (".ss", &["ssParser"], &[]),
    (".styl", &["defaultParser"], &[]),
    (".svelte", &["twigParser"], &[".html", ".js", ".css"]),
    (".swift", &["defaultParser"], &[]),
    (".tex", &["latexParser"], &[]),
    (".tf", &["defaultParser", "coffeeParser"], &[]),
    (".ts", &["defaultParser"], &[]),
    (".tsx", &["defaultParser"], &[]),
    (".twig", &["twigParser"], &[]),
    (".vue", &["twigParser"], &[".html", ".js", ".css"]),
    (".yaml", &["coffeeParser"], &[]),
    (".yml", &["coffeeParser"], &[]),
    (".zsh", &["coffeeParser"], &[]),
];
