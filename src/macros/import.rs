//! Import macros: resolve a template source and splice its contents into
//! the current parse stream.
//!
//! Three resolver strategies share the [`TemplateResolver`] contract:
//! bundled in-memory templates registered by the host, absolute filesystem
//! paths, and paths relative to a configured base directory. A source is
//! fully read and released before the macro returns; cyclic imports are
//! detected by source label and fail fatally.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::ParseError;
use crate::parser::Parser;
use crate::syntax::substitution::substitute;
use crate::tag::Tag;

/// Which resolver an import macro uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ImportStrategy {
    /// In-memory templates registered on the session (host-embedded).
    Bundled,
    /// Absolute filesystem paths.
    Absolute,
    /// Paths relative to the configured base directory.
    Relative,
}

/// Resolves a template name to its full text.
pub trait TemplateResolver {
    fn resolve(&self, name: &str) -> Result<String, ParseError>;
}

fn resolution_error(name: &str, message: impl ToString) -> ParseError {
    ParseError::ImportResolution {
        template: name.to_string(),
        message: message.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Resolvers
// ---------------------------------------------------------------------------

/// Templates registered in memory, typically via `include_str!`.
#[derive(Default)]
pub struct BundledResolver {
    templates: HashMap<String, String>,
}

impl BundledResolver {
    /// Register a template under a name. Last write wins.
    pub fn register(&mut self, name: &str, content: &str) {
        self.templates
            .insert(name.to_string(), content.to_string());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }
}

impl TemplateResolver for BundledResolver {
    fn resolve(&self, name: &str) -> Result<String, ParseError> {
        self.templates
            .get(name)
            .cloned()
            .ok_or_else(|| resolution_error(name, "no bundled template with this name"))
    }
}

/// Reads templates from absolute filesystem paths.
#[derive(Default)]
pub struct AbsoluteResolver;

impl TemplateResolver for AbsoluteResolver {
    fn resolve(&self, name: &str) -> Result<String, ParseError> {
        std::fs::read_to_string(name).map_err(|e| resolution_error(name, e))
    }
}

/// Reads templates relative to a base directory.
pub struct RelativeResolver {
    base: PathBuf,
}

impl Default for RelativeResolver {
    fn default() -> Self {
        Self {
            base: PathBuf::from("."),
        }
    }
}

impl RelativeResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn set_base(&mut self, base: impl Into<PathBuf>) {
        self.base = base.into();
    }
}

impl TemplateResolver for RelativeResolver {
    fn resolve(&self, name: &str) -> Result<String, ParseError> {
        let path = self.base.join(name);
        std::fs::read_to_string(&path).map_err(|e| resolution_error(name, e))
    }
}

/// The session's resolver set, one per strategy.
#[derive(Default)]
pub struct Importers {
    pub bundled: BundledResolver,
    pub absolute: AbsoluteResolver,
    pub relative: RelativeResolver,
}

impl Importers {
    pub fn resolver(&self, strategy: ImportStrategy) -> &dyn TemplateResolver {
        match strategy {
            ImportStrategy::Bundled => &self.bundled,
            ImportStrategy::Absolute => &self.absolute,
            ImportStrategy::Relative => &self.relative,
        }
    }
}

// ---------------------------------------------------------------------------
// The macro
// ---------------------------------------------------------------------------

pub(crate) fn close(
    parser: &mut Parser,
    tag: &Tag,
    strategy: ImportStrategy,
) -> Result<(), ParseError> {
    if tag.attributes().is_empty() {
        return Err(ParseError::MalformedMacro {
            name: tag.name().to_string(),
            message: "expected a template name attribute".to_string(),
        });
    }

    let (template, body_argument) = {
        let services = parser.services();
        let template = services.parse_string(&tag.attributes()[0], None);
        let body_argument = tag
            .attributes()
            .get(1)
            .map(|raw| services.parse_string(raw, None));
        (template, body_argument)
    };

    if parser.reader.has_source(&template) {
        return Err(ParseError::CyclicImport {
            chain: format!("{} -> {}", parser.reader.label_chain(), template),
            template,
        });
    }

    let mut content = parser.importers.resolver(strategy).resolve(&template)?;

    // Optional second attribute: the macro's body becomes the value of one
    // macro-private argument inside the imported text.
    if let Some(argument) = body_argument {
        let mut private = HashMap::new();
        private.insert(argument, tag.body().to_string());
        content = substitute(&content, &private, &parser.syntax);
    }

    // Document-level arguments apply to spliced text exactly as they did to
    // the main template when it entered the reader.
    content = substitute(&content, &parser.arguments, &parser.syntax);

    log::debug!("importing template '{template}' ({strategy:?})");
    parser.reader.append(&content, &template)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_resolution() {
        let mut resolver = BundledResolver::default();
        resolver.register("row.lml", "<label>row</label>");
        assert!(resolver.contains("row.lml"));
        assert_eq!(resolver.resolve("row.lml").unwrap(), "<label>row</label>");
    }

    #[test]
    fn bundled_miss_is_resolution_error() {
        let resolver = BundledResolver::default();
        let err = resolver.resolve("missing.lml").unwrap_err();
        assert!(matches!(err, ParseError::ImportResolution { .. }));
    }

    #[test]
    fn absolute_miss_is_resolution_error() {
        let err = AbsoluteResolver
            .resolve("/definitely/not/here.lml")
            .unwrap_err();
        assert!(matches!(err, ParseError::ImportResolution { .. }));
    }

    #[test]
    fn relative_joins_base() {
        let resolver = RelativeResolver::new("/definitely/not");
        let err = resolver.resolve("here.lml").unwrap_err();
        match err {
            ParseError::ImportResolution { template, .. } => {
                assert_eq!(template, "here.lml");
            }
            other => panic!("expected ImportResolution, got {other:?}"),
        }
    }

    #[test]
    fn importers_pick_by_strategy() {
        let mut importers = Importers::default();
        importers.bundled.register("a", "content");
        assert!(importers
            .resolver(ImportStrategy::Bundled)
            .resolve("a")
            .is_ok());
        assert!(importers
            .resolver(ImportStrategy::Absolute)
            .resolve("a")
            .is_err());
    }
}
