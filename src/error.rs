//! Parse error taxonomy.
//!
//! Errors come in two propagation classes. *Fatal* errors make the rest of
//! the document uninterpretable (an unknown tag, a broken macro invocation,
//! an unresolvable import) and abort the whole parse via `Result`. *Recoverable*
//! errors are scoped to a single tag (unknown attribute, rejected child) and
//! are collected on the parser session while parsing continues; callers can
//! inspect them through [`crate::parser::Parser::errors`].

/// Everything that can go wrong while interpreting an LML template.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No provider registered for a tag name. Fatal: without a provider the
    /// document structure cannot be recovered.
    #[error("unknown tag '{name}' in {origin}")]
    UnknownTag { name: String, origin: String },

    /// No handler registered for an attribute on an otherwise valid tag.
    /// Collected, so template typos surface instead of being silently skipped.
    #[error("unknown attribute '{attribute}' on tag '{tag}'")]
    UnknownAttribute { tag: String, attribute: String },

    /// A macro invoked with the wrong arity or an unresolvable action
    /// reference. Fatal.
    #[error("malformed macro '{name}': {message}")]
    MalformedMacro { name: String, message: String },

    /// An imported template could not be resolved or read. Fatal.
    #[error("cannot import '{template}': {message}")]
    ImportResolution { template: String, message: String },

    /// A template transitively imports itself. Fatal.
    #[error("cyclic import of '{template}' via {chain}")]
    CyclicImport { template: String, chain: String },

    /// A child tag (or plain text) offered to a widget that cannot accept it.
    /// Collected; the offending subtree is dropped.
    #[error("'{child}' cannot be nested in '{parent}': {message}")]
    MalformedNesting {
        parent: String,
        child: String,
        message: String,
    },

    /// An attribute value that does not parse as the expected type. Collected.
    #[error("invalid value '{value}', expected {expected}")]
    MalformedValue { value: String, expected: String },

    /// A closing tag with no matching open tag. Collected and ignored.
    #[error("closing tag '{name}' does not match any open tag")]
    UnbalancedTag { name: String },

    /// An open tag that was implicitly closed by an outer closing tag or by
    /// the end of the template. Collected; the tag is force-closed.
    #[error("tag '{name}' was never explicitly closed")]
    UnclosedTag { name: String },

    /// Tag nesting or macro/import expansion exceeded the configured depth
    /// guard. Fatal, reported instead of overflowing the call stack.
    #[error("markup nesting exceeds the maximum depth of {limit}")]
    NestingTooDeep { limit: usize },

    /// The template ended in the middle of a tag or macro body. Fatal.
    #[error("unterminated tag near '{context}' in {origin}")]
    UnterminatedTag { context: String, origin: String },
}

impl ParseError {
    /// Whether this error aborts the entire parse rather than a single tag.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ParseError::UnknownTag { .. }
                | ParseError::MalformedMacro { .. }
                | ParseError::ImportResolution { .. }
                | ParseError::CyclicImport { .. }
                | ParseError::NestingTooDeep { .. }
                | ParseError::UnterminatedTag { .. }
        )
    }
}
