//! Macro tags: parse-time control flow.
//!
//! Macros never produce widgets. They read their positional attributes and
//! captured raw body, then either rewrite the template stream (conditional
//! inclusion, argument replacement, import splicing) or mutate parser-level
//! registries (dynamic tag registration). Whatever a macro emits is appended
//! to the template reader under a diagnostic label and re-parsed as ordinary
//! markup.

pub mod conditional;
pub mod import;
pub mod new_tag;
pub mod replace;

use crate::error::ParseError;
use crate::parser::Parser;
use crate::tag::{MacroSpec, Tag, TagKind};

/// Run a macro tag's close behavior. Called by the parser as soon as the
/// macro's body has been captured; macros never sit on the tag stack.
pub(crate) fn close_macro(parser: &mut Parser, tag: &Tag) -> Result<(), ParseError> {
    let spec = match &tag.kind {
        TagKind::Macro(spec) => *spec,
        TagKind::Actor(_) => {
            debug_assert!(false, "close_macro invoked with an actor tag");
            return Ok(());
        }
    };
    match spec {
        MacroSpec::Conditional => conditional::close(parser, tag),
        MacroSpec::Replace => replace::close(parser, tag),
        MacroSpec::Import(strategy) => import::close(parser, tag, strategy),
        MacroSpec::NewTag => new_tag::close(parser, tag),
    }
}

/// Diagnostic label for text a macro feeds back into the reader.
pub(crate) fn expansion_label(macro_name: &str) -> String {
    format!("'{macro_name}' macro result")
}
