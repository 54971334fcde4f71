//! Argument-replacement macro: rewrites its body with a private argument
//! map and feeds the result back into the template stream.
//!
//! The private map is built from the macro's own `name=value` attributes and
//! is never merged with the parser's document-level arguments; document
//! arguments were already substituted before the body was even captured, so
//! the two namespaces cannot bleed into each other.

use std::collections::HashMap;

use crate::error::ParseError;
use crate::macros::expansion_label;
use crate::parser::Parser;
use crate::syntax::substitution::{split_in_two, substitute};
use crate::tag::Tag;

pub(crate) fn close(parser: &mut Parser, tag: &Tag) -> Result<(), ParseError> {
    let assignment = parser.syntax.attribute_assignment.to_string();
    let mut arguments: HashMap<String, String> = HashMap::new();
    {
        let services = parser.services();
        for attribute in tag.attributes() {
            if !attribute.contains(parser.syntax.attribute_assignment) {
                return Err(ParseError::MalformedMacro {
                    name: tag.name().to_string(),
                    message: format!(
                        "expected name{assignment}value arguments, got '{attribute}'"
                    ),
                });
            }
            let (name, value) = split_in_two(attribute, &assignment);
            arguments.insert(name.to_string(), services.parse_string(value, None));
        }
    }

    let rewritten = substitute(tag.body(), &arguments, &parser.syntax);
    parser
        .reader
        .append(&rewritten, &expansion_label(tag.name()))?;
    Ok(())
}
