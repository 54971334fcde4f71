//! Dynamic tag registration: the macro that teaches the registry new tags
//! from inside a template.
//!
//! Takes an array of tag names and a constructor action; optionally a
//! builder-factory action. The registered provider is an ordinary
//! [`WidgetSpec`], so dynamic tags get container-kind child handling, text
//! policy, and the pack step exactly like built-in tags.

use crate::error::ParseError;
use crate::parser::Parser;
use crate::syntax::Syntax;
use crate::tag::{Tag, WidgetSpec};

fn action_name(syntax: &Syntax, reference: &str) -> String {
    syntax
        .strip_action_marker(reference)
        .unwrap_or(reference)
        .to_string()
}

pub(crate) fn close(parser: &mut Parser, tag: &Tag) -> Result<(), ParseError> {
    let attributes = tag.attributes();
    if attributes.len() < 2 {
        return Err(ParseError::MalformedMacro {
            name: tag.name().to_string(),
            message: "expected at least a tag name array and a constructor action".to_string(),
        });
    }

    let names = {
        let services = parser.services();
        let widget = tag.widget_id().and_then(|id| parser.tree.widget(id));
        services.parse_array(&attributes[0], widget)
    };

    let constructor_name = action_name(&parser.syntax, &attributes[1]);
    let Some(constructor) = parser.actions.constructor(&constructor_name) else {
        return Err(ParseError::MalformedMacro {
            name: tag.name().to_string(),
            message: format!(
                "no registered constructor action '{constructor_name}' \
                 taking a builder and returning a widget"
            ),
        });
    };

    let builder = match attributes.get(2) {
        Some(reference) => {
            let builder_name = action_name(&parser.syntax, reference);
            let factory = parser.actions.builder(&builder_name).ok_or_else(|| {
                ParseError::MalformedMacro {
                    name: tag.name().to_string(),
                    message: format!("no registered builder action '{builder_name}'"),
                }
            })?;
            Some(factory)
        }
        None => None,
    };

    log::debug!("registering dynamic tags {names:?}");
    parser.tags.register_tag(&names, WidgetSpec {
        constructor,
        builder,
    });
    Ok(())
}
