//! Conditional macro: short-circuiting disjunction over positional
//! attributes; the body is re-emitted only when it holds.

use crate::error::ParseError;
use crate::macros::expansion_label;
use crate::parser::{Parser, Services};
use crate::tag::Tag;
use crate::widget::Widget;

/// The "null or false" test: absent, blank, `"null"`, or `"false"`
/// (case-insensitive). Everything else counts as true.
pub fn is_null_or_false(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(text) => {
            let text = text.trim();
            text.is_empty()
                || text.eq_ignore_ascii_case("null")
                || text.eq_ignore_ascii_case("false")
        }
    }
}

/// Evaluate the disjunction. An attribute that references a registered value
/// action is invoked and its result tested; otherwise the literal attribute
/// text is tested. First truthy attribute short-circuits. Zero attributes
/// evaluate to false.
pub(crate) fn evaluate(
    services: &Services,
    attributes: &[String],
    widget: Option<&dyn Widget>,
) -> bool {
    for attribute in attributes {
        if services.is_value_action(attribute) {
            let result = services
                .invoke_value_action(attribute, widget)
                .unwrap_or(None);
            if !is_null_or_false(result.as_deref()) {
                return true;
            }
        } else {
            let literal = services.parse_string(attribute, widget);
            if !is_null_or_false(Some(&literal)) {
                return true;
            }
        }
    }
    false
}

pub(crate) fn close(parser: &mut Parser, tag: &Tag) -> Result<(), ParseError> {
    let passed = {
        let services = parser.services();
        let widget = tag.widget_id().and_then(|id| parser.tree.widget(id));
        evaluate(&services, tag.attributes(), widget)
    };
    if passed {
        parser
            .reader
            .append(tag.body(), &expansion_label(tag.name()))?;
    }
    Ok(())
}
