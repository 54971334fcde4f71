//! Shared parse services: the utilities tags, macros, and attribute handlers
//! call back into.
//!
//! `Services` borrows the session's syntax and action registry, so it can be
//! constructed freely while other parser state is being mutated.

use crate::action::ActionRegistry;
use crate::error::ParseError;
use crate::geometry::Align;
use crate::syntax::substitution::{split_array, split_in_two};
use crate::syntax::value::{self, Color};
use crate::syntax::Syntax;
use crate::widget::Widget;

/// String/number/array parsing plus action invocation for one session.
#[derive(Copy, Clone)]
pub struct Services<'a> {
    pub syntax: &'a Syntax,
    pub actions: &'a ActionRegistry,
}

impl Services<'_> {
    /// Resolve raw markup text to a string.
    ///
    /// An action reference (`$name` with a registered value action) is
    /// invoked against the widget in scope; a `None` result becomes the
    /// literal `"null"` so conditional macros can test it. Otherwise
    /// surrounding quotes are stripped and the text is returned as-is.
    pub fn parse_string(&self, raw: &str, widget: Option<&dyn Widget>) -> String {
        if let Some(name) = self.syntax.strip_action_marker(raw) {
            if let Some(action) = self.actions.value(name) {
                return action(widget).unwrap_or_else(|| "null".to_string());
            }
        }
        self.syntax.unquote(raw).to_string()
    }

    /// Whether `raw` references a registered value action.
    pub fn is_value_action(&self, raw: &str) -> bool {
        self.syntax
            .strip_action_marker(raw)
            .is_some_and(|name| self.actions.has_value(name))
    }

    /// Invoke the value action referenced by `raw`, if registered.
    pub fn invoke_value_action(
        &self,
        raw: &str,
        widget: Option<&dyn Widget>,
    ) -> Option<Option<String>> {
        let name = self.syntax.strip_action_marker(raw)?;
        let action = self.actions.value(name)?;
        Some(action(widget))
    }

    pub fn parse_bool(&self, raw: &str, widget: Option<&dyn Widget>) -> Result<bool, ParseError> {
        value::parse_bool(&self.parse_string(raw, widget))
    }

    pub fn parse_float(&self, raw: &str, widget: Option<&dyn Widget>) -> Result<f32, ParseError> {
        value::parse_float(&self.parse_string(raw, widget))
    }

    pub fn parse_int(&self, raw: &str, widget: Option<&dyn Widget>) -> Result<i32, ParseError> {
        value::parse_int(&self.parse_string(raw, widget))
    }

    pub fn parse_unsigned(
        &self,
        raw: &str,
        widget: Option<&dyn Widget>,
    ) -> Result<u32, ParseError> {
        value::parse_unsigned(&self.parse_string(raw, widget))
    }

    pub fn parse_color(&self, raw: &str, widget: Option<&dyn Widget>) -> Result<Color, ParseError> {
        value::parse_color(&self.parse_string(raw, widget))
    }

    pub fn parse_align(&self, raw: &str, widget: Option<&dyn Widget>) -> Result<Align, ParseError> {
        let resolved = self.parse_string(raw, widget);
        Align::from_name(&resolved).ok_or(ParseError::MalformedValue {
            value: resolved,
            expected: "an alignment name".to_string(),
        })
    }

    /// Parse an array literal.
    ///
    /// Elements are separated by the array separator; each element is
    /// string-resolved, then expanded if it carries a numeric range suffix:
    /// `slot[0,2]` yields `slot0`, `slot1`, `slot2` (descending ranges count
    /// down). Elements with no range pass through unchanged.
    pub fn parse_array(&self, raw: &str, widget: Option<&dyn Widget>) -> Vec<String> {
        let mut result = Vec::new();
        for element in split_array(raw, self.syntax) {
            let resolved = self.parse_string(element.trim(), widget);
            result.extend(self.expand_range(&resolved));
        }
        result
    }

    fn expand_range(&self, element: &str) -> Vec<String> {
        let syntax = self.syntax;
        let stripped = match element.strip_suffix(syntax.range_close) {
            Some(s) => s,
            None => return vec![element.to_string()],
        };
        let Some(open) = stripped.find(syntax.range_open) else {
            return vec![element.to_string()];
        };
        let base = &stripped[..open];
        let inside = &stripped[open + syntax.range_open.len_utf8()..];
        let (start, end) = split_in_two(inside, &syntax.range_separator.to_string());
        let (Ok(start), Ok(end)) = (start.trim().parse::<i64>(), end.trim().parse::<i64>()) else {
            return vec![element.to_string()];
        };

        let mut expanded = Vec::new();
        if start <= end {
            for i in start..=end {
                expanded.push(format!("{base}{i}"));
            }
        } else {
            for i in (end..=start).rev() {
                expanded.push(format!("{base}{i}"));
            }
        }
        expanded
    }
}
