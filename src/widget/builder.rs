//! Builder: the staging object for widget construction.
//!
//! A builder is created fresh when an actor tag opens, mutated by *building
//! attributes* (consumed before the widget exists), handed to the registered
//! constructor closure, and discarded. Constructors read whichever fields
//! their widget kind cares about; a plain label only looks at `text` and
//! `style`, a slider reads the range bounds.

use crate::error::ParseError;
use crate::syntax::value;

/// Staged constructor parameters for one widget.
#[derive(Clone, Debug, PartialEq)]
pub struct Builder {
    style: String,
    skin: Option<String>,
    text: String,
    min: f32,
    max: f32,
    step: f32,
    value: f32,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            style: "default".to_string(),
            skin: None,
            text: String::new(),
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: 0.0,
        }
    }
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    /// Skin name, resolved opaquely by host constructors.
    pub fn skin(&self) -> Option<&str> {
        self.skin.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = style.to_string();
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_range(mut self, min: f32, max: f32, step: f32) -> Self {
        self.min = min;
        self.max = max;
        self.step = step;
        self
    }

    /// Try to consume `name=value` as a building attribute.
    ///
    /// Returns `None` when the name is not a building attribute (the caller
    /// defers it to the dispatch table), `Some(Ok(()))` when consumed, and
    /// `Some(Err(_))` when the name matched but the value did not parse.
    /// `value` must already be string-resolved (actions invoked, quotes
    /// stripped); `name` must already be lowercased.
    pub fn apply_attribute(&mut self, name: &str, value: &str) -> Option<Result<(), ParseError>> {
        match name {
            "style" => {
                self.style = value.to_string();
                Some(Ok(()))
            }
            "skin" => {
                self.skin = Some(value.to_string());
                Some(Ok(()))
            }
            "text" => {
                self.text = value.to_string();
                Some(Ok(()))
            }
            "min" => Some(value::parse_float(value).map(|v| self.min = v)),
            "max" => Some(value::parse_float(value).map(|v| self.max = v)),
            "step" => Some(value::parse_float(value).map(|v| self.step = v)),
            "value" => Some(value::parse_float(value).map(|v| self.value = v)),
            _ => None,
        }
    }
}
