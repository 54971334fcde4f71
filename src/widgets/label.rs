//! Label: the text-bearing leaf widget.

use std::any::Any;

use crate::widget::{Builder, Widget};

/// A leaf widget holding multi-line text.
#[derive(Debug, Clone, Default)]
pub struct Label {
    text: String,
    style: String,
}

impl Label {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: "default".to_string(),
        }
    }

    pub fn from_builder(builder: &Builder) -> Self {
        Self {
            text: builder.text().to_string(),
            style: builder.style().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &str {
        &self.style
    }
}

impl Widget for Label {
    fn widget_type(&self) -> &str {
        "Label"
    }

    fn append_text(&mut self, line: &str) -> bool {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
        true
    }

    fn summary(&self) -> Option<String> {
        if self.text.is_empty() {
            None
        } else {
            Some(self.text.replace('\n', "\\n"))
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_multiline() {
        let mut label = Label::new("first");
        assert!(label.append_text("second"));
        assert_eq!(label.text(), "first\nsecond");
    }

    #[test]
    fn append_into_empty_has_no_leading_newline() {
        let mut label = Label::default();
        label.append_text("only");
        assert_eq!(label.text(), "only");
    }

    #[test]
    fn from_builder_takes_text_and_style() {
        let builder = Builder::new().with_text("hi").with_style("title");
        let label = Label::from_builder(&builder);
        assert_eq!(label.text(), "hi");
        assert_eq!(label.style(), "title");
    }

    #[test]
    fn summary_escapes_newlines() {
        let mut label = Label::new("a");
        label.append_text("b");
        assert_eq!(label.summary().as_deref(), Some("a\\nb"));
    }
}
