//! Panel: the generic group container.

use std::any::Any;

use crate::geometry::Spacing;
use crate::widget::{Builder, ContainerKind, Widget};

/// A generic container that appends children in document order.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    style: String,
    padding: Spacing,
    packed: bool,
}

impl Panel {
    pub fn from_builder(builder: &Builder) -> Self {
        Self {
            style: builder.style().to_string(),
            padding: Spacing::default(),
            packed: false,
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    /// Whether the finalize hook has run.
    pub fn is_packed(&self) -> bool {
        self.packed
    }
}

impl Widget for Panel {
    fn widget_type(&self) -> &str {
        "Panel"
    }

    fn container(&self) -> Option<ContainerKind> {
        Some(ContainerKind::Group)
    }

    fn set_padding(&mut self, pad: Spacing) -> bool {
        self.padding = pad;
        true
    }

    fn pack(&mut self) {
        self.packed = true;
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
    fn is_group_container() {
        assert_eq!(Panel::default().container(), Some(ContainerKind::Group));
    }

    #[test]
    fn accepts_padding() {
        let mut panel = Panel::default();
        assert!(panel.set_padding(Spacing::all(2.0)));
        assert_eq!(panel.padding(), Spacing::all(2.0));
    }

    #[test]
    fn pack_marks_packed() {
        let mut panel = Panel::default();
        assert!(!panel.is_packed());
        panel.pack();
        assert!(panel.is_packed());
    }
}
