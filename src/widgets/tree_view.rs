//! TreeView: the tree-structured container.

use std::any::Any;

use crate::widget::{Builder, ContainerKind, Widget};

/// A container whose children form expandable tree nodes. Node structure
/// lives in the arena; the widget keeps presentation state only.
#[derive(Debug, Clone, Default)]
pub struct TreeView {
    style: String,
    indent: f32,
}

impl TreeView {
    pub fn from_builder(builder: &Builder) -> Self {
        Self {
            style: builder.style().to_string(),
            indent: 16.0,
        }
    }

    pub fn style(&self) -> &str {
        &self.style
    }

    pub fn indent(&self) -> f32 {
        self.indent
    }
}

impl Widget for TreeView {
    fn widget_type(&self) -> &str {
        "TreeView"
    }

    fn container(&self) -> Option<ContainerKind> {
        Some(ContainerKind::Tree)
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
    fn is_tree_container() {
        assert_eq!(TreeView::default().container(), Some(ContainerKind::Tree));
    }
}
