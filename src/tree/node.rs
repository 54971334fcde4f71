//! Node types: NodeId, Node.

use slotmap::new_key_type;

use crate::widget::Widget;

new_key_type! {
    /// Unique identifier for a materialized widget. Copy, lightweight (u64).
    pub struct NodeId;
}

/// One materialized widget plus its engine-level flags.
pub struct Node {
    /// The host widget, reachable only through the [`Widget`] trait.
    pub widget: Box<dyn Widget>,
    /// Optional unique id assigned from markup, for [`crate::tree::WidgetTree::by_id`].
    pub id: Option<String>,
    /// Whether this node is visible.
    pub visible: bool,
    /// Whether this node is disabled.
    pub disabled: bool,
}

impl Node {
    /// Wrap a widget with default flags.
    pub fn new(widget: Box<dyn Widget>) -> Self {
        Self {
            widget,
            id: None,
            visible: true,
            disabled: false,
        }
    }

    /// Wrap a widget carrying an id from its builder.
    pub fn with_id(widget: Box<dyn Widget>, id: Option<String>) -> Self {
        Self {
            widget,
            id,
            visible: true,
            disabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;

    #[test]
    fn new_defaults() {
        let node = Node::new(Box::new(Label::new("x")));
        assert!(node.id.is_none());
        assert!(node.visible);
        assert!(!node.disabled);
        assert_eq!(node.widget.widget_type(), "Label");
    }

    #[test]
    fn node_id_is_copy() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<NodeId>();
    }
}
