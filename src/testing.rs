//! Tree outline helpers.
//!
//! Functions for converting a materialized widget tree into a plain-text
//! outline suitable for snapshot testing and assertions. One node per line,
//! two-space indentation per depth level: the widget type, then `#id` if the
//! node carries one, then the widget's own summary after a colon.

use crate::tree::{NodeId, WidgetTree};
use crate::widget::Widget;

/// Render the subtree rooted at `root` as an indented outline.
pub fn outline(tree: &WidgetTree, root: NodeId) -> String {
    let mut out = String::new();
    write_node(tree, root, 0, &mut out);
    out
}

/// Render several roots (e.g. the result of a parse) as one outline.
pub fn outline_all(tree: &WidgetTree, roots: &[NodeId]) -> String {
    let mut out = String::new();
    for &root in roots {
        write_node(tree, root, 0, &mut out);
    }
    out
}

fn write_node(tree: &WidgetTree, id: NodeId, depth: usize, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(node.widget.widget_type());
    if let Some(markup_id) = &node.id {
        out.push_str(" #");
        out.push_str(markup_id);
    }
    if let Some(summary) = node.widget.summary() {
        out.push_str(": ");
        out.push_str(&summary);
    }
    out.push('\n');
    for &child in tree.children(id) {
        write_node(tree, child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Node;
    use crate::widgets::{Label, Panel};

    #[test]
    fn outline_shows_structure_ids_and_summaries() {
        let mut tree = WidgetTree::new();
        let root = tree.insert_node(Node::with_id(
            Box::new(Panel::default()),
            Some("menu".into()),
        ));
        let child = tree.insert(Box::new(Label::new("Start")));
        tree.attach(root, child);

        assert_eq!(outline(&tree, root), "Panel #menu\n  Label: Start\n");
    }

    #[test]
    fn outline_all_joins_roots() {
        let mut tree = WidgetTree::new();
        let a = tree.insert(Box::new(Label::new("a")));
        let b = tree.insert(Box::new(Label::new("b")));
        assert_eq!(outline_all(&tree, &[a, b]), "Label: a\nLabel: b\n");
    }
}
