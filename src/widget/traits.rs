//! Widget trait: the engine-facing surface of every UI element.
//!
//! `Widget` is the seam between the markup engine and the host toolkit. The
//! engine never sees concrete widget types; it drives construction through
//! registered constructor closures and talks to the result exclusively
//! through this object-safe trait. Structural concerns (who may contain whom,
//! how children are appended) are resolved once per widget via
//! [`ContainerKind`] instead of scattered downcasts.

use std::any::Any;

use crate::geometry::Spacing;
use crate::tree::{NodeId, WidgetTree};
use crate::widget::cell::CellSettings;

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all widgets materialized from markup.
///
/// Object-safe: core methods use `&self`/`&mut self` and owned returns.
pub trait Widget: 'static {
    /// The markup-facing type name for this widget (e.g. "Label", "Table").
    fn widget_type(&self) -> &str;

    /// Structural capability: which container family this widget belongs to,
    /// or `None` for leaf widgets that reject children.
    fn container(&self) -> Option<ContainerKind> {
        None
    }

    /// Offer one line of plain markup text to this widget.
    ///
    /// Text-bearing widgets accept it (appending as multi-line text) and
    /// return `true`; the default rejects, which makes the engine fall back
    /// to the container text policy.
    fn append_text(&mut self, line: &str) -> bool {
        let _ = line;
        false
    }

    /// Record the staged cell settings of a newly attached child.
    ///
    /// Only meaningful for [`ContainerKind::Table`] widgets; the default
    /// discards the settings.
    fn add_cell(&mut self, child: NodeId, settings: CellSettings) {
        let _ = (child, settings);
    }

    /// Apply padding to the widget itself. Returns `false` when the widget
    /// has no padding concept, letting the attribute handler report it.
    fn set_padding(&mut self, pad: Spacing) -> bool {
        let _ = pad;
        false
    }

    /// Layout finalize hook, invoked exactly once when the widget's tag
    /// closes. Defaults to a no-op.
    fn pack(&mut self) {}

    /// Short human-readable state for diagnostics and tree outlines.
    fn summary(&self) -> Option<String> {
        None
    }

    /// Downcast to `&dyn Any` for host-side type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any` for host-side mutation.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// Container adapter
// ---------------------------------------------------------------------------

/// Container families with distinct child-append policies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    /// Generic group: children are appended in order, nothing else.
    Group,
    /// Table-like: each child occupies a layout cell with staged settings.
    Table,
    /// Tree-like: each child becomes a tree node.
    Tree,
}

impl ContainerKind {
    /// Append `child` to `parent` in the arena using this kind's policy.
    ///
    /// The structural edge always lands in the arena; table-kind parents
    /// additionally record the staged cell settings.
    pub fn append(
        self,
        tree: &mut WidgetTree,
        parent: NodeId,
        child: NodeId,
        settings: CellSettings,
    ) {
        tree.attach(parent, child);
        if self == ContainerKind::Table {
            if let Some(widget) = tree.widget_mut(parent) {
                widget.add_cell(child, settings);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Label, Panel, Table};

    #[test]
    fn leaf_defaults() {
        let mut label = Label::new("x");
        assert!(label.container().is_none());
        assert!(!label.set_padding(Spacing::all(1.0)));
    }

    #[test]
    fn group_append_attaches() {
        let mut tree = WidgetTree::new();
        let parent = tree.insert(Box::new(Panel::default()));
        let child = tree.insert(Box::new(Label::new("a")));

        ContainerKind::Group.append(&mut tree, parent, child, CellSettings::default());
        assert_eq!(tree.children(parent), &[child]);
        assert_eq!(tree.parent(child), Some(parent));
    }

    #[test]
    fn table_append_records_cell() {
        let mut tree = WidgetTree::new();
        let parent = tree.insert(Box::new(Table::default()));
        let child = tree.insert(Box::new(Label::new("a")));

        let settings = CellSettings {
            colspan: 2,
            ..CellSettings::default()
        };
        ContainerKind::Table.append(&mut tree, parent, child, settings);

        let table = tree
            .widget(parent)
            .unwrap()
            .as_any()
            .downcast_ref::<Table>()
            .unwrap();
        assert_eq!(table.cells().len(), 1);
        assert_eq!(table.cells()[0].settings.colspan, 2);
    }
}
