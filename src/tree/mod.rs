//! The widget arena: insert, attach, remove, walk, query.
//!
//! All materialized widgets live in a single `SlotMap`. Parent/child edges
//! are stored in secondary maps so that subtree removal is O(subtree size)
//! and lookup is O(1). Nodes are inserted *detached* and attached once their
//! parent's add-child policy accepts them, matching the tag lifecycle.

pub mod node;

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

pub use node::{Node, NodeId};

use crate::widget::Widget;

/// Empty slice constant for returning when a node has no children.
const EMPTY_CHILDREN: &[NodeId] = &[];

/// Arena of materialized widgets for one parser session.
#[derive(Default)]
pub struct WidgetTree {
    nodes: SlotMap<NodeId, Node>,
    children: SecondaryMap<NodeId, Vec<NodeId>>,
    parent: SecondaryMap<NodeId, NodeId>,
}

impl WidgetTree {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a detached node wrapping `widget`.
    pub fn insert(&mut self, widget: Box<dyn Widget>) -> NodeId {
        self.insert_node(Node::new(widget))
    }

    /// Insert a detached, fully populated node.
    pub fn insert_node(&mut self, node: Node) -> NodeId {
        let id = self.nodes.insert(node);
        self.children.insert(id, Vec::new());
        id
    }

    /// Attach `child` as the last child of `parent`, detaching it from any
    /// previous parent first. The subtree below `child` moves intact.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes.contains_key(parent), "parent does not exist");
        debug_assert!(self.nodes.contains_key(child), "child does not exist");

        if let Some(old_parent) = self.parent.remove(child) {
            if let Some(siblings) = self.children.get_mut(old_parent) {
                siblings.retain(|&c| c != child);
            }
        }

        self.parent.insert(child, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have a children vec")
            .push(child);
    }

    /// Remove a node and all its descendants.
    ///
    /// Returns the removed root [`Node`], or `None` if it did not exist.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }

        let mut queue = VecDeque::new();
        queue.push_back(id);
        let mut removed_root = None;

        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                for &child in &kids {
                    queue.push_back(child);
                }
            }
            self.parent.remove(current);
            let node = self.nodes.remove(current);
            if current == id {
                removed_root = node;
            }
        }

        removed_root
    }

    /// Get the node behind `id`.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Get the node behind `id`, mutably.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// Convenience: the widget behind `id`.
    pub fn widget(&self, id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(id).map(|n| &*n.widget)
    }

    /// Convenience: the widget behind `id`, mutably.
    pub fn widget_mut(&mut self, id: NodeId) -> Option<&mut (dyn Widget + 'static)> {
        self.nodes.get_mut(id).map(|n| &mut *n.widget)
    }

    /// Children of `id`, in attach order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.children.get(id).map_or(EMPTY_CHILDREN, Vec::as_slice)
    }

    /// Parent of `id`, if attached.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parent.get(id).copied()
    }

    /// Whether `id` refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first preorder walk of the subtree rooted at `root`.
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            order.push(current);
            for &child in self.children(current).iter().rev() {
                stack.push(child);
            }
        }
        order
    }

    /// Find the first node carrying the given markup id.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .find(|(_, node)| node.id.as_deref() == Some(id))
            .map(|(key, _)| key)
    }
}
