//! Tag model: one parsed markup node and its open/close lifecycle state.
//!
//! A tag is either an *actor tag* (owns a widget, participates in the tree)
//! or a *macro tag* (no widget of its own; widget lookups delegate to the
//! nearest ancestor). Behavior differences are carried by the kind variant
//! and small strategy values, not a type hierarchy.

pub mod provider;

use crate::tree::NodeId;
use crate::widget::{CellSettings, ContainerKind};

pub use provider::{MacroSpec, TagRegistry, WidgetSpec};

/// Lifecycle state specific to actor tags.
#[derive(Debug)]
pub struct ActorState {
    /// Structural capability of the produced widget, resolved once at open.
    pub container: Option<ContainerKind>,
    /// Staged cell settings; present only when the parent widget is a
    /// table-kind container.
    pub cell: Option<CellSettings>,
}

/// What a tag does, beyond carrying attributes.
pub enum TagKind {
    Actor(ActorState),
    Macro(MacroSpec),
}

/// A parsed markup node.
pub struct Tag {
    name: String,
    raw_data: String,
    attributes: Vec<String>,
    widget: Option<NodeId>,
    parent_widget: Option<NodeId>,
    pub(crate) kind: TagKind,
    body: String,
}

impl Tag {
    /// Create an actor tag whose widget has already been materialized.
    pub(crate) fn actor(
        name: &str,
        raw_data: &str,
        attributes: Vec<String>,
        widget: NodeId,
        parent_widget: Option<NodeId>,
        state: ActorState,
    ) -> Self {
        Self {
            name: name.to_string(),
            raw_data: raw_data.to_string(),
            attributes,
            widget: Some(widget),
            parent_widget,
            kind: TagKind::Actor(state),
            body: String::new(),
        }
    }

    /// Create a macro tag with its captured raw body.
    pub(crate) fn macro_tag(
        name: &str,
        raw_data: &str,
        attributes: Vec<String>,
        parent_widget: Option<NodeId>,
        spec: MacroSpec,
        body: String,
    ) -> Self {
        Self {
            name: name.to_string(),
            raw_data: raw_data.to_string(),
            attributes,
            widget: None,
            parent_widget,
            kind: TagKind::Macro(spec),
            body,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unparsed attribute text, exactly as it appeared between the tag name
    /// and the closing marker.
    pub fn raw_data(&self) -> &str {
        &self.raw_data
    }

    /// Ordered raw attribute tokens.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// The widget this tag produced, if any. Macro tags return `None`.
    pub fn own_widget(&self) -> Option<NodeId> {
        self.widget
    }

    /// The widget in scope: the tag's own, or the nearest ancestor's for
    /// macro tags.
    pub fn widget_id(&self) -> Option<NodeId> {
        self.widget.or(self.parent_widget)
    }

    pub fn is_macro(&self) -> bool {
        matches!(self.kind, TagKind::Macro(_))
    }

    /// Container capability for actor tags.
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match &self.kind {
            TagKind::Actor(state) => state.container,
            TagKind::Macro(_) => None,
        }
    }

    /// Captured raw body (macro tags only; empty for self-closing macros).
    pub fn body(&self) -> &str {
        &self.body
    }
}
