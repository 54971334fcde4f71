//! Attribute dispatch: attribute name → scoped handler.
//!
//! Handlers come in two scopes. *Widget* handlers mutate the node or its
//! widget. *Cell* handlers mutate the staged [`CellSettings`] of a tag whose
//! parent is a table-kind container; when such a context exists and a cell
//! handler is registered for the name, it wins. A name with no handler in
//! either scope is a collected parse error, never a silent skip, so
//! template typos surface early.

pub mod handlers;

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ParseError;
use crate::parser::Services;
use crate::tree::Node;
use crate::widget::{CellSettings, Widget};

/// Handler mutating the target node/widget from raw attribute text.
pub type WidgetHandler =
    Rc<dyn Fn(&Services, &str, &mut Node, &str) -> Result<(), ParseError>>;

/// Handler mutating the staged cell settings from raw attribute text.
pub type CellHandler =
    Rc<dyn Fn(&Services, &str, &mut CellSettings, &dyn Widget, &str) -> Result<(), ParseError>>;

/// Scoped attribute handler maps for one parser session. Names are matched
/// case-insensitively.
#[derive(Default)]
pub struct AttributeRegistry {
    widget: HashMap<String, WidgetHandler>,
    cell: HashMap<String, CellHandler>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget-scoped handler. Last write wins.
    pub fn register_widget<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&Services, &str, &mut Node, &str) -> Result<(), ParseError> + 'static,
    {
        self.widget
            .insert(name.to_ascii_lowercase(), Rc::new(handler));
    }

    /// Register a cell-scoped handler. Last write wins.
    pub fn register_cell<F>(&mut self, name: &str, handler: F)
    where
        F: Fn(&Services, &str, &mut CellSettings, &dyn Widget, &str) -> Result<(), ParseError>
            + 'static,
    {
        self.cell.insert(name.to_ascii_lowercase(), Rc::new(handler));
    }

    /// Invoke the handler for `name` against `node` (and the staged cell,
    /// when the tag sits in a table-cell context).
    pub fn dispatch(
        &self,
        services: &Services,
        tag: &str,
        node: &mut Node,
        cell: Option<&mut CellSettings>,
        name: &str,
        raw: &str,
    ) -> Result<(), ParseError> {
        let key = name.to_ascii_lowercase();
        if let Some(cell) = cell {
            if let Some(handler) = self.cell.get(&key) {
                return handler(services, tag, cell, &*node.widget, raw);
            }
        }
        if let Some(handler) = self.widget.get(&key) {
            return handler(services, tag, node, raw);
        }
        Err(ParseError::UnknownAttribute {
            tag: tag.to_string(),
            attribute: name.to_string(),
        })
    }

    pub fn has_widget_handler(&self, name: &str) -> bool {
        self.widget.contains_key(&name.to_ascii_lowercase())
    }

    pub fn has_cell_handler(&self, name: &str) -> bool {
        self.cell.contains_key(&name.to_ascii_lowercase())
    }
}
