//! Action registry: host-defined callables that markup references by name.
//!
//! Three shapes of action exist, mirroring the places markup can call out to
//! the host:
//! - *value actions* produce a string (or nothing) from the widget currently
//!   in scope; conditionals and string parsing use them,
//! - *constructors* build a widget from a [`Builder`]; built-in tags and the
//!   dynamic-registration macro use them,
//! - *builder factories* produce a pre-configured [`Builder`] for tags whose
//!   widgets need extra staging data.
//!
//! Actions are registered on the parser session; names are exact-match.

use std::collections::HashMap;
use std::rc::Rc;

use crate::widget::{Builder, Widget};

/// Produces a value from the widget currently in scope. A `None` result is
/// what conditional markup observes as "null".
pub type ValueAction = Rc<dyn Fn(Option<&dyn Widget>) -> Option<String>>;

/// Builds a widget from staged builder data.
pub type WidgetConstructor = Rc<dyn Fn(&Builder) -> Box<dyn Widget>>;

/// Produces a fresh, possibly pre-configured builder.
pub type BuilderFactory = Rc<dyn Fn() -> Builder>;

/// All actions reachable from a parser session, keyed by name.
#[derive(Default)]
pub struct ActionRegistry {
    values: HashMap<String, ValueAction>,
    constructors: HashMap<String, WidgetConstructor>,
    builders: HashMap<String, BuilderFactory>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value action. Last write wins.
    pub fn register_value<F>(&mut self, name: &str, action: F)
    where
        F: Fn(Option<&dyn Widget>) -> Option<String> + 'static,
    {
        self.values.insert(name.to_string(), Rc::new(action));
    }

    /// Register a widget constructor. Last write wins.
    pub fn register_constructor<F>(&mut self, name: &str, action: F)
    where
        F: Fn(&Builder) -> Box<dyn Widget> + 'static,
    {
        self.constructors.insert(name.to_string(), Rc::new(action));
    }

    /// Register a builder factory. Last write wins.
    pub fn register_builder<F>(&mut self, name: &str, action: F)
    where
        F: Fn() -> Builder + 'static,
    {
        self.builders.insert(name.to_string(), Rc::new(action));
    }

    pub fn value(&self, name: &str) -> Option<ValueAction> {
        self.values.get(name).cloned()
    }

    pub fn constructor(&self, name: &str) -> Option<WidgetConstructor> {
        self.constructors.get(name).cloned()
    }

    pub fn builder(&self, name: &str) -> Option<BuilderFactory> {
        self.builders.get(name).cloned()
    }

    /// Whether a value action with this name exists.
    pub fn has_value(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;

    #[test]
    fn register_and_invoke_value_action() {
        let mut actions = ActionRegistry::new();
        actions.register_value("greet", |_| Some("hello".into()));

        let action = actions.value("greet").expect("registered");
        assert_eq!(action(None), Some("hello".into()));
        assert!(actions.value("missing").is_none());
    }

    #[test]
    fn value_action_sees_the_widget() {
        let mut actions = ActionRegistry::new();
        actions.register_value("type", |widget| {
            widget.map(|w| w.widget_type().to_string())
        });

        let label = Label::new("x");
        let action = actions.value("type").unwrap();
        assert_eq!(action(Some(&label)), Some("Label".into()));
        assert_eq!(action(None), None);
    }

    #[test]
    fn register_constructor() {
        let mut actions = ActionRegistry::new();
        actions.register_constructor("makeLabel", |builder| {
            Box::new(Label::new(builder.text()))
        });
        assert!(actions.constructor("makeLabel").is_some());
        assert!(actions.constructor("makeLabel2").is_none());
    }

    #[test]
    fn last_registration_wins() {
        let mut actions = ActionRegistry::new();
        actions.register_value("x", |_| Some("first".into()));
        actions.register_value("x", |_| Some("second".into()));
        assert_eq!(actions.value("x").unwrap()(None), Some("second".into()));
    }
}
