//! Tag provider registry: tag name → construction strategy.
//!
//! Actor tags and macro tags live in separate namespaces (the macro marker
//! on the invocation picks the namespace), mirroring the language this
//! engine interprets. Registration is last-write-wins with no error on
//! overwrite, which is what lets templates shadow built-ins via the
//! dynamic-registration macro. Names are matched case-insensitively.

use std::collections::HashMap;
use std::rc::Rc;

use crate::action::{BuilderFactory, WidgetConstructor};
use crate::macros::import::ImportStrategy;
use crate::widget::{Builder, Widget};

/// Construction strategy for an actor tag: how to stage and build its widget.
///
/// This is the whole provider: container kind, child policy, and the pack
/// step are all derived from the widget the constructor returns, so built-in
/// and dynamically registered tags behave identically.
#[derive(Clone)]
pub struct WidgetSpec {
    /// Builds the widget from staged builder data.
    pub constructor: WidgetConstructor,
    /// Optional factory for a pre-configured builder.
    pub builder: Option<BuilderFactory>,
}

impl WidgetSpec {
    pub fn new<F>(constructor: F) -> Self
    where
        F: Fn(&Builder) -> Box<dyn Widget> + 'static,
    {
        Self {
            constructor: Rc::new(constructor),
            builder: None,
        }
    }

    /// Wrap a concrete-widget constructor, boxing its result.
    pub fn of<W, F>(make: F) -> Self
    where
        W: Widget,
        F: Fn(&Builder) -> W + 'static,
    {
        Self::new(move |builder| Box::new(make(builder)) as Box<dyn Widget>)
    }

    pub fn with_builder<F>(mut self, factory: F) -> Self
    where
        F: Fn() -> Builder + 'static,
    {
        self.builder = Some(Rc::new(factory));
        self
    }

    /// Stage a builder for this spec: the registered factory, or defaults.
    pub fn stage(&self) -> Builder {
        self.builder.as_ref().map_or_else(Builder::new, |f| f())
    }
}

/// Behavior of a built-in macro tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MacroSpec {
    /// Short-circuit disjunction; body included only when it holds.
    Conditional,
    /// Private-argument rewrite of the body.
    Replace,
    /// Template splice from one of the resolver strategies.
    Import(ImportStrategy),
    /// Dynamic actor-tag registration.
    NewTag,
}

/// Name → provider maps for one parser session.
#[derive(Default)]
pub struct TagRegistry {
    tags: HashMap<String, WidgetSpec>,
    macros: HashMap<String, MacroSpec>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind every name to the actor-tag spec. Overwrites silently.
    pub fn register_tag<I, S>(&mut self, names: I, spec: WidgetSpec)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.tags
                .insert(name.as_ref().to_ascii_lowercase(), spec.clone());
        }
    }

    /// Bind every name to the macro spec. Overwrites silently.
    pub fn register_macro<I, S>(&mut self, names: I, spec: MacroSpec)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.macros
                .insert(name.as_ref().to_ascii_lowercase(), spec);
        }
    }

    /// Look up an actor-tag provider.
    pub fn tag(&self, name: &str) -> Option<WidgetSpec> {
        self.tags.get(&name.to_ascii_lowercase()).cloned()
    }

    /// Look up a macro provider.
    pub fn macro_spec(&self, name: &str) -> Option<MacroSpec> {
        self.macros.get(&name.to_ascii_lowercase()).copied()
    }

    /// Whether an actor tag with this name is registered.
    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains_key(&name.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::{Label, Panel};

    fn label_spec() -> WidgetSpec {
        WidgetSpec::new(|builder| Box::new(Label::from_builder(builder)))
    }

    #[test]
    fn register_binds_every_alias() {
        let mut registry = TagRegistry::new();
        registry.register_tag(["label", "text"], label_spec());
        assert!(registry.has_tag("label"));
        assert!(registry.has_tag("text"));
        assert!(!registry.has_tag("panel"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut registry = TagRegistry::new();
        registry.register_tag(["Label"], label_spec());
        assert!(registry.tag("LABEL").is_some());
        assert!(registry.tag("label").is_some());
    }

    #[test]
    fn last_write_wins() {
        let mut registry = TagRegistry::new();
        registry.register_tag(["x"], label_spec());
        registry.register_tag(
            ["x"],
            WidgetSpec::new(|builder| Box::new(Panel::from_builder(builder))),
        );
        let spec = registry.tag("x").unwrap();
        let widget = (spec.constructor)(&Builder::new());
        assert_eq!(widget.widget_type(), "Panel");
    }

    #[test]
    fn macro_namespace_is_separate() {
        let mut registry = TagRegistry::new();
        registry.register_tag(["any"], label_spec());
        registry.register_macro(["any"], MacroSpec::Conditional);
        assert!(registry.tag("any").is_some());
        assert_eq!(registry.macro_spec("any"), Some(MacroSpec::Conditional));
        assert!(registry.macro_spec("label").is_none());
    }

    #[test]
    fn staged_builder_uses_factory() {
        let spec = label_spec().with_builder(|| Builder::new().with_text("preset"));
        assert_eq!(spec.stage().text(), "preset");
        assert_eq!(label_spec().stage().text(), "");
    }
}
