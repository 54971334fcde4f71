//! Parser core: the session object and the tokenize → dispatch → build loop.
//!
//! A [`Parser`] owns everything a parse touches: the syntax configuration,
//! the tag/attribute/action registries, document-level arguments, import
//! resolvers, the widget arena, the collected recoverable errors, and the
//! template reader. Evaluation is single-threaded, synchronous, and
//! depth-first; macro expansion and imports splice text into the reader and
//! are re-parsed in document order. The registries use `Rc` internally, so a
//! session is deliberately `!Send`/`!Sync`; concurrent parses need separate
//! sessions.

pub mod reader;
pub mod services;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::action::{ActionRegistry, WidgetConstructor};
use crate::attribute::{handlers, AttributeRegistry};
use crate::error::ParseError;
use crate::macros;
use crate::macros::import::{ImportStrategy, Importers};
use crate::syntax::substitution::{split_attributes, split_in_two, substitute};
use crate::syntax::Syntax;
use crate::tag::{ActorState, MacroSpec, Tag, TagKind, TagRegistry, WidgetSpec};
use crate::tree::{NodeId, WidgetTree};
use crate::widget::{Builder, CellSettings, ContainerKind, Widget};
use crate::widgets::{Label, Panel, Slider, Table, TreeView};

pub use reader::TemplateReader;
pub use services::Services;

/// Source label of a top-level template passed in as a string.
const TEMPLATE_LABEL: &str = "template";

/// Default cap on open-tag nesting depth.
pub const DEFAULT_MAX_TAG_DEPTH: usize = 128;

/// A parse session: registries, arguments, arena, and the parse loop.
pub struct Parser {
    pub(crate) syntax: Syntax,
    pub(crate) tags: TagRegistry,
    pub(crate) attributes: AttributeRegistry,
    pub(crate) actions: ActionRegistry,
    pub(crate) arguments: HashMap<String, String>,
    pub(crate) importers: Importers,
    pub(crate) tree: WidgetTree,
    pub(crate) errors: Vec<ParseError>,
    pub(crate) reader: TemplateReader,
    label_factory: WidgetConstructor,
    stack: Vec<Tag>,
    roots: Vec<NodeId>,
    attach_root: Option<NodeId>,
    max_tag_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// A session with the default syntax and all built-ins registered.
    pub fn new() -> Self {
        Self::with_syntax(Syntax::default())
    }

    /// A session with a custom syntax configuration.
    pub fn with_syntax(syntax: Syntax) -> Self {
        let mut parser = Self {
            syntax,
            tags: TagRegistry::new(),
            attributes: AttributeRegistry::new(),
            actions: ActionRegistry::new(),
            arguments: HashMap::new(),
            importers: Importers::default(),
            tree: WidgetTree::new(),
            errors: Vec::new(),
            reader: TemplateReader::default(),
            label_factory: Rc::new(|builder: &Builder| {
                Box::new(Label::from_builder(builder)) as Box<dyn Widget>
            }),
            stack: Vec::new(),
            roots: Vec::new(),
            attach_root: None,
            max_tag_depth: DEFAULT_MAX_TAG_DEPTH,
        };
        parser.register_defaults();
        parser
    }

    fn register_defaults(&mut self) {
        self.tags
            .register_tag(["label", "text"], WidgetSpec::of(Label::from_builder));
        self.tags
            .register_tag(["panel", "group"], WidgetSpec::of(Panel::from_builder));
        self.tags
            .register_tag(["table"], WidgetSpec::of(Table::from_builder));
        self.tags
            .register_tag(["tree"], WidgetSpec::of(TreeView::from_builder));
        self.tags
            .register_tag(["slider"], WidgetSpec::of(Slider::from_builder));

        self.tags
            .register_macro(["any", "anyNotNull"], MacroSpec::Conditional);
        self.tags
            .register_macro(["replace", "arguments"], MacroSpec::Replace);
        self.tags.register_macro(
            ["import", "include"],
            MacroSpec::Import(ImportStrategy::Bundled),
        );
        self.tags.register_macro(
            ["importAbsolute"],
            MacroSpec::Import(ImportStrategy::Absolute),
        );
        self.tags.register_macro(
            ["importRelative"],
            MacroSpec::Import(ImportStrategy::Relative),
        );
        self.tags.register_macro(["newTag"], MacroSpec::NewTag);

        handlers::register_defaults(&mut self.attributes);
    }

    // ── Session configuration ────────────────────────────────────────

    pub fn syntax(&self) -> &Syntax {
        &self.syntax
    }

    /// The shared parse services, borrowing the session's syntax and actions.
    pub fn services(&self) -> Services<'_> {
        Services {
            syntax: &self.syntax,
            actions: &self.actions,
        }
    }

    /// Bind a document-level argument.
    pub fn set_argument(&mut self, name: &str, value: &str) {
        self.arguments.insert(name.to_string(), value.to_string());
    }

    pub fn argument(&self, name: &str) -> Option<&str> {
        self.arguments.get(name).map(String::as_str)
    }

    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    pub fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }

    pub fn tags(&self) -> &TagRegistry {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagRegistry {
        &mut self.tags
    }

    pub fn attributes(&self) -> &AttributeRegistry {
        &self.attributes
    }

    pub fn attributes_mut(&mut self) -> &mut AttributeRegistry {
        &mut self.attributes
    }

    /// Register an in-memory template for the bundled import strategy.
    pub fn register_template(&mut self, name: &str, content: &str) {
        self.importers.bundled.register(name, content);
    }

    /// Base directory for the relative import strategy.
    pub fn set_import_base(&mut self, base: impl Into<PathBuf>) {
        self.importers.relative.set_base(base);
    }

    /// Replace the factory used to synthesize labels from plain text inside
    /// container widgets.
    pub fn set_label_factory<F>(&mut self, factory: F)
    where
        F: Fn(&Builder) -> Box<dyn Widget> + 'static,
    {
        self.label_factory = Rc::new(factory);
    }

    pub fn set_max_tag_depth(&mut self, depth: usize) {
        self.max_tag_depth = depth;
    }

    // ── Results ──────────────────────────────────────────────────────

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    pub fn into_tree(self) -> WidgetTree {
        self.tree
    }

    /// Recoverable errors collected during the last parse.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<ParseError> {
        std::mem::take(&mut self.errors)
    }

    // ── Entry points ─────────────────────────────────────────────────

    /// Parse a template; returns the top-level nodes, left detached in the
    /// arena.
    pub fn parse(&mut self, template: &str) -> Result<Vec<NodeId>, ParseError> {
        self.parse_with_label(template, None, TEMPLATE_LABEL)
    }

    /// Parse a template, attaching every top-level node under `root` through
    /// the root widget's container adapter.
    pub fn parse_into(&mut self, template: &str, root: NodeId) -> Result<Vec<NodeId>, ParseError> {
        self.parse_with_label(template, Some(root), TEMPLATE_LABEL)
    }

    /// Read and parse a template file.
    pub fn parse_file(&mut self, path: &Path) -> Result<Vec<NodeId>, ParseError> {
        let template =
            std::fs::read_to_string(path).map_err(|e| ParseError::ImportResolution {
                template: path.display().to_string(),
                message: e.to_string(),
            })?;
        let label = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(TEMPLATE_LABEL)
            .to_string();
        self.parse_with_label(&template, None, &label)
    }

    fn parse_with_label(
        &mut self,
        template: &str,
        root: Option<NodeId>,
        label: &str,
    ) -> Result<Vec<NodeId>, ParseError> {
        self.errors.clear();
        self.stack.clear();
        self.roots.clear();
        self.attach_root = root;
        self.reader.clear();

        // Document-level arguments are substituted once, as text enters the
        // reader; imported templates get the same treatment at splice time.
        let text = substitute(template, &self.arguments, &self.syntax);
        self.reader.append(&text, label)?;

        match self.run() {
            Ok(()) => {
                while let Some(tag) = self.stack.pop() {
                    self.collect(ParseError::UnclosedTag {
                        name: tag.name().to_string(),
                    });
                    self.finish_tag(tag)?;
                }
                self.attach_root = None;
                Ok(std::mem::take(&mut self.roots))
            }
            Err(error) => {
                self.stack.clear();
                self.reader.clear();
                self.attach_root = None;
                Err(error)
            }
        }
    }

    // ── The parse loop ───────────────────────────────────────────────

    fn run(&mut self) -> Result<(), ParseError> {
        let mut text = String::new();
        while let Some(c) = self.reader.next() {
            if c == self.syntax.tag_open {
                self.flush_text(&mut text)?;
                self.handle_tag_token()?;
            } else if c == '\n' {
                self.flush_text(&mut text)?;
            } else {
                text.push(c);
            }
        }
        self.flush_text(&mut text)
    }

    fn handle_tag_token(&mut self) -> Result<(), ParseError> {
        if let Some(next) = self.reader.peek() {
            if next == self.syntax.comment_marker || next == self.syntax.schema_comment_marker {
                return self.skip_comment();
            }
        }
        let raw = self.read_tag_data()?;
        self.process_tag(&raw)
    }

    /// Raw tag text between the already-consumed opening marker and the
    /// closing marker, with quoted closing markers skipped.
    fn read_tag_data(&mut self) -> Result<String, ParseError> {
        let mut raw = String::new();
        let mut in_quotes = false;
        while let Some(c) = self.reader.next() {
            if c == self.syntax.quotation {
                in_quotes = !in_quotes;
            }
            if !in_quotes && c == self.syntax.tag_close {
                return Ok(raw);
            }
            raw.push(c);
        }
        Err(ParseError::UnterminatedTag {
            context: raw.chars().take(32).collect(),
            origin: self.reader.current_label(),
        })
    }

    /// Skip a comment tag. `<!-- -->` requires the matching long close;
    /// plain `<! >` and `<? >` end at the first closing marker.
    fn skip_comment(&mut self) -> Result<(), ParseError> {
        self.reader.next();
        let mut content = String::new();
        while let Some(c) = self.reader.next() {
            if c == self.syntax.tag_close {
                let long_form = content.starts_with("--");
                if !long_form || content.ends_with("--") {
                    return Ok(());
                }
            }
            content.push(c);
        }
        Err(ParseError::UnterminatedTag {
            context: content.chars().take(32).collect(),
            origin: self.reader.current_label(),
        })
    }

    fn process_tag(&mut self, raw: &str) -> Result<(), ParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.collect(ParseError::MalformedValue {
                value: String::new(),
                expected: "a tag name".to_string(),
            });
            return Ok(());
        }

        if let Some(rest) = trimmed.strip_prefix(self.syntax.closed_tag_marker) {
            let name = rest.trim();
            let name = name.strip_prefix(self.syntax.macro_marker).unwrap_or(name);
            return self.close_named_tag(name);
        }

        let (data, self_closing) = match trimmed.strip_suffix(self.syntax.closed_tag_marker) {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };

        match data.strip_prefix(self.syntax.macro_marker) {
            Some(macro_data) => self.open_macro_tag(macro_data, self_closing),
            None => self.open_actor_tag(data, self_closing),
        }
    }

    fn split_tag_name<'a>(&self, data: &'a str) -> (&'a str, &'a str) {
        match data
            .char_indices()
            .find(|(_, c)| self.syntax.is_attribute_separator(*c))
        {
            Some((at, _)) => (&data[..at], &data[at..]),
            None => (data, ""),
        }
    }

    // ── Macro tags ───────────────────────────────────────────────────

    fn open_macro_tag(&mut self, data: &str, self_closing: bool) -> Result<(), ParseError> {
        let (name, attr_data) = self.split_tag_name(data);
        let name = name.to_string();
        let Some(spec) = self.tags.macro_spec(&name) else {
            return Err(ParseError::UnknownTag {
                name: format!("{}{}", self.syntax.macro_marker, name),
                origin: self.reader.current_label(),
            });
        };

        let attributes = split_attributes(attr_data, &self.syntax);
        let body = if self_closing {
            String::new()
        } else {
            self.read_macro_body(&name)?
        };

        let tag = Tag::macro_tag(
            &name,
            attr_data.trim(),
            attributes,
            self.current_widget_id(),
            spec,
            body,
        );
        macros::close_macro(self, &tag)
    }

    /// Capture the raw body of a macro up to its matching closing tag,
    /// tracking nested same-name openings. All other markup passes through
    /// verbatim for later re-parsing.
    fn read_macro_body(&mut self, name: &str) -> Result<String, ParseError> {
        let mut body = String::new();
        let mut depth = 0usize;
        loop {
            let Some(c) = self.reader.next() else {
                return Err(ParseError::UnterminatedTag {
                    context: format!("{}{}", self.syntax.macro_marker, name),
                    origin: self.reader.current_label(),
                });
            };
            if c != self.syntax.tag_open {
                body.push(c);
                continue;
            }

            let raw = self.read_tag_data()?;
            let trimmed = raw.trim();
            if let Some(rest) = trimmed.strip_prefix(self.syntax.closed_tag_marker) {
                let close_name = rest.trim();
                let close_name = close_name
                    .strip_prefix(self.syntax.macro_marker)
                    .unwrap_or(close_name);
                if close_name.eq_ignore_ascii_case(name) {
                    if depth == 0 {
                        return Ok(body);
                    }
                    depth -= 1;
                }
            } else {
                let (data, self_closing) = match trimmed.strip_suffix(self.syntax.closed_tag_marker)
                {
                    Some(rest) => (rest.trim_end(), true),
                    None => (trimmed, false),
                };
                let data = data.strip_prefix(self.syntax.macro_marker).unwrap_or(data);
                let (open_name, _) = self.split_tag_name(data);
                if !self_closing && open_name.eq_ignore_ascii_case(name) {
                    depth += 1;
                }
            }

            body.push(self.syntax.tag_open);
            body.push_str(&raw);
            body.push(self.syntax.tag_close);
        }
    }

    // ── Actor tags ───────────────────────────────────────────────────

    fn open_actor_tag(&mut self, data: &str, self_closing: bool) -> Result<(), ParseError> {
        let (name, attr_data) = self.split_tag_name(data);
        let name = name.to_string();
        let Some(spec) = self.tags.tag(&name) else {
            return Err(ParseError::UnknownTag {
                name,
                origin: self.reader.current_label(),
            });
        };
        if self.stack.len() >= self.max_tag_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_tag_depth,
            });
        }

        let attributes = split_attributes(attr_data, &self.syntax);

        // Phase 1: building attributes mutate the staged builder.
        let mut builder = spec.stage();
        let mut deferred: Vec<(String, String)> = Vec::new();
        let assignment = self.syntax.attribute_assignment.to_string();
        for token in &attributes {
            if !token.contains(self.syntax.attribute_assignment) {
                self.collect(ParseError::MalformedValue {
                    value: token.clone(),
                    expected: format!("name{assignment}value attribute"),
                });
                continue;
            }
            let (attr_name, attr_value) = split_in_two(token, &assignment);
            let lowered = attr_name.to_ascii_lowercase();
            let resolved = self.services().parse_string(attr_value, None);
            match builder.apply_attribute(&lowered, &resolved) {
                Some(Ok(())) => {}
                Some(Err(error)) => self.collect(error),
                None => deferred.push((attr_name.to_string(), attr_value.to_string())),
            }
        }

        // The widget exists from here on; its container capability and cell
        // context are resolved exactly once.
        let parent_widget = self.current_widget_id();
        let in_cell = parent_widget
            .and_then(|id| self.tree.widget(id))
            .is_some_and(|w| w.container() == Some(ContainerKind::Table));

        let widget = (spec.constructor)(&builder);
        let container = widget.container();
        let node_id = self.tree.insert(widget);
        let mut cell = in_cell.then(CellSettings::default);

        // Phase 2: remaining attributes go through the dispatch table.
        {
            let Parser {
                syntax,
                actions,
                attributes: registry,
                tree,
                errors,
                ..
            } = self;
            let services = Services {
                syntax: &*syntax,
                actions: &*actions,
            };
            let node = tree.get_mut(node_id).expect("node just inserted");
            for (attr_name, attr_value) in &deferred {
                if let Err(error) =
                    registry.dispatch(&services, &name, node, cell.as_mut(), attr_name, attr_value)
                {
                    log::warn!("recoverable parse error: {error}");
                    errors.push(error);
                }
            }
        }

        let tag = Tag::actor(
            &name,
            attr_data.trim(),
            attributes,
            node_id,
            parent_widget,
            ActorState { container, cell },
        );
        if self_closing {
            self.finish_tag(tag)
        } else {
            self.stack.push(tag);
            Ok(())
        }
    }

    fn close_named_tag(&mut self, name: &str) -> Result<(), ParseError> {
        let Some(position) = self
            .stack
            .iter()
            .rposition(|tag| tag.name().eq_ignore_ascii_case(name))
        else {
            self.collect(ParseError::UnbalancedTag {
                name: name.to_string(),
            });
            return Ok(());
        };

        while self.stack.len() > position + 1 {
            let unclosed = self.stack.pop().expect("length checked");
            self.collect(ParseError::UnclosedTag {
                name: unclosed.name().to_string(),
            });
            self.finish_tag(unclosed)?;
        }
        let tag = self.stack.pop().expect("position exists");
        self.finish_tag(tag)
    }

    /// Close an actor tag: run the pack hook, then hand the widget to the
    /// parent's add-child policy.
    fn finish_tag(&mut self, tag: Tag) -> Result<(), ParseError> {
        let name = tag.name().to_string();
        let node_id = tag.own_widget();
        let cell = match tag.kind {
            TagKind::Actor(state) => state.cell,
            TagKind::Macro(_) => {
                debug_assert!(false, "macro tags are closed inline");
                return Ok(());
            }
        };
        let Some(node_id) = node_id else {
            return Ok(());
        };

        if let Some(widget) = self.tree.widget_mut(node_id) {
            widget.pack();
        }
        self.attach_child(&name, node_id, cell)
    }

    fn attach_child(
        &mut self,
        child_name: &str,
        child: NodeId,
        cell: Option<CellSettings>,
    ) -> Result<(), ParseError> {
        let parent = self
            .stack
            .last()
            .map(|tag| (tag.name().to_string(), tag.own_widget(), tag.container_kind()));

        if let Some((parent_name, parent_widget, kind)) = parent {
            match (parent_widget, kind) {
                (Some(parent_id), Some(kind)) => {
                    kind.append(&mut self.tree, parent_id, child, cell.unwrap_or_default());
                }
                _ => {
                    self.collect(ParseError::MalformedNesting {
                        parent: parent_name,
                        child: child_name.to_string(),
                        message: "parent widget is not a container".to_string(),
                    });
                    self.tree.remove(child);
                }
            }
            return Ok(());
        }

        if let Some(root) = self.attach_root {
            let kind = self
                .tree
                .widget(root)
                .and_then(|w| w.container())
                .unwrap_or(ContainerKind::Group);
            kind.append(&mut self.tree, root, child, cell.unwrap_or_default());
        }
        self.roots.push(child);
        Ok(())
    }

    // ── Plain text ───────────────────────────────────────────────────

    /// Hand one accumulated line of plain text to the current tag.
    fn flush_text(&mut self, buffer: &mut String) -> Result<(), ParseError> {
        if buffer.trim().is_empty() {
            buffer.clear();
            return Ok(());
        }
        let line = std::mem::take(buffer);
        let line = line.trim();

        let target = self
            .stack
            .last()
            .map(|tag| (tag.name().to_string(), tag.own_widget(), tag.container_kind()));

        match target {
            Some((tag_name, Some(node_id), container)) => {
                let parsed = {
                    let services = self.services();
                    let widget = self.tree.widget(node_id);
                    services.parse_string(line, widget)
                };
                let handled = self
                    .tree
                    .widget_mut(node_id)
                    .is_some_and(|w| w.append_text(&parsed));
                if handled {
                    return Ok(());
                }
                match container {
                    Some(kind) => {
                        let widget = (self.label_factory)(&Builder::new().with_text(&parsed));
                        let child = self.tree.insert(widget);
                        kind.append(&mut self.tree, node_id, child, CellSettings::default());
                        Ok(())
                    }
                    None => {
                        self.collect(ParseError::MalformedNesting {
                            parent: tag_name,
                            child: "#text".to_string(),
                            message: "widget accepts neither text nor children".to_string(),
                        });
                        Ok(())
                    }
                }
            }
            Some((_, None, _)) => Ok(()),
            None => {
                let parsed = {
                    let services = self.services();
                    services.parse_string(line, None)
                };
                let widget = (self.label_factory)(&Builder::new().with_text(&parsed));
                let child = self.tree.insert(widget);
                self.attach_child("#text", child, None)
            }
        }
    }

    // ── Bookkeeping ──────────────────────────────────────────────────

    /// The widget currently in scope: the innermost open actor tag's, or the
    /// caller-supplied root.
    fn current_widget_id(&self) -> Option<NodeId> {
        self.stack
            .iter()
            .rev()
            .find_map(Tag::own_widget)
            .or(self.attach_root)
    }

    pub(crate) fn collect(&mut self, error: ParseError) {
        log::warn!("recoverable parse error: {error}");
        self.errors.push(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::Label;

    #[test]
    fn parses_a_label_with_text() {
        let mut parser = Parser::new();
        let roots = parser.parse("<label>hello</label>").unwrap();
        assert_eq!(roots.len(), 1);
        let label = parser
            .tree()
            .widget(roots[0])
            .unwrap()
            .as_any()
            .downcast_ref::<Label>()
            .unwrap();
        assert_eq!(label.text(), "hello");
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn unknown_tag_aborts_the_parse() {
        let mut parser = Parser::new();
        let err = parser.parse("<nope/>").unwrap_err();
        assert!(matches!(err, ParseError::UnknownTag { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn unknown_attribute_is_collected_not_fatal() {
        let mut parser = Parser::new();
        let roots = parser.parse("<label colour=red>hi</label>").unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(parser.errors().len(), 1);
        assert!(matches!(
            parser.errors()[0],
            ParseError::UnknownAttribute { .. }
        ));
    }

    #[test]
    fn attach_root_receives_children() {
        let mut parser = Parser::new();
        let root = parser
            .tree_mut()
            .insert(Box::new(crate::widgets::Panel::default()));
        parser.parse_into("<label/><label/>", root).unwrap();
        assert_eq!(parser.tree().children(root).len(), 2);
    }

    #[test]
    fn self_closing_and_case_insensitive_tags() {
        let mut parser = Parser::new();
        let roots = parser.parse("<Panel><LABEL/></panel>").unwrap();
        assert_eq!(roots.len(), 1);
        assert_eq!(parser.tree().children(roots[0]).len(), 1);
    }

    #[test]
    fn document_arguments_are_substituted() {
        let mut parser = Parser::new();
        parser.set_argument("greeting", "hello");
        let roots = parser.parse("<label>{greeting} world</label>").unwrap();
        let label = parser
            .tree()
            .widget(roots[0])
            .unwrap()
            .as_any()
            .downcast_ref::<Label>()
            .unwrap();
        assert_eq!(label.text(), "hello world");
    }

    #[test]
    fn comments_are_skipped() {
        let mut parser = Parser::new();
        let roots = parser
            .parse("<!-- a > b --><label>x</label><? note ?>")
            .unwrap();
        assert_eq!(roots.len(), 1);
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn unterminated_tag_is_fatal() {
        let mut parser = Parser::new();
        let err = parser.parse("<label text=x").unwrap_err();
        assert!(matches!(err, ParseError::UnterminatedTag { .. }));
    }

    #[test]
    fn mismatched_close_is_collected() {
        let mut parser = Parser::new();
        let roots = parser.parse("<panel><label>x</panel>").unwrap();
        assert_eq!(roots.len(), 1);
        assert!(parser
            .errors()
            .iter()
            .any(|e| matches!(e, ParseError::UnclosedTag { .. })));
        // The label was still force-closed into the panel.
        assert_eq!(parser.tree().children(roots[0]).len(), 1);
    }

    #[test]
    fn stray_close_is_collected() {
        let mut parser = Parser::new();
        parser.parse("</label><label/>").unwrap();
        assert!(parser
            .errors()
            .iter()
            .any(|e| matches!(e, ParseError::UnbalancedTag { .. })));
    }

    #[test]
    fn nesting_depth_guard() {
        let mut parser = Parser::new();
        parser.set_max_tag_depth(4);
        let template = "<panel>".repeat(8);
        let err = parser.parse(&template).unwrap_err();
        assert!(matches!(err, ParseError::NestingTooDeep { limit: 4 }));
    }
}
