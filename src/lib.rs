//! # lattice
//!
//! A markup-driven UI construction engine: templates written in LML
//! (Lattice Markup Language) are parsed into live widget trees.
//!
//! LML is a small templating language over a widget hierarchy:
//! `<tag attr=value>body</tag>` markup, `@`-marked macro tags (conditional
//! inclusion, argument replacement, template imports, dynamic tag
//! registration), and `{argument}` placeholders. Every marker character is
//! configurable at runtime. The engine resolves tag names through a provider
//! registry, applies attributes through a scoped dispatch table, and
//! materializes widgets into a slotmap-backed arena; the concrete widget
//! kinds, rendering, and layout belong to the host toolkit behind the
//! [`widget::Widget`] trait.
//!
//! ## Core Systems
//!
//! - **[`syntax`]** — marker configuration, argument substitution, value lexing
//! - **[`tag`]** — tag lifecycle model and the tag provider registry
//! - **[`macros`]** — conditional, argument-replacement, import, and
//!   dynamic-registration macros
//! - **[`attribute`]** — scoped attribute dispatch and built-in handlers
//! - **[`parser`]** — the session object and the tokenize → dispatch → build loop
//! - **[`action`]** — host-defined callables reachable from markup
//! - **[`widget`]** — the `Widget` trait, container adapters, builders
//! - **[`widgets`]** — built-in Label, Panel, Table, TreeView, Slider
//! - **[`tree`]** — the widget arena
//! - **[`testing`]** — tree outlines for snapshots and assertions
//!
//! Parsing is single-threaded and synchronous; a [`parser::Parser`] session
//! owns all mutable registries and is not shareable across threads.

// Foundation
pub mod error;
pub mod geometry;

// Language
pub mod syntax;

// Registries and dispatch
pub mod action;
pub mod attribute;
pub mod tag;

// Macro subsystem
pub mod macros;

// Widgets and the arena
pub mod tree;
pub mod widget;
pub mod widgets;

// The engine
pub mod parser;

// Test support
pub mod testing;

pub use error::ParseError;
pub use parser::Parser;
