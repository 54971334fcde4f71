//! Built-in widgets: Label, Panel, Table, TreeView, Slider.
//!
//! A deliberately small set, enough to exercise every container kind and the
//! builder flow without a host toolkit. Real hosts register their own
//! constructors over their own widget types; these exist so the engine is
//! usable and testable standalone.

pub mod label;
pub mod panel;
pub mod slider;
pub mod table;
pub mod tree_view;

pub use label::Label;
pub use panel::Panel;
pub use slider::Slider;
pub use table::{Table, TableCell};
pub use tree_view::TreeView;
