//! Widget abstraction: the `Widget` trait, container adapters, builders,
//! and staged cell settings.

pub mod builder;
pub mod cell;
pub mod traits;

pub use builder::Builder;
pub use cell::CellSettings;
pub use traits::{ContainerKind, Widget};
