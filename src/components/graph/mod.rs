//! Layered graph panel: lays out a [`Graph`] of typed nodes and draws it as
//! SVG with zoom, orientation and type/class filters.

mod component;
mod icon;
mod label;
mod layout;
mod render;
pub(crate) mod state;
pub(crate) mod types;

pub use component::GraphPanel;
pub use types::{EdgeLabel, Filters, Graph, NodeLabel};
