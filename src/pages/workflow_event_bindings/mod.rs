//! The workflow event bindings page and the pieces it is built from.

pub mod fetch;
pub mod graph;
pub mod id;
pub mod location;
pub mod selection;

mod list;

pub use list::WorkflowEventBindingsList;
