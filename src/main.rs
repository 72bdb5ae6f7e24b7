//! Browser entry point of the workflow event bindings console.

// Dependencies belong to the library crate.
#![allow(unused_crate_dependencies)]

use workflow_graph_console::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
