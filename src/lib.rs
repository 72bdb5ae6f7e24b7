//! Browser console for workflow event bindings: a Leptos client-side app that
//! draws the bindings of a namespace as a graph of events and the workflow
//! templates they submit.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Modules
mod components;
mod config;
mod error;
mod models;
mod pages;
mod services;

use crate::config::ConsoleConfig;
use crate::pages::not_found::NotFound;
use crate::pages::workflow_event_bindings::WorkflowEventBindingsList;
use crate::pages::workflow_event_bindings::location::LIST_PATH;
use crate::pages::workflow_template::WorkflowTemplateDetails;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Routes of the console. `/` lands on the bindings list.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	let config = ConsoleConfig::from_document();
	info!("serving console from {}", config.base_href);
	let base = config.base_href.trim_end_matches('/').to_string();
	provide_context(config);

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />
		<Title text="Workflow Event Bindings" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router base=base>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=|| view! { <Redirect path=LIST_PATH /> } />
				<Route
					path=path!("/workflow-event-bindings/:namespace?")
					view=WorkflowEventBindingsList
				/>
				<Route
					path=path!("/workflow-templates/:namespace/:name")
					view=WorkflowTemplateDetails
				/>
			</Routes>
		</Router>
	}
}
