use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::config::encode_path_segment;
use crate::pages::workflow_event_bindings::id::{ResourceId, ResourceKind};
use crate::pages::workflow_event_bindings::location::ListLocation;

pub fn template_url(namespace: &str, name: &str) -> String {
	format!(
		"/workflow-templates/{}/{}",
		encode_path_segment(namespace),
		encode_path_segment(name)
	)
}

/// Landing page for a template opened from the bindings graph.
#[component]
pub fn WorkflowTemplateDetails() -> impl IntoView {
	let params = use_params_map();
	let id = Memo::new(move |_| {
		params.with(|p| {
			ResourceId::new(
				ResourceKind::WorkflowTemplate,
				p.get("namespace").unwrap_or_default(),
				p.get("name").unwrap_or_default(),
			)
		})
	});
	let back = move || id.with(|id| ListLocation::new(id.namespace.clone(), None).to_url());

	view! {
		<Title text=move || format!("{} - Workflow Templates", id.with(|id| id.name.clone())) />
		<div class="page">
			<div class="page__toolbar">
				<h1>{move || id.with(|id| id.name.clone())}</h1>
			</div>
			<p>
				"Workflow template in namespace "
				<code>{move || id.with(|id| id.namespace.clone())}</code>
				"."
			</p>
			<p class="resource-id">{move || id.get().to_string()}</p>
			<A href=back>"Back to workflow event bindings"</A>
		</div>
	}
}
