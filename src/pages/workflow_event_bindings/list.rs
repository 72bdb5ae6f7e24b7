use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map, use_query_map};
use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;

use super::fetch::FetchGeneration;
use super::graph::{build_graph, class_name_filters, type_filters};
use super::location::{ListLocation, SELECTED_PARAM};
use super::selection::{NodeAction, find_selected, node_action};
use crate::components::graph::GraphPanel;
use crate::config::use_config;
use crate::models::WorkflowEventBinding;
use crate::services::event::list_workflow_event_bindings;

/// Graph of the workflow event bindings in a namespace and the templates
/// they submit.
///
/// The namespace and the selected binding are read from the URL and changed
/// by navigating, so the address bar always describes what is on screen.
#[component]
pub fn WorkflowEventBindingsList() -> impl IntoView {
	let config = use_config();
	let params = use_params_map();
	let query = use_query_map();
	let navigate = use_navigate();

	let location = Memo::new(move |_| {
		ListLocation::from_route(
			params.with(|p| p.get("namespace")),
			query.with(|q| q.get(SELECTED_PARAM)),
		)
	});
	let namespace = Memo::new(move |_| location.with(|l| l.namespace.clone()));

	let bindings = RwSignal::new(None::<Vec<WorkflowEventBinding>>);
	let error = RwSignal::new(None::<String>);
	let generation = StoredValue::new(FetchGeneration::default());

	Effect::new(move |_| {
		let ns = namespace.get();
		let Some(ticket) = generation.try_update_value(FetchGeneration::start) else {
			return;
		};
		let config = config.clone();
		spawn_local(async move {
			let result = list_workflow_event_bindings(&config, &ns).await;
			if !generation.try_with_value(|g| g.is_current(ticket)).unwrap_or(false) {
				debug!("dropping stale workflow event bindings for namespace {ns:?}");
				return;
			}
			match result {
				Ok(items) => {
					bindings.set(Some(items));
					error.set(None);
				}
				Err(err) => {
					warn!("failed to list workflow event bindings: {err}");
					error.set(Some(err.to_string()));
				}
			}
		});
	});

	let pending_url = RwSignal::new(None::<String>);
	Effect::new(move |_| {
		if let Some(url) = pending_url.get() {
			info!("navigating to {url}");
			navigate(&url, Default::default());
		}
	});

	let graph = Memo::new(move |_| bindings.with(|b| build_graph(b.as_deref().unwrap_or_default())));
	let selected = Memo::new(move |_| {
		let selection = location.with(|l| l.selected.clone())?;
		bindings.with(|b| find_selected(b.as_deref()?, &selection).cloned())
	});
	let selected_node = Signal::derive(move || location.with(|l| l.selected.as_ref().map(|s| s.node_id())));

	let on_node_select = Callback::new(move |id: String| {
		let url = match node_action(&id) {
			NodeAction::OpenTemplate(url) => url,
			NodeAction::SelectBinding(selection) => ListLocation {
				selected: Some(selection),
				..location.get_untracked()
			}
			.to_url(),
		};
		pending_url.set(Some(url));
	});
	let on_namespace_change = Callback::new(move |ns: String| {
		pending_url.set(Some(ListLocation::new(ns, None).to_url()));
	});
	let on_close = Callback::new(move |_: ()| {
		let url = ListLocation {
			selected: None,
			..location.get_untracked()
		}
		.to_url();
		pending_url.set(Some(url));
	});

	let has_bindings = move || bindings.with(|b| b.as_ref().is_some_and(|b| !b.is_empty()));

	view! {
		<div class="page">
			<div class="page__toolbar">
				<h1>"Workflow Event Bindings"</h1>
				<NamespaceFilter value=namespace on_change=on_namespace_change />
			</div>
			{move || {
				error
					.get()
					.map(|e| {
						view! {
							<div class="error-notice">
								<i class="fa fa-exclamation-triangle" />
								" "
								{e}
							</div>
						}
					})
			}}
			<Show
				when=move || bindings.with(Option::is_some)
				fallback=|| view! { <div class="loading">"Loading..."</div> }
			>
				<Show when=has_bindings fallback=|| view! { <ZeroState /> }>
					<GraphPanel
						graph=graph
						types=type_filters()
						class_names=class_name_filters()
						horizontal=true
						selected_node=selected_node
						on_node_select=on_node_select
					/>
					<EventsNotice />
					<SlidingPanel shown=Signal::derive(move || selected.with(Option::is_some)) on_close=on_close>
						{move || selected.get().map(|b| view! { <ResourceViewer value=b /> })}
					</SlidingPanel>
				</Show>
			</Show>
		</div>
	}
}

#[component]
fn NamespaceFilter(#[prop(into)] value: Signal<String>, on_change: Callback<String>) -> impl IntoView {
	view! {
		<label class="namespace-filter">
			"Namespace "
			<input
				type="text"
				placeholder="all namespaces"
				prop:value=move || value.get()
				on:change=move |ev| on_change.run(event_target_value(&ev).trim().to_string())
			/>
		</label>
	}
}

#[component]
fn ZeroState() -> impl IntoView {
	view! {
		<div class="zero-state">
			<h4>"No workflow event bindings"</h4>
			<p>
				"Workflow event bindings submit a workflow template when a matching event arrives at the events API. Create one in this namespace to see it here."
			</p>
		</div>
	}
}

#[component]
fn EventsNotice() -> impl IntoView {
	let apidocs = use_config().ui_url("apidocs");
	view! {
		<div class="notice">
			<i class="fa fa-info-circle" />
			" Workflow event bindings allow you to trigger workflows when a webhook event is received. For example, start a build on a Git commit. Use the "
			<a href=apidocs>"API docs"</a>
			" to test. "
			<a href="https://argoproj.github.io/argo/events/">"Learn more"</a>
		</div>
	}
}

#[component]
fn SlidingPanel(
	#[prop(into)] shown: Signal<bool>,
	on_close: Callback<()>,
	children: ChildrenFn,
) -> impl IntoView {
	view! {
		<Show when=move || shown.get()>
			<div class="sliding-panel">
				<a class="sliding-panel__close" title="Close" on:click=move |_| on_close.run(())>
					<i class="fa fa-times" />
				</a>
				<div class="sliding-panel__body">{children()}</div>
			</div>
		</Show>
	}
}

/// Read-only JSON view of a binding.
#[component]
fn ResourceViewer(value: WorkflowEventBinding) -> impl IntoView {
	let text = serde_json::to_string_pretty(&value).unwrap_or_else(|err| err.to_string());
	view! { <pre class="resource-viewer">{text}</pre> }
}
