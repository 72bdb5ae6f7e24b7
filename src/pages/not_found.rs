use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::workflow_event_bindings::location::LIST_PATH;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<A href=LIST_PATH>"Workflow event bindings"</A>
		</div>
	}
}
