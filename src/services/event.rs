//! Calls to the event service of the workflow API.

use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::{ConsoleConfig, encode_path_segment};
use crate::error::{Result, ServiceError};
use crate::models::{WorkflowEventBinding, WorkflowEventBindingList};

/// API path listing the bindings of `namespace`; empty means all namespaces.
pub fn list_path(namespace: &str) -> String {
	format!(
		"api/v1/workflow-event-bindings/{}",
		encode_path_segment(namespace)
	)
}

pub async fn list_workflow_event_bindings(
	config: &ConsoleConfig,
	namespace: &str,
) -> Result<Vec<WorkflowEventBinding>> {
	let url = config.api_url(&list_path(namespace));
	debug!("GET {url}");
	let body = get_text(&url).await?;
	let list: WorkflowEventBindingList = serde_json::from_str(&body)?;
	let items = list.into_items();
	info!(
		"loaded {} workflow event bindings from namespace {namespace:?}",
		items.len()
	);
	Ok(items)
}

async fn get_text(url: &str) -> Result<String> {
	let window = web_sys::window().ok_or(ServiceError::NoWindow)?;

	let opts = RequestInit::new();
	opts.set_method("GET");
	opts.set_mode(RequestMode::SameOrigin);
	let request = Request::new_with_str_and_init(url, &opts)?;
	request.headers().set("Accept", "application/json")?;

	let response: Response = JsFuture::from(window.fetch_with_request(&request))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(ServiceError::Status {
			status: response.status(),
			status_text: response.status_text(),
		});
	}
	JsFuture::from(response.text()?)
		.await?
		.as_string()
		.ok_or_else(|| ServiceError::Network("response body is not text".into()))
}
