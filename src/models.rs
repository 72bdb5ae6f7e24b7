//! Wire types returned by the event service. Only the fields the console
//! reads are modelled; everything else is ignored on decode.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
	pub name: String,
	#[serde(default)]
	pub namespace: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
	#[serde(default)]
	pub selector: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateRef {
	pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submit {
	pub workflow_template_ref: TemplateRef,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEventBindingSpec {
	#[serde(default)]
	pub event: Event,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub submit: Option<Submit>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEventBinding {
	pub metadata: ObjectMeta,
	#[serde(default)]
	pub spec: WorkflowEventBindingSpec,
}

impl WorkflowEventBinding {
	pub fn template_name(&self) -> Option<&str> {
		self.spec
			.submit
			.as_ref()
			.map(|s| s.workflow_template_ref.name.as_str())
	}
}

/// `items` is `null` when the namespace has no bindings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WorkflowEventBindingList {
	#[serde(default)]
	pub items: Option<Vec<WorkflowEventBinding>>,
}

impl WorkflowEventBindingList {
	pub fn into_items(self) -> Vec<WorkflowEventBinding> {
		self.items.unwrap_or_default()
	}
}
