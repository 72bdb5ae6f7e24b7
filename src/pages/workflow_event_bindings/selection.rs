use log::debug;

use super::id::{ResourceId, ResourceKind, join, split};
use crate::models::WorkflowEventBinding;
use crate::pages::workflow_template::template_url;

/// The binding whose details are open, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
	pub namespace: String,
	pub name: String,
}

impl Selection {
	pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			name: name.into(),
		}
	}

	/// Graph node id of the selected binding.
	pub fn node_id(&self) -> String {
		join(ResourceKind::WorkflowEventBinding, &self.namespace, &self.name)
	}
}

/// What clicking a graph node does.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeAction {
	/// Leave the page for the template's own page.
	OpenTemplate(String),
	/// Show the binding in the detail panel.
	SelectBinding(Selection),
}

/// Node ids are parsed strictly first. Ids that do not parse fall back to the
/// lenient split and still select whatever namespace and name they contain,
/// which then matches no binding and shows nothing.
pub fn node_action(id: &str) -> NodeAction {
	let (kind, namespace, name) = match id.parse::<ResourceId>() {
		Ok(ResourceId { kind, namespace, name }) => (Some(kind), namespace, name),
		Err(err) => {
			debug!("node id {id:?}: {err}");
			let parts = split(id);
			(
				parts.kind.as_deref().and_then(|k| k.parse::<ResourceKind>().ok()),
				parts.namespace.unwrap_or_default(),
				parts.name.unwrap_or_default(),
			)
		}
	};
	match kind {
		Some(ResourceKind::WorkflowTemplate) => NodeAction::OpenTemplate(template_url(&namespace, &name)),
		_ => NodeAction::SelectBinding(Selection::new(namespace, name)),
	}
}

pub fn find_selected<'a>(
	bindings: &'a [WorkflowEventBinding],
	selection: &Selection,
) -> Option<&'a WorkflowEventBinding> {
	bindings
		.iter()
		.find(|b| b.metadata.namespace == selection.namespace && b.metadata.name == selection.name)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::models::ObjectMeta;
	use crate::pages::workflow_event_bindings::graph::build_graph;
	use crate::pages::workflow_event_bindings::location::{ListLocation, route_values};

	fn binding(namespace: &str, name: &str) -> WorkflowEventBinding {
		WorkflowEventBinding {
			metadata: ObjectMeta {
				name: name.into(),
				namespace: namespace.into(),
			},
			..WorkflowEventBinding::default()
		}
	}

	#[test]
	fn template_nodes_navigate_away() {
		let mut with_target = binding("argo", "on-push");
		with_target.spec.submit = serde_json::from_value(serde_json::json!({
			"workflowTemplateRef": {"name": "build"}
		}))
		.unwrap();
		let g = build_graph(&[with_target]);
		let template_id = g.nodes.get_index(1).map(|(id, _)| id.clone()).unwrap();

		assert_eq!(
			node_action(&template_id),
			NodeAction::OpenTemplate("/workflow-templates/argo/build".into())
		);
	}

	#[test]
	fn binding_nodes_select_inline() {
		assert_eq!(
			node_action("WorkflowEventBinding/argo/on-push"),
			NodeAction::SelectBinding(Selection::new("argo", "on-push"))
		);
	}

	#[test]
	fn ids_with_extra_segments_fall_back_to_the_lenient_split() {
		assert_eq!(
			node_action("WorkflowTemplate/argo/build/extra"),
			NodeAction::OpenTemplate("/workflow-templates/argo/build".into())
		);
		assert_eq!(
			node_action("WorkflowEventBinding/argo"),
			NodeAction::SelectBinding(Selection::new("argo", ""))
		);
	}

	#[test]
	fn malformed_ids_select_nothing_useful() {
		let NodeAction::SelectBinding(selection) = node_action("garbage") else {
			panic!("expected a selection");
		};
		assert_eq!(selection, Selection::default());
		assert!(find_selected(&[binding("argo", "on-push")], &selection).is_none());
	}

	#[test]
	fn selection_is_restored_after_reload() {
		let bindings = vec![binding("argo", "audit"), binding("argo", "on-push")];
		let NodeAction::SelectBinding(selection) = node_action(&selection_id("argo", "on-push")) else {
			panic!("expected a selection");
		};
		let url = ListLocation::new("argo", Some(selection)).to_url();

		let (namespace, selected) = route_values(&url).unwrap();
		let reloaded = ListLocation::from_route(namespace, selected);
		let restored = reloaded.selected.as_ref().and_then(|s| find_selected(&bindings, s));
		assert_eq!(restored, Some(&bindings[1]));
		assert_eq!(reloaded.namespace, "argo");
	}

	fn selection_id(namespace: &str, name: &str) -> String {
		Selection::new(namespace, name).node_id()
	}
}
