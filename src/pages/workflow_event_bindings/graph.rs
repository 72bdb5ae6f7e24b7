use log::warn;

use super::id::{ResourceKind, join};
use crate::components::graph::{EdgeLabel, Filters, Graph, NodeLabel};
use crate::models::WorkflowEventBinding;

pub const EVENT_TYPE: &str = "event";
pub const TEMPLATE_TYPE: &str = "template";

/// One `event` node per binding, plus a `template` node and an edge to it for
/// bindings that submit a template.
pub fn build_graph(bindings: &[WorkflowEventBinding]) -> Graph {
	let mut g = Graph::new();
	for binding in bindings {
		let namespace = &binding.metadata.namespace;
		let binding_id = join(ResourceKind::WorkflowEventBinding, namespace, &binding.metadata.name);
		g.set_node(
			binding_id.clone(),
			NodeLabel::new(&binding.spec.event.selector, EVENT_TYPE, "cloud"),
		);
		if let Some(template_name) = binding.template_name() {
			let template_id = join(ResourceKind::WorkflowTemplate, namespace, template_name);
			g.set_node(
				template_id.clone(),
				NodeLabel::new(template_name, TEMPLATE_TYPE, "window-maximize"),
			);
			if let Err(err) = g.set_edge(binding_id, template_id, EdgeLabel::default()) {
				warn!("skipping edge: {err}");
			}
		}
	}
	g
}

pub fn type_filters() -> Filters {
	[(EVENT_TYPE.to_string(), true), (TEMPLATE_TYPE.to_string(), true)]
		.into_iter()
		.collect()
}

pub fn class_name_filters() -> Filters {
	[(String::new(), true)].into_iter().collect()
}
