use indexmap::{IndexMap, IndexSet};
use thiserror::Error;

/// Node identifier. Opaque to the panel.
pub type NodeId = String;

/// Label to enabled flag, used for both the type and the class filters.
pub type Filters = IndexMap<String, bool>;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NodeLabel {
	pub label: String,
	pub node_type: String,
	pub icon: String,
	pub class_names: Option<String>,
	pub x: Option<f64>,
	pub y: Option<f64>,
	/// Completion in `0.0..=1.0`, drawn as an arc around the icon.
	pub progress: Option<f64>,
}

impl NodeLabel {
	pub fn new(label: impl Into<String>, node_type: impl Into<String>, icon: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			node_type: node_type.into(),
			icon: icon.into(),
			..Self::default()
		}
	}

	pub fn position(&self) -> Option<Point> {
		Some(Point {
			x: self.x?,
			y: self.y?,
		})
	}
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeLabel {
	pub label: Option<String>,
	pub class_names: Option<String>,
	pub points: Option<Vec<Point>>,
}

impl EdgeLabel {
	/// The points to draw, if the edge is drawable at all.
	pub fn drawable_points(&self) -> Option<&[Point]> {
		self.points.as_deref().filter(|points| !points.is_empty())
	}
}

/// Directed edge `v -> w`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EdgeKey {
	pub v: NodeId,
	pub w: NodeId,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
	#[error("edge {v} -> {w} references unknown node {missing}")]
	UnknownNode {
		v: NodeId,
		w: NodeId,
		missing: NodeId,
	},
}

/// The in-memory graph handed to the panel. Rebuilt from domain data on every
/// change; the layout engine fills in positions and the bounding size.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	pub nodes: IndexMap<NodeId, NodeLabel>,
	pub edges: IndexMap<EdgeKey, EdgeLabel>,
	pub node_groups: IndexMap<String, IndexSet<NodeId>>,
	pub width: f64,
	pub height: f64,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Inserts or replaces a node, keeping its original position in the order.
	pub fn set_node(&mut self, id: impl Into<NodeId>, label: NodeLabel) {
		self.nodes.insert(id.into(), label);
	}

	pub fn set_edge(
		&mut self,
		v: impl Into<NodeId>,
		w: impl Into<NodeId>,
		label: EdgeLabel,
	) -> Result<(), GraphError> {
		let (v, w) = (v.into(), w.into());
		let missing = [&v, &w]
			.into_iter()
			.find(|end| !self.nodes.contains_key(*end))
			.cloned();
		if let Some(missing) = missing {
			return Err(GraphError::UnknownNode { v, w, missing });
		}
		self.edges.insert(EdgeKey { v, w }, label);
		Ok(())
	}

	pub fn add_to_group(&mut self, group: impl Into<String>, node: impl Into<NodeId>) {
		self.node_groups
			.entry(group.into())
			.or_default()
			.insert(node.into());
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn set_edge_rejects_unknown_endpoints() {
		let mut g = Graph::new();
		g.set_node("a", NodeLabel::new("a", "event", "cloud"));

		let err = g.set_edge("a", "b", EdgeLabel::default()).unwrap_err();
		assert_eq!(
			err,
			GraphError::UnknownNode {
				v: "a".into(),
				w: "b".into(),
				missing: "b".into(),
			}
		);
		assert!(g.edges.is_empty());
	}

	#[test]
	fn set_node_replaces_in_place() {
		let mut g = Graph::new();
		g.set_node("a", NodeLabel::new("first", "event", "cloud"));
		g.set_node("b", NodeLabel::new("b", "event", "cloud"));
		g.set_node("a", NodeLabel::new("second", "event", "cloud"));

		let ids: Vec<_> = g.nodes.keys().cloned().collect();
		assert_eq!(ids, vec!["a", "b"]);
		assert_eq!(g.nodes["a"].label, "second");
	}

	#[test]
	fn empty_points_are_not_drawable() {
		let mut label = EdgeLabel::default();
		assert!(label.drawable_points().is_none());
		label.points = Some(vec![]);
		assert!(label.drawable_points().is_none());
		label.points = Some(vec![Point { x: 1.0, y: 2.0 }]);
		assert_eq!(label.drawable_points().map(<[Point]>::len), Some(1));
	}
}
