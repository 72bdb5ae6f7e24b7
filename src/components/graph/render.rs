//! Turns a laid-out [`Graph`] into the shapes the panel draws.
//!
//! Kept free of DOM types so the drawing rules can be checked without a
//! browser.

use super::label::format_label;
use super::state::IconShape;
use super::types::{Graph, NodeId, NodeLabel, Point};

#[derive(Clone, Debug, PartialEq)]
pub struct DrawOptions {
	pub node_size: f64,
	pub icon_shape: IconShape,
	pub edge_stroke_width_multiple: f64,
	pub hide_types: bool,
	pub selected_node: Option<NodeId>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroupRect {
	pub key: String,
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EdgeShape {
	pub key: String,
	pub class: String,
	pub path: String,
	pub stroke_width: f64,
	pub label: String,
	pub label_at: Point,
	pub font_size: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Background {
	Circle { r: f64 },
	Rect { offset: f64, size: f64, rx: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct NodeGlyph {
	pub id: NodeId,
	pub at: Point,
	pub class: String,
	pub background: Background,
	pub icon: String,
	pub progress: Option<f64>,
	/// `None` when type labels are hidden.
	pub type_label: Option<String>,
	pub label: String,
	/// Hover text: the full node id.
	pub tooltip: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
	Empty,
	Diagram {
		width: f64,
		height: f64,
		node_size: f64,
		groups: Vec<GroupRect>,
		edges: Vec<EdgeShape>,
		nodes: Vec<NodeGlyph>,
	},
}

pub fn scene(graph: &Graph, options: &DrawOptions, visible: impl Fn(&NodeLabel) -> bool) -> Scene {
	if graph.is_empty() {
		return Scene::Empty;
	}
	let size = options.node_size;
	Scene::Diagram {
		width: graph.width + size * 2.0,
		height: graph.height + size * 2.0,
		node_size: size,
		groups: group_rects(graph, size),
		edges: edge_shapes(graph, options),
		nodes: node_glyphs(graph, options, visible),
	}
}

fn group_rects(graph: &Graph, size: f64) -> Vec<GroupRect> {
	graph
		.node_groups
		.iter()
		.filter_map(|(key, members)| {
			let mut bounds: Option<(Point, Point)> = None;
			for at in members
				.iter()
				.filter_map(|id| graph.nodes.get(id)?.position())
			{
				let (min, max) = bounds.get_or_insert((at, at));
				min.x = min.x.min(at.x);
				min.y = min.y.min(at.y);
				max.x = max.x.max(at.x);
				max.y = max.y.max(at.y);
			}
			let (min, max) = bounds?;
			Some(GroupRect {
				key: key.clone(),
				x: min.x - size,
				y: min.y - size,
				width: max.x - min.x + 2.0 * size,
				height: max.y - min.y + 2.0 * size,
			})
		})
		.collect()
}

fn edge_shapes(graph: &Graph, options: &DrawOptions) -> Vec<EdgeShape> {
	let size = options.node_size;
	graph
		.edges
		.iter()
		.filter_map(|(key, label)| {
			let points = label.drawable_points()?;
			let path = points
				.iter()
				.enumerate()
				.map(|(i, p)| format!("{} {} {}", if i == 0 { "M" } else { "L" }, p.x, p.y))
				.collect::<Vec<_>>()
				.join(" ");
			Some(EdgeShape {
				key: format!("edge/{}/{}", key.v, key.w),
				class: format!("edge {}", label.class_names.as_deref().unwrap_or("arrow")),
				path,
				stroke_width: options.edge_stroke_width_multiple * size / 32.0,
				label: format_label(label.label.as_deref()),
				label_at: points[if points.len() == 1 { 0 } else { 1 }],
				font_size: size / 6.0,
			})
		})
		.collect()
}

fn node_glyphs(
	graph: &Graph,
	options: &DrawOptions,
	visible: impl Fn(&NodeLabel) -> bool,
) -> Vec<NodeGlyph> {
	let size = options.node_size;
	graph
		.nodes
		.iter()
		.filter(|(_, label)| visible(*label))
		.filter_map(|(id, label)| {
			let at = label.position()?;
			let mut class = format!("node {}", label.class_names.as_deref().unwrap_or(""));
			if options.selected_node.as_ref() == Some(id) {
				class.push_str(" selected");
			}
			let background = match options.icon_shape {
				IconShape::Circle => Background::Circle { r: size / 2.0 },
				IconShape::Rect => Background::Rect {
					offset: -size / 2.0,
					size,
					rx: size / 4.0,
				},
			};
			Some(NodeGlyph {
				id: id.clone(),
				at,
				class,
				background,
				icon: label.icon.clone(),
				progress: label.progress,
				type_label: (!options.hide_types).then(|| label.node_type.clone()),
				label: format_label(Some(&label.label)),
				tooltip: id.clone(),
			})
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph::types::EdgeLabel;

	fn options() -> DrawOptions {
		DrawOptions {
			node_size: 64.0,
			icon_shape: IconShape::Rect,
			edge_stroke_width_multiple: 1.0,
			hide_types: false,
			selected_node: None,
		}
	}

	fn placed(x: f64, y: f64) -> NodeLabel {
		NodeLabel {
			x: Some(x),
			y: Some(y),
			..NodeLabel::new("label", "event", "cloud")
		}
	}

	fn diagram(scene: Scene) -> (Vec<GroupRect>, Vec<EdgeShape>, Vec<NodeGlyph>) {
		match scene {
			Scene::Diagram {
				groups,
				edges,
				nodes,
				..
			} => (groups, edges, nodes),
			Scene::Empty => panic!("expected a diagram"),
		}
	}

	#[test]
	fn empty_graph_has_nothing_to_show() {
		assert_eq!(scene(&Graph::new(), &options(), |_| true), Scene::Empty);
	}

	#[test]
	fn only_edges_with_points_are_drawn() {
		let mut g = Graph::new();
		for id in ["a", "b", "c"] {
			g.set_node(id, placed(0.0, 0.0));
		}
		g.set_edge(
			"a",
			"b",
			EdgeLabel {
				points: Some(vec![Point { x: 0.0, y: 0.0 }, Point { x: 5.0, y: 6.0 }, Point { x: 10.0, y: 12.0 }]),
				label: Some("on push".into()),
				..EdgeLabel::default()
			},
		)
		.unwrap();
		g.set_edge("b", "c", EdgeLabel { points: Some(vec![]), ..EdgeLabel::default() })
			.unwrap();
		g.set_edge("a", "c", EdgeLabel::default()).unwrap();

		let (_, edges, _) = diagram(scene(&g, &options(), |_| true));
		assert_eq!(edges.len(), 1);
		let edge = &edges[0];
		assert_eq!(edge.key, "edge/a/b");
		assert_eq!(edge.class, "edge arrow");
		assert_eq!(edge.path, "M 0 0 L 5 6 L 10 12");
		assert_eq!(edge.stroke_width, 2.0);
		assert_eq!(edge.label, "on push");
		assert_eq!(edge.label_at, Point { x: 5.0, y: 6.0 });
		for shape in &edges {
			let (v, w) = shape.key["edge/".len()..].split_once('/').unwrap();
			assert!(g.nodes.contains_key(v) && g.nodes.contains_key(w));
		}
	}

	#[test]
	fn single_point_edge_labels_at_that_point() {
		let mut g = Graph::new();
		g.set_node("a", placed(0.0, 0.0));
		g.set_edge(
			"a",
			"a",
			EdgeLabel {
				points: Some(vec![Point { x: 3.0, y: 4.0 }]),
				class_names: Some("dashed".into()),
				..EdgeLabel::default()
			},
		)
		.unwrap();
		let (_, edges, _) = diagram(scene(&g, &options(), |_| true));
		assert_eq!(edges[0].label_at, Point { x: 3.0, y: 4.0 });
		assert_eq!(edges[0].class, "edge dashed");
	}

	#[test]
	fn nodes_need_visibility_and_a_position() {
		let mut g = Graph::new();
		g.set_node("shown", placed(10.0, 20.0));
		g.set_node("unplaced", NodeLabel::new("x", "event", "cloud"));
		g.set_node("filtered", NodeLabel { node_type: "template".into(), ..placed(1.0, 1.0) });

		let (_, _, nodes) = diagram(scene(&g, &options(), |n| n.node_type == "event"));
		let ids: Vec<_> = nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids, vec!["shown"]);
		assert_eq!(nodes[0].at, Point { x: 10.0, y: 20.0 });
		assert_eq!(
			nodes[0].background,
			Background::Rect {
				offset: -32.0,
				size: 64.0,
				rx: 16.0
			}
		);
	}

	#[test]
	fn selection_and_hidden_types_change_the_glyph() {
		let mut g = Graph::new();
		g.set_node("a", NodeLabel { class_names: Some("failed".into()), ..placed(0.0, 0.0) });
		g.set_node("b", placed(0.0, 0.0));
		let opts = DrawOptions {
			icon_shape: IconShape::Circle,
			hide_types: true,
			selected_node: Some("a".into()),
			..options()
		};

		let (_, _, nodes) = diagram(scene(&g, &opts, |_| true));
		assert_eq!(nodes[0].class, "node failed selected");
		assert_eq!(nodes[1].class, "node ");
		assert_eq!(nodes[0].background, Background::Circle { r: 32.0 });
		assert!(nodes.iter().all(|n| n.type_label.is_none()));
	}

	#[test]
	fn glyphs_carry_the_node_id_as_tooltip() {
		let mut g = Graph::new();
		g.set_node("WorkflowTemplate/argo/build", placed(0.0, 0.0));

		let (_, _, nodes) = diagram(scene(&g, &options(), |_| true));
		assert_eq!(nodes[0].tooltip, "WorkflowTemplate/argo/build");
	}

	#[test]
	fn groups_wrap_their_members_with_a_margin() {
		let mut g = Graph::new();
		g.set_node("a", placed(100.0, 50.0));
		g.set_node("b", placed(200.0, 150.0));
		g.set_node("c", NodeLabel::new("c", "event", "cloud"));
		g.add_to_group("pipeline", "a");
		g.add_to_group("pipeline", "b");
		g.add_to_group("unplaced", "c");
		g.width = 232.0;
		g.height = 182.0;

		match scene(&g, &options(), |_| true) {
			Scene::Diagram { width, height, groups, .. } => {
				assert_eq!((width, height), (360.0, 310.0));
				assert_eq!(
					groups,
					vec![GroupRect {
						key: "pipeline".into(),
						x: 36.0,
						y: -14.0,
						width: 228.0,
						height: 228.0,
					}]
				);
			}
			Scene::Empty => panic!("expected a diagram"),
		}
	}
}
