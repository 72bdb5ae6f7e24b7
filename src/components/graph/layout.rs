//! Layered layout for the graph panel.
//!
//! The pretty layout is dagre's: ranks, crossing reduction and coordinate
//! assignment. Fast mode ranks by longest path and keeps insertion order
//! within each rank. Either way the result is shifted so the top-left node box
//! touches the origin, and edges get straight polylines clipped to the node
//! boxes.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};

use dagre_rust::{GraphConfig as DagreConfig, GraphEdge as DagreEdge, GraphNode as DagreNode, layout as dagre_layout};
use graphlib_rust::{Graph as DagreGraph, GraphOption};
use log::{debug, warn};

use super::types::{Graph, Point};

/// Distance between ranks, in node sizes. Leaves room for the caption below
/// each node.
const RANK_GAP: f64 = 2.0;
/// Distance between neighbours in the same rank, in node sizes.
const NODE_GAP: f64 = 1.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
	pub node_size: f64,
	pub horizontal: bool,
	/// Skip crossing reduction.
	pub fast: bool,
}

/// Positions every node for which `hide` is false, clears the rest, and sets
/// the graph's bounding size.
pub fn layout(graph: &mut Graph, params: LayoutParams, hide: impl Fn(&str) -> bool) {
	for label in graph.nodes.values_mut() {
		label.x = None;
		label.y = None;
	}
	for label in graph.edges.values_mut() {
		label.points = None;
	}
	graph.width = 0.0;
	graph.height = 0.0;

	let ids: Vec<String> = graph
		.nodes
		.keys()
		.filter(|id| !hide(id.as_str()))
		.cloned()
		.collect();
	if ids.is_empty() {
		return;
	}
	let index: HashMap<&str, usize> = ids
		.iter()
		.enumerate()
		.map(|(i, id)| (id.as_str(), i))
		.collect();
	let edges: Vec<(usize, usize)> = graph
		.edges
		.keys()
		.filter_map(|e| Some((*index.get(e.v.as_str())?, *index.get(e.w.as_str())?)))
		.filter(|(v, w)| v != w)
		.collect();

	let mut positions = if params.fast {
		grid_positions(ids.len(), &edges, params)
	} else {
		dagre_positions(&ids, &edges, params)
	};

	let size = params.node_size;
	let min_x = positions.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
	let min_y = positions.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
	for p in positions.iter_mut() {
		p.x = p.x - min_x + size / 2.0;
		p.y = p.y - min_y + size / 2.0;
	}

	for (node, id) in ids.iter().enumerate() {
		if let Some(label) = graph.nodes.get_mut(id) {
			label.x = Some(positions[node].x);
			label.y = Some(positions[node].y);
		}
		graph.width = graph.width.max(positions[node].x + size / 2.0);
		graph.height = graph.height.max(positions[node].y + size / 2.0);
	}

	for (key, label) in graph.edges.iter_mut() {
		let (Some(&v), Some(&w)) = (index.get(key.v.as_str()), index.get(key.w.as_str())) else {
			continue;
		};
		if v != w {
			label.points = Some(edge_points(positions[v], positions[w], size / 2.0));
		}
	}
	debug!(
		"laid out {} of {} nodes ({})",
		ids.len(),
		graph.nodes.len(),
		if params.fast { "fast" } else { "dagre" }
	);
}

/// Node centres from dagre. Falls back to the grid if dagre leaves any node
/// unplaced.
fn dagre_positions(ids: &[String], edges: &[(usize, usize)], params: LayoutParams) -> Vec<Point> {
	let size = params.node_size as f32;
	let mut dagre_graph: DagreGraph<DagreConfig, DagreNode, DagreEdge> = DagreGraph::new(Some(GraphOption {
		directed: Some(true),
		multigraph: Some(false),
		compound: Some(false),
	}));

	let mut config = DagreConfig::default();
	config.rankdir = Some(if params.horizontal { "LR" } else { "TB" }.to_string());
	config.nodesep = Some(size * (NODE_GAP as f32 - 1.0));
	config.ranksep = Some(size * (RANK_GAP as f32 - 1.0));
	config.marginx = Some(0.0);
	config.marginy = Some(0.0);
	dagre_graph.set_graph(config);

	for id in ids {
		let mut node = DagreNode::default();
		node.width = size;
		node.height = size;
		dagre_graph.set_node(id.clone(), Some(node));
	}
	for &(v, w) in edges {
		let _ = dagre_graph.set_edge(&ids[v], &ids[w], Some(DagreEdge::default()), None);
	}

	dagre_layout::run_layout(&mut dagre_graph);

	let placed: Option<Vec<Point>> = ids
		.iter()
		.map(|id| {
			dagre_graph.node(id).map(|n| Point {
				x: f64::from(n.x),
				y: f64::from(n.y),
			})
		})
		.collect();
	placed.unwrap_or_else(|| {
		warn!("dagre left nodes unplaced, using the fast layout");
		grid_positions(ids.len(), edges, params)
	})
}

/// Longest-path ranks on a grid, insertion order within each rank.
fn grid_positions(count: usize, edges: &[(usize, usize)], params: LayoutParams) -> Vec<Point> {
	let ranks = rank_nodes(count, edges);
	let mut buckets: Vec<Vec<usize>> = vec![Vec::new(); ranks.iter().max().map_or(0, |r| r + 1)];
	for (node, &rank) in ranks.iter().enumerate() {
		buckets[rank].push(node);
	}

	let size = params.node_size;
	let widest = buckets.iter().map(Vec::len).max().unwrap_or(0);
	let mut positions = vec![Point::default(); count];
	for (rank, bucket) in buckets.iter().enumerate() {
		let offset = (widest - bucket.len()) as f64 * NODE_GAP * size / 2.0;
		for (slot, &node) in bucket.iter().enumerate() {
			let along = rank as f64 * RANK_GAP * size;
			let across = offset + slot as f64 * NODE_GAP * size;
			positions[node] = if params.horizontal {
				Point { x: along, y: across }
			} else {
				Point { x: across, y: along }
			};
		}
	}
	positions
}

/// Longest-path ranking. Back edges found by a depth-first walk in insertion
/// order are ignored so that cycles still produce a ranking.
fn rank_nodes(count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
	let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); count];
	for &(v, w) in edges {
		outgoing[v].push(w);
	}

	// 0 = unvisited, 1 = on stack, 2 = done
	let mut state = vec![0u8; count];
	let mut finished = Vec::with_capacity(count);
	for root in 0..count {
		if state[root] != 0 {
			continue;
		}
		let mut stack = vec![(root, 0usize)];
		state[root] = 1;
		while let Some((node, next)) = stack.last_mut() {
			let node = *node;
			if let Some(&child) = outgoing[node].get(*next) {
				*next += 1;
				if state[child] == 0 {
					state[child] = 1;
					stack.push((child, 0));
				}
			} else {
				state[node] = 2;
				finished.push(node);
				stack.pop();
			}
		}
	}

	// Reverse post-order is a topological order once back edges are dropped.
	let mut order_of = vec![0usize; count];
	for (pos, &node) in finished.iter().rev().enumerate() {
		order_of[node] = pos;
	}
	let mut ranks = vec![0usize; count];
	for &node in finished.iter().rev() {
		for &child in &outgoing[node] {
			if order_of[child] > order_of[node] {
				ranks[child] = ranks[child].max(ranks[node] + 1);
			}
		}
	}
	ranks
}

fn edge_points(from: Point, to: Point, inset: f64) -> Vec<Point> {
	let (dx, dy) = (to.x - from.x, to.y - from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist <= 2.0 * inset {
		return vec![from, to];
	}
	let (ux, uy) = (dx / dist, dy / dist);
	vec![
		Point {
			x: from.x + ux * inset,
			y: from.y + uy * inset,
		},
		Point {
			x: (from.x + to.x) / 2.0,
			y: (from.y + to.y) / 2.0,
		},
		Point {
			x: to.x - ux * inset,
			y: to.y - uy * inset,
		},
	]
}

/// Remembers the last layout so that re-rendering with unchanged inputs does
/// not lay the graph out again.
#[derive(Debug, Default)]
pub struct LayoutCache {
	last: Option<(u64, Graph)>,
	computations: usize,
}

impl LayoutCache {
	/// Returns a laid-out copy of `graph`, reusing the previous positions when
	/// the graph shape, parameters and hidden set are unchanged.
	pub fn layout(&mut self, graph: &Graph, params: LayoutParams, hide: impl Fn(&str) -> bool) -> Graph {
		let key = layout_key(graph, params, &hide);
		let mut out = graph.clone();
		match &self.last {
			Some((last_key, cached)) if *last_key == key => copy_positions(cached, &mut out),
			_ => {
				layout(&mut out, params, hide);
				self.computations += 1;
				self.last = Some((key, out.clone()));
			}
		}
		out
	}

	/// How many times a layout was actually computed.
	#[cfg(test)]
	pub fn computations(&self) -> usize {
		self.computations
	}
}

fn layout_key(graph: &Graph, params: LayoutParams, hide: &impl Fn(&str) -> bool) -> u64 {
	let mut hasher = DefaultHasher::new();
	for id in graph.nodes.keys() {
		id.hash(&mut hasher);
		hide(id.as_str()).hash(&mut hasher);
	}
	graph.nodes.len().hash(&mut hasher);
	for key in graph.edges.keys() {
		key.hash(&mut hasher);
	}
	params.node_size.to_bits().hash(&mut hasher);
	params.horizontal.hash(&mut hasher);
	params.fast.hash(&mut hasher);
	hasher.finish()
}

fn copy_positions(from: &Graph, to: &mut Graph) {
	for (id, label) in to.nodes.iter_mut() {
		let cached = from.nodes.get(id);
		label.x = cached.and_then(|c| c.x);
		label.y = cached.and_then(|c| c.y);
	}
	for (key, label) in to.edges.iter_mut() {
		label.points = from.edges.get(key).and_then(|c| c.points.clone());
	}
	to.width = from.width;
	to.height = from.height;
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::graph::types::{EdgeLabel, NodeLabel};

	const PARAMS: LayoutParams = LayoutParams {
		node_size: 64.0,
		horizontal: false,
		fast: false,
	};
	const FAST: LayoutParams = LayoutParams { fast: true, ..PARAMS };

	fn chain(ids: &[&str]) -> Graph {
		let mut g = Graph::new();
		for id in ids {
			g.set_node(*id, NodeLabel::new(*id, "event", "cloud"));
		}
		for pair in ids.windows(2) {
			g.set_edge(pair[0], pair[1], EdgeLabel::default()).unwrap();
		}
		g
	}

	fn close(a: f64, b: f64) -> bool {
		(a - b).abs() < 0.5
	}

	#[test]
	fn vertical_layout_stacks_ranks_downwards() {
		for params in [PARAMS, FAST] {
			let mut g = chain(&["a", "b", "c"]);
			layout(&mut g, params, |_| false);

			let ys: Vec<f64> = g.nodes.values().map(|n| n.y.unwrap()).collect();
			assert_eq!(ys[0], 32.0, "{params:?}");
			assert!(ys.windows(2).all(|w| w[1] - w[0] >= 64.0), "{params:?} {ys:?}");
			assert!(g.nodes.values().all(|n| close(n.x.unwrap(), 32.0)), "{params:?}");
			assert!(close(g.width, 64.0), "{params:?}");
			assert_eq!(g.height, ys[2] + 32.0);
		}

		let mut g = chain(&["a", "b", "c"]);
		layout(&mut g, FAST, |_| false);
		let ys: Vec<f64> = g.nodes.values().map(|n| n.y.unwrap()).collect();
		assert_eq!(ys, vec![32.0, 160.0, 288.0]);
	}

	#[test]
	fn horizontal_layout_places_ranks_along_x() {
		for params in [PARAMS, FAST] {
			let mut g = chain(&["a", "b"]);
			layout(
				&mut g,
				LayoutParams {
					horizontal: true,
					..params
				},
				|_| false,
			);

			let (a, b) = (g.nodes["a"].position().unwrap(), g.nodes["b"].position().unwrap());
			assert_eq!(a.x, 32.0);
			assert!(b.x - a.x >= 64.0, "{params:?} {b:?}");
			assert!(close(a.y, b.y), "{params:?}");
			let points = g.edges.values().next().unwrap().points.as_ref().unwrap();
			assert_eq!(points.len(), 3);
			assert!(close(points[0].x, a.x + 32.0) && close(points[2].x, b.x - 32.0));
		}
	}

	#[test]
	fn hidden_nodes_get_no_position_and_their_edges_no_points() {
		for params in [PARAMS, FAST] {
			let mut g = chain(&["a", "b", "c"]);
			layout(&mut g, params, |id| id == "b");

			assert!(g.nodes["b"].position().is_none());
			assert!(g.nodes["a"].position().is_some());
			assert!(g.nodes["c"].position().is_some());
			assert!(g.edges.values().all(|e| e.points.is_none()));
		}
	}

	#[test]
	fn hiding_everything_leaves_an_empty_box() {
		let mut g = chain(&["a", "b"]);
		layout(&mut g, PARAMS, |_| true);
		assert_eq!((g.width, g.height), (0.0, 0.0));
		assert!(g.nodes.values().all(|n| n.position().is_none()));
	}

	#[test]
	fn cycles_still_get_laid_out() {
		for params in [PARAMS, FAST] {
			let mut g = chain(&["a", "b", "c"]);
			g.set_edge("c", "a", EdgeLabel::default()).unwrap();
			layout(&mut g, params, |_| false);

			assert!(g.nodes.values().all(|n| n.position().is_some()), "{params:?}");
			assert!(g.edges.values().all(|e| e.drawable_points().is_some()), "{params:?}");
		}
		let mut g = chain(&["a", "b", "c"]);
		g.set_edge("c", "a", EdgeLabel::default()).unwrap();
		layout(&mut g, FAST, |_| false);
		assert!(g.nodes["a"].y < g.nodes["b"].y);
		assert!(g.nodes["b"].y < g.nodes["c"].y);
	}

	#[test]
	fn self_loops_are_not_drawn() {
		let mut g = chain(&["a"]);
		g.set_edge("a", "a", EdgeLabel::default()).unwrap();
		layout(&mut g, PARAMS, |_| false);
		assert!(g.nodes["a"].position().is_some());
		assert!(g.edges.values().all(|e| e.points.is_none()));
	}

	#[test]
	fn pretty_layout_uncrosses_edges_and_fast_keeps_insertion_order() {
		let mut g = Graph::new();
		for id in ["p1", "p2", "c2", "c1"] {
			g.set_node(id, NodeLabel::new(id, "event", "cloud"));
		}
		g.set_edge("p1", "c1", EdgeLabel::default()).unwrap();
		g.set_edge("p2", "c2", EdgeLabel::default()).unwrap();

		layout(&mut g, PARAMS, |_| false);
		let (p1, p2) = (g.nodes["p1"].x, g.nodes["p2"].x);
		let (c1, c2) = (g.nodes["c1"].x, g.nodes["c2"].x);
		assert_eq!(p1 < p2, c1 < c2);

		layout(&mut g, FAST, |_| false);
		assert!(g.nodes["c2"].x < g.nodes["c1"].x);
	}

	#[test]
	fn cache_skips_unchanged_inputs() {
		let mut cache = LayoutCache::default();
		let g = chain(&["a", "b"]);

		let first = cache.layout(&g, PARAMS, |_| false);
		let second = cache.layout(&g, PARAMS, |_| false);
		assert_eq!(cache.computations(), 1);
		assert_eq!(first, second);

		let mut relabelled = g.clone();
		relabelled.nodes["a"].label = "renamed".into();
		let third = cache.layout(&relabelled, PARAMS, |_| false);
		assert_eq!(cache.computations(), 1);
		assert_eq!(third.nodes["a"].label, "renamed");
		assert_eq!(third.nodes["a"].position(), first.nodes["a"].position());

		cache.layout(&g, LayoutParams { node_size: 76.8, ..PARAMS }, |_| false);
		assert_eq!(cache.computations(), 2);
		cache.layout(&g, LayoutParams { node_size: 76.8, ..PARAMS }, |id| id == "a");
		assert_eq!(cache.computations(), 3);
	}
}
