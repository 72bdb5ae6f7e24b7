use leptos::prelude::*;
use log::debug;

use super::icon::GraphIcon;
use super::layout::LayoutCache;
use super::render::{self, Background, DrawOptions, EdgeShape, GroupRect, NodeGlyph, Scene};
use super::state::{DEFAULT_NODE_SIZE, GraphPanelState, IconShape};
use super::types::{Filters, Graph};
use crate::components::filter_drop_down::FilterDropDown;

/// Interactive SVG view of a [`Graph`].
///
/// Filters, zoom, orientation and the fast renderer toggle are local to the
/// panel: the props only seed them. Selection is owned by the caller, who
/// passes `selected_node` back in and is told about clicks via
/// `on_node_select`. Any `children` are appended to the options bar.
#[component]
pub fn GraphPanel(
	#[prop(into)] graph: Signal<Graph>,
	types: Filters,
	class_names: Filters,
	#[prop(default = DEFAULT_NODE_SIZE)] node_size: f64,
	#[prop(default = false)] horizontal: bool,
	#[prop(default = false)] hide_types: bool,
	#[prop(default = IconShape::Rect)] icon_shape: IconShape,
	#[prop(default = 1.0)] edge_stroke_width_multiple: f64,
	#[prop(optional, into)] selected_node: MaybeProp<String>,
	#[prop(optional)] on_node_select: Option<Callback<String>>,
	#[prop(optional)] children: Option<Children>,
) -> impl IntoView {
	let state = RwSignal::new(GraphPanelState::new(node_size, horizontal, types, class_names));
	let cache = StoredValue::new(LayoutCache::default());

	let laid_out = Memo::new(move |_| {
		let state = state.get();
		graph.with(|g| {
			cache
				.try_update_value(|cache| {
					cache.layout(g, state.layout_params(), |id| {
						g.nodes.get(id).map_or(true, |n| !state.is_visible(n))
					})
				})
				.unwrap_or_default()
		})
	});

	let scene = Memo::new(move |_| {
		let state = state.get();
		let options = DrawOptions {
			node_size: state.node_size,
			icon_shape,
			edge_stroke_width_multiple,
			hide_types,
			selected_node: selected_node.get(),
		};
		laid_out.with(|g| render::scene(g, &options, |n| state.is_visible(n)))
	});

	let types = Signal::derive(move || state.with(|s| s.types.clone()));
	let class_names = Signal::derive(move || state.with(|s| s.class_names.clone()));
	let on_type_change = Callback::new(move |(label, checked): (String, bool)| {
		state.update(|s| s.set_type(&label, checked));
	});
	let on_class_change = Callback::new(move |(label, checked): (String, bool)| {
		state.update(|s| s.set_class_name(&label, checked));
	});
	let on_select = move |id: String| {
		debug!("graph node selected: {id}");
		if let Some(cb) = on_node_select {
			cb.run(id);
		}
	};

	view! {
		<div>
			<div class="graph-options-panel">
				<FilterDropDown values=types on_change=on_type_change />
				<FilterDropDown values=class_names on_change=on_class_change />
				<a on:click=move |_| state.update(GraphPanelState::toggle_horizontal) title="Horizontal/vertical layout">
					<i class=move || {
						if state.with(|s| s.horizontal) {
							"fa fa-long-arrow-alt-right"
						} else {
							"fa fa-long-arrow-alt-down"
						}
					} />
				</a>
				<a on:click=move |_| state.update(GraphPanelState::zoom_in) title="Zoom in">
					<i class="fa fa-search-plus" />
				</a>
				<a on:click=move |_| state.update(GraphPanelState::zoom_out) title="Zoom out">
					<i class="fa fa-search-minus" />
				</a>
				<a
					on:click=move |_| state.update(GraphPanelState::toggle_fast)
					title="Use faster, but less pretty renderer"
					class=move || if state.with(|s| s.fast) { "active" } else { "" }
				>
					<i class="fa fa-bolt" />
				</a>
				{children.map(|c| c())}
			</div>
			<div class="graph">
				{move || match scene.get() {
					Scene::Empty => view! { <p>"Nothing to show"</p> }.into_any(),
					Scene::Diagram { width, height, node_size, groups, edges, nodes } => {
						diagram(width, height, node_size, groups, edges, nodes, on_select)
					}
				}}
			</div>
		</div>
	}
}

fn diagram(
	width: f64,
	height: f64,
	node_size: f64,
	groups: Vec<GroupRect>,
	edges: Vec<EdgeShape>,
	nodes: Vec<NodeGlyph>,
	on_select: impl Fn(String) + Copy + 'static,
) -> AnyView {
	let marker_size = (node_size / 8.0).to_string();

	view! {
		<svg width=width.to_string() height=height.to_string()>
			<defs>
				<marker
					id="arrow"
					viewBox="0 0 10 10"
					refX="10"
					refY="5"
					markerWidth=marker_size.clone()
					markerHeight=marker_size
					orient="auto-start-reverse"
				>
					<path d="M 0 0 L 10 5 L 0 10 z" class="arrow" />
				</marker>
			</defs>
			<g transform=format!("translate({node_size},{node_size})")>
				{groups
					.into_iter()
					.map(|r| {
						view! {
							<g class="group" transform=format!("translate({},{})", r.x, r.y)>
								<rect width=r.width.to_string() height=r.height.to_string() />
							</g>
						}
					})
					.collect_view()}
				{edges
					.into_iter()
					.map(|e| {
						view! {
							<g class=e.class>
								<path
									d=e.path
									class="line"
									stroke-width=e.stroke_width.to_string()
									marker-end="url(#arrow)"
								/>
								<g transform=format!("translate({},{})", e.label_at.x, e.label_at.y)>
									<text class="edge-label" style=format!("font-size: {}px", e.font_size)>
										{e.label}
									</text>
								</g>
							</g>
						}
					})
					.collect_view()}
				{nodes.into_iter().map(|n| node_glyph(n, node_size, on_select)).collect_view()}
			</g>
		</svg>
	}
	.into_any()
}

fn node_glyph(n: NodeGlyph, node_size: f64, on_select: impl Fn(String) + 'static) -> impl IntoView {
	let background = match n.background {
		Background::Circle { r } => view! { <circle r=r.to_string() class="bg" /> }.into_any(),
		Background::Rect { offset, size, rx } => view! {
			<rect
				x=offset.to_string()
				y=offset.to_string()
				width=size.to_string()
				height=size.to_string()
				rx=rx.to_string()
				class="bg"
			/>
		}
		.into_any(),
	};
	let type_label = n.type_label.map(|t| {
		view! {
			<text
				y=(node_size * 0.33).to_string()
				class="type"
				style=format!("font-size: {}px", node_size * 0.2)
			>
				{t}
			</text>
		}
	});
	let id = n.id;
	let node_id = id.clone();

	view! {
		<g transform=format!("translate({},{})", n.at.x, n.at.y) data-node-id=node_id>
			<title>{n.tooltip}</title>
			<g class=n.class on:click=move |_| on_select(id.clone())>
				{background}
				<GraphIcon icon=n.icon progress=n.progress node_size=node_size />
				{type_label}
			</g>
			<g transform=format!("translate(0,{})", node_size * 0.75)>
				<text class="node-label" style=format!("font-size: {}px", node_size / 5.0)>
					{n.label}
				</text>
			</g>
		</g>
	}
}
