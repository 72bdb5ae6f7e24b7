use super::layout::LayoutParams;
use super::types::{Filters, NodeLabel};

pub const DEFAULT_NODE_SIZE: f64 = 64.0;
pub const ZOOM_STEP: f64 = 1.2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IconShape {
	#[default]
	Rect,
	Circle,
}

/// View state owned by the panel. Seeded from the caller's props once and
/// then changed only by the panel's own controls.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphPanelState {
	pub node_size: f64,
	pub horizontal: bool,
	pub fast: bool,
	pub types: Filters,
	pub class_names: Filters,
}

impl GraphPanelState {
	pub fn new(node_size: f64, horizontal: bool, types: Filters, class_names: Filters) -> Self {
		Self {
			node_size,
			horizontal,
			fast: false,
			types,
			class_names,
		}
	}

	pub fn zoom_in(&mut self) {
		self.node_size *= ZOOM_STEP;
	}

	pub fn zoom_out(&mut self) {
		self.node_size /= ZOOM_STEP;
	}

	pub fn toggle_horizontal(&mut self) {
		self.horizontal = !self.horizontal;
	}

	pub fn toggle_fast(&mut self) {
		self.fast = !self.fast;
	}

	pub fn set_type(&mut self, label: &str, enabled: bool) {
		self.types.insert(label.to_string(), enabled);
	}

	pub fn set_class_name(&mut self, label: &str, enabled: bool) {
		self.class_names.insert(label.to_string(), enabled);
	}

	/// A node is shown when its type is enabled and at least one enabled class
	/// filter occurs in its class names. The empty filter matches every node.
	pub fn is_visible(&self, node: &NodeLabel) -> bool {
		let type_enabled = self.types.get(&node.node_type).copied().unwrap_or(false);
		let class_names = node.class_names.as_deref().unwrap_or("");
		type_enabled
			&& self
				.class_names
				.iter()
				.any(|(filter, &enabled)| enabled && class_names.contains(filter.as_str()))
	}

	pub fn layout_params(&self) -> LayoutParams {
		LayoutParams {
			node_size: self.node_size,
			horizontal: self.horizontal,
			fast: self.fast,
		}
	}
}
