use std::collections::HashSet;

use crate::graph::VertexIdx;

use super::types::ColoredGraph;

pub const NODE_RADIUS: f64 = 10.0;
pub const HIT_RADIUS: f64 = 12.0;
pub const STROKE_WIDTH: f64 = 2.0;
pub const HIGHLIGHT_STROKE_WIDTH: f64 = 3.5;
pub const DIMMED_ALPHA: f64 = 0.25;

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<VertexIdx>,
	pub neighbors: HashSet<VertexIdx>,
}

pub struct GraphCanvasState {
	pub scene: ColoredGraph,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
}

impl GraphCanvasState {
	pub fn new(scene: ColoredGraph, width: f64, height: f64) -> Self {
		Self {
			scene,
			hover: HoverState::default(),
			width,
			height,
		}
	}

	/// Topmost vertex within [`HIT_RADIUS`] of the point. Later vertices are
	/// drawn over earlier ones, so the last hit wins.
	pub fn node_at_position(&self, x: f64, y: f64) -> Option<VertexIdx> {
		self.scene
			.graph
			.vertices()
			.iter()
			.rev()
			.find(|v| {
				let (dx, dy) = (v.x - x, v.y - y);
				(dx * dx + dy * dy).sqrt() < HIT_RADIUS
			})
			.map(|v| v.index)
	}

	/// Returns whether anything changed.
	pub fn set_hover(&mut self, node: Option<VertexIdx>) -> bool {
		if self.hover.node == node {
			return false;
		}
		self.hover.node = node;
		self.hover.neighbors.clear();
		if let Some(idx) = node {
			self.hover.neighbors.extend(self.scene.graph.neighbors(idx));
		}
		true
	}

	pub fn is_highlighted(&self, idx: VertexIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: VertexIdx) -> bool {
		self.hover.node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some()
	}
}
