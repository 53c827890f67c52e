use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use crate::graph::PALETTE;

use super::state::{
	DIMMED_ALPHA, GraphCanvasState, HIGHLIGHT_STROKE_WIDTH, NODE_RADIUS, STROKE_WIDTH,
};

pub fn render(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.set_global_alpha(1.0);
}

fn draw_edges(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let graph = &state.scene.graph;
	let vertices = graph.vertices();
	ctx.set_stroke_style_str("black");

	for edge in graph.edges() {
		let (a, b) = edge.endpoints();
		let (va, vb) = (&vertices[a], &vertices[b]);

		// Only edges at the hovered vertex stand out; everything else fades.
		let (alpha, width) = if !state.has_active_highlight() {
			(1.0, STROKE_WIDTH)
		} else if state.is_hovered(a) || state.is_hovered(b) {
			(1.0, HIGHLIGHT_STROKE_WIDTH)
		} else {
			(DIMMED_ALPHA, STROKE_WIDTH)
		};

		ctx.set_global_alpha(alpha);
		ctx.set_line_width(width);
		ctx.begin_path();
		ctx.move_to(va.x, va.y);
		ctx.line_to(vb.x, vb.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let has_highlight = state.has_active_highlight();

	for vertex in state.scene.graph.vertices() {
		let idx = vertex.index;
		let alpha = if has_highlight && !state.is_highlighted(idx) {
			DIMMED_ALPHA
		} else {
			1.0
		};
		let color = state.scene.colors.get(idx).copied().unwrap_or(PALETTE[0]);

		ctx.set_global_alpha(alpha);
		ctx.begin_path();
		let _ = ctx.arc(vertex.x, vertex.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(color);
		ctx.fill();
		ctx.set_stroke_style_str("black");
		ctx.set_line_width(if state.is_hovered(idx) {
			HIGHLIGHT_STROKE_WIDTH
		} else {
			STROKE_WIDTH
		});
		ctx.stroke();
	}
	ctx.set_global_alpha(1.0);

	let hovered = state
		.hover
		.node
		.and_then(|idx| state.scene.graph.vertices().get(idx));
	if let Some(vertex) = hovered {
		ctx.set_fill_style_str("black");
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(
			&format!("deg {}", vertex.degree),
			vertex.x + NODE_RADIUS + 4.0,
			vertex.y + 4.0,
		);
	}
}
