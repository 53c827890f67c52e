use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::render;
use super::state::GraphCanvasState;
use super::types::ColoredGraph;

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	match canvas.get_context("2d") {
		Ok(Some(ctx)) => ctx.dyn_into().ok(),
		_ => {
			warn!("Canvas has no 2d context; skipping draw");
			None
		}
	}
}

fn pointer_position(
	canvas_ref: NodeRef<leptos::html::Canvas>,
	ev: &MouseEvent,
) -> Option<(f64, f64)> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Draws `scene` onto a fixed-size canvas, redrawing whenever it changes.
/// Hovering a vertex highlights it and its neighbors.
#[component]
pub fn GraphCanvas(
	#[prop(into)] scene: Signal<Option<ColoredGraph>>,
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 600.0)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<GraphCanvasState>>> = Rc::new(RefCell::new(None));
	let ctx: Rc<RefCell<Option<CanvasRenderingContext2d>>> = Rc::new(RefCell::new(None));
	let (state_init, ctx_init) = (state.clone(), ctx.clone());

	Effect::new(move |_| {
		let current = scene.get().unwrap_or_default();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);

		if ctx_init.borrow().is_none() {
			*ctx_init.borrow_mut() = context_2d(&canvas);
		}
		let next = GraphCanvasState::new(current, width, height);
		if let Some(ref c) = *ctx_init.borrow() {
			render::render(&next, c);
		}
		*state_init.borrow_mut() = Some(next);
	});

	let (state_mm, ctx_mm) = (state.clone(), ctx.clone());
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer_position(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			if s.set_hover(hovered) {
				if let Some(ref c) = *ctx_mm.borrow() {
					render::render(s, c);
				}
			}
		}
	};

	let (state_ml, ctx_ml) = (state.clone(), ctx.clone());
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			if s.set_hover(None) {
				if let Some(ref c) = *ctx_ml.borrow() {
					render::render(s, c);
				}
			}
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block; cursor: default;"
		/>
	}
}
