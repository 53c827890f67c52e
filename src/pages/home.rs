use leptos::prelude::*;
use log::{info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use web_sys::MouseEvent;

use crate::components::graph_canvas::{ColoredGraph, GraphCanvas};
use crate::graph::{Bounds, GraphError, generate, parse_vertex_count};

const CANVAS_WIDTH: f64 = 800.0;
const CANVAS_HEIGHT: f64 = 600.0;

/// Replaces `scene` with a fresh graph built from the entered vertex count.
///
/// The count is validated first; on error `scene` is left as it was so the
/// last good graph stays on screen.
fn regenerate<R: Rng + ?Sized>(
	scene: &mut Option<ColoredGraph>,
	text: &str,
	rng: &mut R,
) -> Result<(), GraphError> {
	let count = parse_vertex_count(text)?;
	let graph = generate(count, Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT), rng)?;
	let colored = ColoredGraph::new(graph);
	info!(
		"Showing {} vertices across {} degree groups",
		colored.graph.vertex_count(),
		colored.legend().len()
	);
	*scene = Some(colored);
	Ok(())
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let vertex_input = RwSignal::new(String::from("10"));
	let scene = RwSignal::new(None::<ColoredGraph>);
	let error = RwSignal::new(None::<String>);
	let rng = StoredValue::new(ChaCha8Rng::from_entropy());

	let on_generate = move |_: MouseEvent| {
		let text = vertex_input.get_untracked();
		let mut next = scene.get_untracked();
		let mut outcome = Ok(());
		rng.update_value(|r| outcome = regenerate(&mut next, &text, r));
		match outcome {
			Ok(()) => {
				error.set(None);
				scene.set(next);
			}
			Err(err) => {
				warn!("Rejected vertex count: {err}");
				error.set(Some(err.to_string()));
			}
		}
	};

	let stats = move || {
		scene.with(|s| {
			s.as_ref().map(|s| {
				format!(
					"{} vertices, {} edges",
					s.graph.vertex_count(),
					s.graph.edge_count()
				)
			})
		})
	};
	let legend = move || scene.with(|s| s.as_ref().map(|s| s.legend()).unwrap_or_default());

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-controls">
					<h1>"Degree-Colored Graph"</h1>
					<label>
						"Vertices: "
						<input
							type="text"
							prop:value=move || vertex_input.get()
							on:input=move |ev| vertex_input.set(event_target_value(&ev))
						/>
					</label>
					<button on:click=on_generate>"Generate"</button>
					{move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}
					{move || stats().map(|text| view! { <p class="stats">{text}</p> })}
					<ul class="degree-legend">
						{move || {
							legend()
								.into_iter()
								.map(|entry| {
									view! {
										<li>
											<span
												class="swatch"
												style=format!("background-color: {}", entry.color)
											></span>
											{format!("degree {}: {} vertices", entry.degree, entry.count)}
										</li>
									}
								})
								.collect_view()
						}}
					</ul>
				</div>
				<GraphCanvas scene=scene width=CANVAS_WIDTH height=CANVAS_HEIGHT />
			</div>
		</ErrorBoundary>
	}
}
