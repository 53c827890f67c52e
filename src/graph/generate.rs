use log::info;
use rand::Rng;

use super::{Bounds, Graph, GraphError};

/// Distance kept between a vertex center and the canvas edge.
pub const DEFAULT_MARGIN: f64 = 30.0;
/// Chance that any given pair of vertices is joined.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.5;

/// Tunables for [`generate_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
	/// Minimum distance from a vertex center to the bounds.
	pub margin: f64,
	/// Chance in `[0, 1]` that a pair is joined.
	pub edge_probability: f64,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			margin: DEFAULT_MARGIN,
			edge_probability: DEFAULT_EDGE_PROBABILITY,
		}
	}
}

impl GeneratorConfig {
	fn validate(&self) -> Result<(), GraphError> {
		if !self.margin.is_finite() || self.margin < 0.0 {
			return Err(GraphError::invalid_input(format!(
				"margin must be a non-negative number, got {}",
				self.margin
			)));
		}
		if !(0.0..=1.0).contains(&self.edge_probability) {
			return Err(GraphError::invalid_input(format!(
				"edge probability must lie in [0, 1], got {}",
				self.edge_probability
			)));
		}
		Ok(())
	}
}

/// Parses user-entered text as a vertex count.
///
/// Surrounding whitespace is ignored. Anything other than a positive integer
/// is rejected.
pub fn parse_vertex_count(input: &str) -> Result<usize, GraphError> {
	match input.trim().parse::<usize>() {
		Ok(count) if count >= 1 => Ok(count),
		_ => Err(GraphError::invalid_input(format!(
			"expected a positive integer vertex count, got {:?}",
			input.trim()
		))),
	}
}

/// Generates a random graph with the default [`GeneratorConfig`].
pub fn generate<R: Rng + ?Sized>(
	vertex_count: usize,
	bounds: Bounds,
	rng: &mut R,
) -> Result<Graph, GraphError> {
	generate_with(vertex_count, bounds, &GeneratorConfig::default(), rng)
}

/// Generates `vertex_count` vertices placed uniformly inside `bounds` (less
/// the margin), then joins each pair `i < j` with probability
/// `config.edge_probability`.
///
/// Positions are drawn first, all `x` then `y` per vertex, followed by one
/// draw per pair in increasing `(i, j)` order.
pub fn generate_with<R: Rng + ?Sized>(
	vertex_count: usize,
	bounds: Bounds,
	config: &GeneratorConfig,
	rng: &mut R,
) -> Result<Graph, GraphError> {
	if vertex_count < 1 {
		return Err(GraphError::invalid_input(
			"vertex count must be at least 1",
		));
	}
	let sane = |v: f64| v.is_finite() && v >= 0.0;
	if !sane(bounds.width) || !sane(bounds.height) {
		return Err(GraphError::invalid_input(format!(
			"bounds must be finite and non-negative, got {}x{}",
			bounds.width, bounds.height
		)));
	}
	config.validate()?;

	let positions = (0..vertex_count)
		.map(|_| {
			let x = coordinate(rng, bounds.width, config.margin);
			let y = coordinate(rng, bounds.height, config.margin);
			(x, y)
		})
		.collect();
	let mut graph = Graph::with_positions(positions);

	for i in 0..vertex_count {
		for j in (i + 1)..vertex_count {
			if rng.gen_bool(config.edge_probability) {
				graph.push_edge(i, j);
			}
		}
	}
	graph.refresh_degrees();

	info!(
		"Generated graph with {} vertices and {} edges",
		graph.vertex_count(),
		graph.edge_count()
	);
	Ok(graph)
}

/// Uniform draw from `[margin, extent - margin]`, or the midpoint if the axis
/// is too narrow for both margins.
/// Spans up to `f64::MAX` are accepted.
fn coordinate<R: Rng + ?Sized>(rng: &mut R, extent: f64, margin: f64) -> f64 {
	let (lo, hi) = (margin, extent - margin);
	if hi < lo {
		return extent / 2.0;
	}
	let unit: f64 = rng.r#gen();
	(lo + unit * (hi - lo)).min(hi)
}
