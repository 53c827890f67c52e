//! Random graph generation and degree-based coloring.
//!
//! Nothing in here knows about the canvas; the UI layer only reads the
//! positions and colors produced by these functions.

mod coloring;
mod error;
mod generate;

use std::collections::HashSet;

pub use coloring::{DegreeGroups, PALETTE, colorize, degree_groups, group_colors};
pub use error::GraphError;
pub use generate::{
	DEFAULT_EDGE_PROBABILITY, DEFAULT_MARGIN, GeneratorConfig, generate, generate_with,
	parse_vertex_count,
};

/// Index of a vertex within its graph.
pub type VertexIdx = usize;

/// Size of the area vertex positions are drawn from.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Bounds {
	/// Creates bounds of the given width and height.
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

/// A graph vertex: its position on the canvas and its degree.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
	/// Position in [`Graph::vertices`].
	pub index: VertexIdx,
	/// Center, horizontal.
	pub x: f64,
	/// Center, vertical.
	pub y: f64,
	/// Number of incident edges.
	pub degree: usize,
}

/// An undirected edge, stored with the smaller index first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	a: VertexIdx,
	b: VertexIdx,
}

impl Edge {
	/// Creates the edge joining `u` and `v`, in either order.
	pub fn new(u: VertexIdx, v: VertexIdx) -> Self {
		Self {
			a: u.min(v),
			b: u.max(v),
		}
	}

	/// Both endpoints, smaller index first.
	pub fn endpoints(&self) -> (VertexIdx, VertexIdx) {
		(self.a, self.b)
	}

	/// Whether `v` is one of the endpoints.
	pub fn touches(&self, v: VertexIdx) -> bool {
		self.a == v || self.b == v
	}

	/// The endpoint opposite `v`, if `v` is an endpoint.
	pub fn other(&self, v: VertexIdx) -> Option<VertexIdx> {
		if self.a == v {
			Some(self.b)
		} else if self.b == v {
			Some(self.a)
		} else {
			None
		}
	}
}

/// The vertices and edges of one generation run.
///
/// Edges never form self-loops and each unordered pair appears at most once.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
	vertices: Vec<Vertex>,
	edges: Vec<Edge>,
}

impl Graph {
	/// Builds a graph with `vertex_count` vertices at the origin and the given edges.
	pub fn from_edges(
		vertex_count: usize,
		edges: &[(VertexIdx, VertexIdx)],
	) -> Result<Self, GraphError> {
		let mut graph = Self::with_positions(vec![(0.0, 0.0); vertex_count]);
		let mut seen = HashSet::with_capacity(edges.len());
		for &(u, v) in edges {
			if u >= vertex_count || v >= vertex_count {
				return Err(GraphError::invalid_input(format!(
					"edge ({u}, {v}) references a vertex outside 0..{vertex_count}"
				)));
			}
			if u == v {
				return Err(GraphError::invalid_input(format!(
					"edge ({u}, {v}) is a self-loop"
				)));
			}
			let edge = Edge::new(u, v);
			if !seen.insert(edge) {
				return Err(GraphError::invalid_input(format!(
					"edge ({u}, {v}) appears more than once"
				)));
			}
			graph.edges.push(edge);
		}
		graph.refresh_degrees();
		Ok(graph)
	}

	pub(crate) fn with_positions(positions: Vec<(f64, f64)>) -> Self {
		let vertices = positions
			.into_iter()
			.enumerate()
			.map(|(index, (x, y))| Vertex {
				index,
				x,
				y,
				degree: 0,
			})
			.collect();
		Self {
			vertices,
			edges: Vec::new(),
		}
	}

	/// Callers guarantee `u != v`, both in range, and the pair is new.
	pub(crate) fn push_edge(&mut self, u: VertexIdx, v: VertexIdx) {
		debug_assert!(u != v && u < self.vertices.len() && v < self.vertices.len());
		self.edges.push(Edge::new(u, v));
	}

	/// Recomputes every vertex's stored degree from the edge list.
	pub(crate) fn refresh_degrees(&mut self) {
		let degrees = degrees_of(&self.edges, self.vertices.len());
		for (vertex, degree) in self.vertices.iter_mut().zip(degrees) {
			vertex.degree = degree;
		}
	}

	/// All vertices, in index order.
	pub fn vertices(&self) -> &[Vertex] {
		&self.vertices
	}

	/// All edges, in insertion order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Number of vertices.
	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	/// Number of edges.
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	/// Number of edges incident to `v`.
	pub fn degree(&self, v: VertexIdx) -> usize {
		self.edges.iter().filter(|e| e.touches(v)).count()
	}

	/// Degrees of all vertices, indexed by vertex.
	pub fn degrees(&self) -> Vec<usize> {
		degrees_of(&self.edges, self.vertices.len())
	}

	/// Vertices sharing an edge with `v`.
	pub fn neighbors(&self, v: VertexIdx) -> impl Iterator<Item = VertexIdx> + '_ {
		self.edges.iter().filter_map(move |e| e.other(v))
	}
}

fn degrees_of(edges: &[Edge], vertex_count: usize) -> Vec<usize> {
	let mut degrees = vec![0; vertex_count];
	for edge in edges {
		let (a, b) = edge.endpoints();
		degrees[a] += 1;
		degrees[b] += 1;
	}
	degrees
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn edge_is_normalized() {
		assert_eq!(Edge::new(3, 1), Edge::new(1, 3));
		assert_eq!(Edge::new(3, 1).endpoints(), (1, 3));
		assert_eq!(Edge::new(3, 1).other(3), Some(1));
		assert_eq!(Edge::new(3, 1).other(2), None);
	}

	#[test]
	fn from_edges_computes_degrees() {
		let g = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0)]).unwrap();
		assert_eq!(g.degrees(), vec![2, 2, 2, 0]);
		let stored: Vec<usize> = g.vertices().iter().map(|v| v.degree).collect();
		assert_eq!(stored, g.degrees());
		assert_eq!(g.degree(3), 0);
		let mut n: Vec<_> = g.neighbors(1).collect();
		n.sort();
		assert_eq!(n, vec![0, 2]);
	}

	#[test]
	fn from_edges_rejects_malformed_edges() {
		assert!(matches!(
			Graph::from_edges(2, &[(0, 2)]),
			Err(GraphError::InvalidInput(_))
		));
		assert!(matches!(
			Graph::from_edges(2, &[(1, 1)]),
			Err(GraphError::InvalidInput(_))
		));
		assert!(matches!(
			Graph::from_edges(2, &[(0, 1), (1, 0)]),
			Err(GraphError::InvalidInput(_))
		));
	}
}
