use std::collections::HashSet;

use degree_graph_canvas::graph::{
	Bounds, DEFAULT_MARGIN, Graph, GraphError, PALETTE, colorize, degree_groups, generate,
	parse_vertex_count,
};
use rand::SeedableRng;
use rand::rngs::mock::StepRng;
use rand_chacha::ChaCha8Rng;

const BOUNDS: Bounds = Bounds {
	width: 800.0,
	height: 600.0,
};

fn random_graph(n: usize, seed: u64) -> Graph {
	generate(n, BOUNDS, &mut ChaCha8Rng::seed_from_u64(seed)).unwrap()
}

#[test]
fn vertex_and_edge_counts() {
	for n in 1..25 {
		let g = random_graph(n, n as u64);
		assert_eq!(g.vertex_count(), n);
		assert!(g.edge_count() <= n * (n - 1) / 2);
	}
}

#[test]
fn no_self_loops_or_duplicate_edges() {
	for seed in 0..20 {
		let g = random_graph(15, seed);
		let mut seen = HashSet::new();
		for edge in g.edges() {
			let (a, b) = edge.endpoints();
			assert_ne!(a, b);
			assert!(a < g.vertex_count() && b < g.vertex_count());
			assert!(seen.insert((a, b)), "duplicate edge ({a}, {b})");
		}
	}
}

#[test]
fn positions_stay_inside_margins() {
	for seed in 0..10 {
		let g = random_graph(30, seed);
		for v in g.vertices() {
			assert!((DEFAULT_MARGIN..=BOUNDS.width - DEFAULT_MARGIN).contains(&v.x));
			assert!((DEFAULT_MARGIN..=BOUNDS.height - DEFAULT_MARGIN).contains(&v.y));
		}
	}
}

#[test]
fn degree_counts_incident_edges() {
	for seed in 0..10 {
		let g = random_graph(12, seed);
		for v in g.vertices() {
			let incident = g.edges().iter().filter(|e| e.touches(v.index)).count();
			assert_eq!(v.degree, incident);
			assert_eq!(g.degree(v.index), incident);
		}
	}
}

#[test]
fn equal_degree_means_equal_color() {
	for seed in 0..20 {
		let g = random_graph(20, seed);
		let colors = colorize(&g, &PALETTE);
		assert_eq!(colors.len(), g.vertex_count());
		for u in g.vertices() {
			assert!(PALETTE.contains(&colors[u.index]));
			for v in g.vertices() {
				if u.degree == v.degree {
					assert_eq!(colors[u.index], colors[v.index]);
				}
			}
		}
	}
}

#[test]
fn colorize_is_idempotent() {
	let g = random_graph(18, 7);
	assert_eq!(colorize(&g, &PALETTE), colorize(&g, &PALETTE));
}

#[test]
fn invalid_counts() {
	assert!(matches!(parse_vertex_count("0"), Err(GraphError::InvalidInput(_))));
	assert!(matches!(parse_vertex_count("3.5"), Err(GraphError::InvalidInput(_))));
	assert!(matches!(
		generate(0, BOUNDS, &mut ChaCha8Rng::seed_from_u64(0)),
		Err(GraphError::InvalidInput(_))
	));
}

#[test]
fn single_vertex() {
	let g = random_graph(1, 0);
	assert_eq!(g.vertex_count(), 1);
	assert_eq!(g.edge_count(), 0);
	assert_eq!(g.vertices()[0].degree, 0);
	assert_eq!(degree_groups(&g).len(), 1);
	assert_eq!(colorize(&g, &PALETTE), vec![PALETTE[0]]);
}

#[test]
fn complete_graph_is_one_group() {
	let g = generate(5, BOUNDS, &mut StepRng::new(0, 0)).unwrap();
	assert_eq!(g.edge_count(), 10);
	assert!(g.vertices().iter().all(|v| v.degree == 4));
	assert_eq!(degree_groups(&g).len(), 1);
	assert_eq!(colorize(&g, &PALETTE), vec![PALETTE[0]; 5]);
}

#[test]
fn palette_wraps_after_five_groups() {
	// Join i and j whenever i + j >= 6: degrees are 1, 2, 3, 3, 4, 5, 6.
	let mut edges = Vec::new();
	for i in 0..7 {
		for j in (i + 1)..7 {
			if i + j >= 6 {
				edges.push((i, j));
			}
		}
	}
	let g = Graph::from_edges(7, &edges).unwrap();
	assert_eq!(g.degrees(), vec![1, 2, 3, 3, 4, 5, 6]);
	assert_eq!(degree_groups(&g).len(), 6);
	assert_eq!(
		colorize(&g, &PALETTE),
		vec!["red", "blue", "yellow", "yellow", "green", "gray", "red"]
	);
}
