use std::collections::BTreeMap;

use log::debug;

use super::{Graph, VertexIdx};

/// Colors handed out to degree groups, in order.
pub const PALETTE: [&str; 5] = ["red", "blue", "yellow", "green", "gray"];

/// Vertices keyed by degree, ascending.
pub type DegreeGroups = BTreeMap<usize, Vec<VertexIdx>>;

/// Groups the vertices of `graph` by degree.
pub fn degree_groups(graph: &Graph) -> DegreeGroups {
	group_by_degree(&graph.degrees())
}

fn group_by_degree(degrees: &[usize]) -> DegreeGroups {
	let mut groups = DegreeGroups::new();
	for (v, &degree) in degrees.iter().enumerate() {
		groups.entry(degree).or_default().push(v);
	}
	groups
}

/// Assigns each degree group a palette color, advancing through the palette
/// once per group in ascending degree order and wrapping at the end.
///
/// # Panics
/// If `palette` is empty.
pub fn group_colors<C: Clone>(groups: &DegreeGroups, palette: &[C]) -> BTreeMap<usize, C> {
	assert!(!palette.is_empty(), "palette must hold at least one color");
	groups
		.keys()
		.enumerate()
		.map(|(slot, &degree)| (degree, palette[slot % palette.len()].clone()))
		.collect()
}

/// Colors every vertex by its degree group. The result is indexed by vertex.
///
/// Vertices of equal degree always share a color. Vertices of different
/// degree share one only when there are more groups than palette entries.
///
/// # Panics
/// If `palette` is empty.
pub fn colorize<C: Clone>(graph: &Graph, palette: &[C]) -> Vec<C> {
	let degrees = graph.degrees();
	let by_degree = group_colors(&group_by_degree(&degrees), palette);
	debug!("Colored {} degree groups", by_degree.len());

	degrees.iter().map(|d| by_degree[d].clone()).collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_graph_has_no_colors() {
		let g = Graph::default();
		assert!(colorize(&g, &PALETTE).is_empty());
		assert!(degree_groups(&g).is_empty());
	}

	#[test]
	fn groups_are_ascending() {
		// Path 0-1-2 plus isolated 3.
		let g = Graph::from_edges(4, &[(0, 1), (1, 2)]).unwrap();
		let groups = degree_groups(&g);
		let keys: Vec<_> = groups.keys().copied().collect();
		assert_eq!(keys, vec![0, 1, 2]);
		assert_eq!(groups[&0], vec![3]);
		assert_eq!(groups[&1], vec![0, 2]);
		assert_eq!(groups[&2], vec![1]);
		assert_eq!(colorize(&g, &PALETTE), vec!["blue", "yellow", "blue", "red"]);
	}

	#[test]
	fn single_entry_palette_paints_everything() {
		let g = Graph::from_edges(3, &[(0, 1)]).unwrap();
		assert_eq!(colorize(&g, &[7u8]), vec![7, 7, 7]);
	}

	#[test]
	#[should_panic]
	fn empty_palette_panics() {
		let g = Graph::from_edges(1, &[]).unwrap();
		let palette: [&str; 0] = [];
		colorize(&g, &palette);
	}
}
