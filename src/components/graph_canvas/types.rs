use crate::graph::{Graph, PALETTE, colorize, degree_groups, group_colors};

/// One row of the degree legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
	pub degree: usize,
	pub count: usize,
	pub color: &'static str,
}

/// A graph together with the color of each vertex.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColoredGraph {
	pub graph: Graph,
	pub colors: Vec<&'static str>,
}

impl ColoredGraph {
	/// Colors `graph` by degree with [`PALETTE`].
	pub fn new(graph: Graph) -> Self {
		let colors = colorize(&graph, &PALETTE);
		Self { graph, colors }
	}

	pub fn legend(&self) -> Vec<LegendEntry> {
		let groups = degree_groups(&self.graph);
		let colors = group_colors(&groups, &PALETTE);
		groups
			.iter()
			.map(|(&degree, members)| LegendEntry {
				degree,
				count: members.len(),
				color: colors[&degree],
			})
			.collect()
	}
}
