//! Sample command: the four-node demonstration graph

use std::time::Instant;

use wayfind_core::error::Result;
use wayfind_core::graph::{shortest_path_with, Graph, SearchOptions, WeightMap};
use wayfind_core::trace_time;

use crate::cli::Cli;

/// Edges of the sample graph as (a, b, weight)
pub const SAMPLE_EDGES: [(usize, usize, f64); 5] = [
    (0, 1, 1.0),
    (0, 2, 2.0),
    (0, 3, 6.0),
    (1, 3, 4.0),
    (2, 3, 2.0),
];

/// Execute the sample command
pub fn execute(cli: &Cli, opts: &SearchOptions) -> Result<()> {
    let start = Instant::now();

    let mut graph = Graph::new(4);
    let mut weights = WeightMap::with_capacity(SAMPLE_EDGES.len());
    for (a, b, weight) in SAMPLE_EDGES {
        let edge = graph.connect_indices(a, b)?;
        weights.insert(edge, weight)?;
    }

    let from = graph.node(0)?.id();
    let to = graph.node(3)?.id();
    let outcome = shortest_path_with(&graph, &weights, from, to, opts)?;
    trace_time!(start, "sample_search");

    super::print_outcome(cli, from, to, &outcome)
}
