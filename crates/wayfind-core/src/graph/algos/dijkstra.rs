use crate::ensure_owned;
use crate::error::Result;
use crate::graph::algos::frontier::{Frontier, HeapFrontier, LinearScanFrontier, SearchRecord};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::types::{FrontierKind, SearchOptions, SearchOutcome, SearchStats, ShortestPath};
use crate::graph::{Graph, Node, WeightMap};
use crate::log_search_stats;

/// State tracked during one search, indexed by node
struct DijkstraState {
    records: Vec<Option<SearchRecord>>,
    finalized: Vec<bool>,
    stats: SearchStats,
}

impl DijkstraState {
    fn new(node_count: usize) -> Self {
        Self {
            records: vec![None; node_count],
            finalized: vec![false; node_count],
            stats: SearchStats::default(),
        }
    }

    fn price(&self, node: usize) -> f64 {
        self.records[node].map_or(f64::INFINITY, |record| record.price)
    }

    /// Install `candidate` if it beats the node's current record
    fn relax(&mut self, node: usize, candidate: SearchRecord) -> bool {
        let improves = match self.records[node] {
            None => true,
            Some(current) => current.price > candidate.price,
        };
        if improves {
            self.records[node] = Some(candidate);
            self.stats.relaxations += 1;
        }
        improves
    }
}

/// Find the least-cost path from `start` to `end` with default options
pub fn shortest_path(
    graph: &Graph,
    weights: &WeightMap,
    start: Node,
    end: Node,
) -> Result<SearchOutcome> {
    shortest_path_with(graph, weights, start, end, &SearchOptions::default())
}

/// Find the least-cost path from `start` to `end`.
///
/// Edges are undirected: every incident edge of a settled node is relaxed
/// regardless of which endpoint was passed first to `connect`. Weights are
/// assumed non-negative. Any edge relaxed during the search must have a
/// weight, otherwise the search fails with `MissingWeight`.
///
/// Returns `SearchOutcome::Unreachable` when the frontier empties before
/// `end` is settled.
#[tracing::instrument(skip(graph, weights, opts), fields(start = %start, end = %end, frontier = %opts.frontier, nodes = graph.len()))]
pub fn shortest_path_with(
    graph: &Graph,
    weights: &WeightMap,
    start: Node,
    end: Node,
    opts: &SearchOptions,
) -> Result<SearchOutcome> {
    ensure_owned!(graph, start);
    ensure_owned!(graph, end);

    match opts.frontier {
        FrontierKind::LinearScan => run(graph, weights, start, end, LinearScanFrontier),
        FrontierKind::BinaryHeap => run(graph, weights, start, end, HeapFrontier::default()),
    }
}

fn run<F: Frontier>(
    graph: &Graph,
    weights: &WeightMap,
    start: Node,
    end: Node,
    mut frontier: F,
) -> Result<SearchOutcome> {
    let mut state = DijkstraState::new(graph.len());
    state.relax(
        start.index(),
        SearchRecord {
            price: 0.0,
            previous: None,
        },
    );
    frontier.discovered(start.index(), 0.0);

    // Main Dijkstra loop
    loop {
        let Some(current) = frontier.select(&state.records, &state.finalized) else {
            log_search_stats!(state.stats, "shortest_path");
            tracing::debug!("target unreachable");
            return Ok(SearchOutcome::Unreachable);
        };
        state.stats.settled += 1;

        if current == end.index() {
            break;
        }

        let price = state.price(current);
        tracing::trace!(node = current, price, "settle");

        let view = graph.node(current)?;
        for edge in view.incident_edges() {
            let candidate = price + weights.weight(edge)?;
            let next = edge.other_node(view.id())?;
            let record = SearchRecord {
                price: candidate,
                previous: Some(current),
            };
            if state.relax(next.index(), record) {
                tracing::trace!(node = next.index(), price = candidate, via = current, "relax");
                frontier.discovered(next.index(), candidate);
            }
        }

        state.finalized[current] = true;
    }

    let nodes = reconstruct_path(graph, &state.records, end)?;
    let cost = state.price(end.index());
    log_search_stats!(state.stats, "shortest_path");
    tracing::debug!(cost, hops = nodes.len().saturating_sub(1), "path found");

    Ok(SearchOutcome::Found(ShortestPath {
        nodes,
        cost,
        stats: state.stats,
    }))
}

#[cfg(test)]
mod tests;
