use super::*;
use crate::error::WayfindError;
use crate::graph::algos::path::path_cost;
use crate::graph::Edge;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BOTH_FRONTIERS: [FrontierKind; 2] = [FrontierKind::LinearScan, FrontierKind::BinaryHeap];

/// Build a graph from `(a, b, weight)` triples
fn weighted(node_count: usize, edges: &[(usize, usize, f64)]) -> (Graph, WeightMap) {
    let mut graph = Graph::new(node_count);
    let mut weights = WeightMap::new();
    for &(a, b, w) in edges {
        let edge = graph.connect_indices(a, b).unwrap();
        weights.insert(edge, w).unwrap();
    }
    (graph, weights)
}

fn node(graph: &Graph, index: usize) -> Node {
    graph.node(index).unwrap().id()
}

fn search(
    graph: &Graph,
    weights: &WeightMap,
    from: usize,
    to: usize,
    frontier: FrontierKind,
) -> SearchOutcome {
    let opts = SearchOptions { frontier };
    shortest_path_with(graph, weights, node(graph, from), node(graph, to), &opts).unwrap()
}

/// Cheapest simple path cost by exhaustive enumeration
fn brute_force_cost(graph: &Graph, weights: &WeightMap, from: usize, to: usize) -> Option<f64> {
    fn walk(
        graph: &Graph,
        weights: &WeightMap,
        current: usize,
        to: usize,
        visited: &mut Vec<bool>,
        cost: f64,
        best: &mut Option<f64>,
    ) {
        if current == to {
            if best.is_none_or(|b| cost < b) {
                *best = Some(cost);
            }
            return;
        }
        visited[current] = true;
        let view = graph.node(current).unwrap();
        for edge in view.incident_edges() {
            let next = edge.other_node(view.id()).unwrap().index();
            if !visited[next] {
                let w = weights.get(edge).unwrap();
                walk(graph, weights, next, to, visited, cost + w, best);
            }
        }
        visited[current] = false;
    }

    let mut best = None;
    let mut visited = vec![false; graph.len()];
    walk(graph, weights, from, to, &mut visited, 0.0, &mut best);
    best
}

fn random_graph(rng: &mut StdRng, node_count: usize, edge_count: usize) -> (Graph, WeightMap) {
    let mut graph = Graph::new(node_count);
    let mut weights = WeightMap::new();
    for _ in 0..edge_count {
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        if a == b {
            continue;
        }
        let edge = graph.connect_indices(a, b).unwrap();
        // Small integer weights make ties common
        weights.insert(edge, rng.gen_range(0..6) as f64).unwrap();
    }
    (graph, weights)
}

/// The four-node sample: cheapest route to 3 goes through 2
#[test]
fn test_reference_sample() {
    let (graph, weights) = weighted(
        4,
        &[
            (0, 1, 1.0),
            (0, 2, 2.0),
            (0, 3, 6.0),
            (1, 3, 4.0),
            (2, 3, 2.0),
        ],
    );

    for frontier in BOTH_FRONTIERS {
        let path = search(&graph, &weights, 0, 3, frontier).into_path().unwrap();
        assert_eq!(path.indices(), vec![0, 2, 3]);
        assert_eq!(path.cost, 4.0);
    }
}

#[test]
fn test_disconnected_nodes_unreachable() {
    let graph = Graph::new(2);
    let weights = WeightMap::new();

    for frontier in BOTH_FRONTIERS {
        assert_eq!(
            search(&graph, &weights, 0, 1, frontier),
            SearchOutcome::Unreachable
        );
    }
}

#[test]
fn test_direct_edge_beats_two_hops() {
    let (graph, weights) = weighted(3, &[(0, 1, 5.0), (1, 2, 5.0), (0, 2, 3.0)]);

    let path = search(&graph, &weights, 0, 2, FrontierKind::LinearScan)
        .into_path()
        .unwrap();
    assert_eq!(path.indices(), vec![0, 2]);
    assert_eq!(path.cost, 3.0);
}

#[test]
fn test_start_equals_end() {
    let (graph, weights) = weighted(3, &[(0, 1, 1.0), (1, 2, 1.0)]);

    for frontier in BOTH_FRONTIERS {
        let path = search(&graph, &weights, 1, 1, frontier).into_path().unwrap();
        assert_eq!(path.indices(), vec![1]);
        assert_eq!(path.cost, 0.0);
        assert_eq!(path.hops(), 0);
        assert_eq!(path.stats.relaxations, 1);
    }
}

#[test]
fn test_start_equals_end_needs_no_weights() {
    let mut graph = Graph::new(2);
    graph.connect_indices(0, 1).unwrap();
    let outcome = search(&graph, &WeightMap::new(), 0, 0, FrontierKind::LinearScan);
    assert!(outcome.is_found());
}

/// Edges connected as (to, from) relative to the search direction must still
/// be traversed.
#[test]
fn test_edges_are_undirected() {
    let (graph, weights) = weighted(4, &[(1, 0, 1.0), (2, 1, 1.0), (3, 2, 1.0)]);

    for frontier in BOTH_FRONTIERS {
        let forward = search(&graph, &weights, 0, 3, frontier).into_path().unwrap();
        assert_eq!(forward.indices(), vec![0, 1, 2, 3]);

        let backward = search(&graph, &weights, 3, 0, frontier).into_path().unwrap();
        assert_eq!(backward.indices(), vec![3, 2, 1, 0]);
        assert_eq!(forward.cost, backward.cost);
    }
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let (graph, weights) = weighted(2, &[(0, 1, 8.0), (1, 0, 3.0), (0, 1, 5.0)]);

    let path = search(&graph, &weights, 0, 1, FrontierKind::BinaryHeap)
        .into_path()
        .unwrap();
    assert_eq!(path.indices(), vec![0, 1]);
    assert_eq!(path.cost, 3.0);
}

#[test]
fn test_zero_weight_edges() {
    let (graph, weights) = weighted(3, &[(0, 1, 0.0), (1, 2, 0.0), (0, 2, 1.0)]);

    let path = search(&graph, &weights, 0, 2, FrontierKind::LinearScan)
        .into_path()
        .unwrap();
    assert_eq!(path.indices(), vec![0, 1, 2]);
    assert_eq!(path.cost, 0.0);
}

/// Two routes of equal cost: the one through the lower-indexed node wins
#[test]
fn test_tie_break_prefers_lower_index() {
    let (graph, weights) = weighted(
        4,
        &[(0, 2, 1.0), (2, 3, 1.0), (0, 1, 1.0), (1, 3, 1.0)],
    );

    for frontier in BOTH_FRONTIERS {
        let path = search(&graph, &weights, 0, 3, frontier).into_path().unwrap();
        assert_eq!(path.indices(), vec![0, 1, 3]);
    }
}

#[test]
fn test_target_neighbours_not_relaxed() {
    // Edge 1-2 has no weight, but the search stops once 1 is settled
    let mut graph = Graph::new(3);
    let mut weights = WeightMap::new();
    let edge = graph.connect_indices(0, 1).unwrap();
    weights.insert(edge, 1.0).unwrap();
    graph.connect_indices(1, 2).unwrap();

    let path = search(&graph, &weights, 0, 1, FrontierKind::LinearScan)
        .into_path()
        .unwrap();
    assert_eq!(path.indices(), vec![0, 1]);
}

#[test]
fn test_missing_weight_fails() {
    let mut graph = Graph::new(3);
    let mut weights = WeightMap::new();
    let weighted_edge = graph.connect_indices(0, 1).unwrap();
    weights.insert(weighted_edge, 1.0).unwrap();
    let bare = graph.connect_indices(0, 2).unwrap();

    let err = shortest_path(&graph, &weights, node(&graph, 0), node(&graph, 2)).unwrap_err();
    assert!(matches!(err, WayfindError::MissingWeight { edge } if edge == bare.id()));
}

#[test]
fn test_foreign_nodes_rejected() {
    let graph = Graph::new(2);
    let other = Graph::new(2);
    let weights = WeightMap::new();

    let err = shortest_path(&graph, &weights, node(&other, 0), node(&graph, 1)).unwrap_err();
    assert!(matches!(err, WayfindError::InvalidReference { .. }));

    let err = shortest_path(&graph, &weights, node(&graph, 0), node(&other, 1)).unwrap_err();
    assert!(matches!(err, WayfindError::InvalidReference { .. }));
}

#[test]
fn test_clone_rejects_original_nodes() {
    let (graph, weights) = weighted(2, &[(0, 1, 1.0)]);
    let copy = graph.clone();

    let err = shortest_path(&copy, &weights, node(&graph, 0), node(&copy, 1)).unwrap_err();
    assert!(matches!(err, WayfindError::InvalidReference { .. }));
}

/// Weights keyed on one graph's edges are never read by a search on its clone
#[test]
fn test_clone_weights_do_not_alias() {
    let mut graph = Graph::new(4);
    let mut copy = graph.clone();
    let mut weights = WeightMap::new();
    let original_edge = graph.connect_indices(0, 1).unwrap();
    let copied_edge = copy.connect_indices(2, 3).unwrap();
    weights.insert(original_edge, 1.0).unwrap();
    weights.insert(copied_edge, 9.0).unwrap();
    assert_eq!(weights.len(), 2);

    for frontier in BOTH_FRONTIERS {
        let path = search(&graph, &weights, 0, 1, frontier).into_path().unwrap();
        assert_eq!(path.cost, 1.0);
        let path = search(&copy, &weights, 2, 3, frontier).into_path().unwrap();
        assert_eq!(path.cost, 9.0);
    }
}

#[test]
fn test_clone_without_weights_fails_missing_weight() {
    let (graph, weights) = weighted(2, &[(0, 1, 1.0)]);
    let copy = graph.clone();

    let err = shortest_path(&copy, &weights, node(&copy, 0), node(&copy, 1)).unwrap_err();
    assert!(matches!(err, WayfindError::MissingWeight { .. }));
}

#[test]
fn test_disconnect_removes_route() {
    let mut graph = Graph::new(3);
    let mut weights = WeightMap::new();
    let shortcut = graph.connect_indices(0, 2).unwrap();
    weights.insert(shortcut, 1.0).unwrap();
    for (a, b) in [(0, 1), (1, 2)] {
        let edge = graph.connect_indices(a, b).unwrap();
        weights.insert(edge, 2.0).unwrap();
    }

    let before = search(&graph, &weights, 0, 2, FrontierKind::LinearScan)
        .into_path()
        .unwrap();
    assert_eq!(before.indices(), vec![0, 2]);

    graph.disconnect(shortcut).unwrap();
    let after = search(&graph, &weights, 0, 2, FrontierKind::LinearScan)
        .into_path()
        .unwrap();
    assert_eq!(after.indices(), vec![0, 1, 2]);
    assert_eq!(after.cost, 4.0);
}

#[test]
fn test_disconnect_last_route_makes_unreachable() {
    let mut graph = Graph::new(2);
    let mut weights = WeightMap::new();
    let edge = graph.connect_indices(0, 1).unwrap();
    weights.insert(edge, 1.0).unwrap();
    graph.disconnect(edge).unwrap();

    assert_eq!(
        search(&graph, &weights, 0, 1, FrontierKind::BinaryHeap),
        SearchOutcome::Unreachable
    );
}

#[test]
fn test_unreachable_component() {
    let (graph, weights) = weighted(5, &[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 1.0)]);
    for frontier in BOTH_FRONTIERS {
        assert_eq!(
            search(&graph, &weights, 0, 4, frontier),
            SearchOutcome::Unreachable
        );
    }
}

#[test]
fn test_search_does_not_mutate_graph() {
    let (graph, weights) = weighted(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    let before: Vec<Edge> = graph.edges().collect();
    search(&graph, &weights, 0, 2, FrontierKind::LinearScan);
    let after: Vec<Edge> = graph.edges().collect();
    assert_eq!(before, after);
}

#[test]
fn test_stats_count_settled_nodes() {
    let (graph, weights) = weighted(3, &[(0, 1, 1.0), (1, 2, 1.0)]);
    let path = search(&graph, &weights, 0, 2, FrontierKind::LinearScan)
        .into_path()
        .unwrap();
    assert_eq!(path.stats.settled, 3);
    assert_eq!(path.stats.relaxations, 3);
}

/// Seeded random graphs: paths are valid, optimal, and identical across
/// frontier strategies.
#[test]
fn test_random_graphs_match_brute_force() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..200 {
        let node_count = rng.gen_range(2..7);
        let edge_count = rng.gen_range(0..12);
        let (graph, weights) = random_graph(&mut rng, node_count, edge_count);
        let from = rng.gen_range(0..node_count);
        let to = rng.gen_range(0..node_count);

        let linear = search(&graph, &weights, from, to, FrontierKind::LinearScan);
        let heap = search(&graph, &weights, from, to, FrontierKind::BinaryHeap);
        assert_eq!(
            linear.path().map(|p| p.indices()),
            heap.path().map(|p| p.indices())
        );

        match (linear, brute_force_cost(&graph, &weights, from, to)) {
            (SearchOutcome::Found(path), Some(best)) => {
                assert_eq!(path.start().map(|n| n.index()), Some(from));
                assert_eq!(path.end().map(|n| n.index()), Some(to));
                assert_eq!(path.cost, best);
                assert_eq!(path_cost(&graph, &weights, &path.nodes).unwrap(), best);
            }
            (SearchOutcome::Unreachable, None) => {}
            (outcome, best) => {
                panic!("search {:?} disagrees with brute force {:?}", outcome, best)
            }
        }
    }
}
