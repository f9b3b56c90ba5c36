//! Path reconstruction and costing

use crate::error::{Result, WayfindError};
use crate::graph::algos::frontier::SearchRecord;
use crate::graph::{Graph, Node, WeightMap};

/// Walk predecessor links from `end` back to the start and return the nodes in
/// start-to-end order.
pub(crate) fn reconstruct_path(
    graph: &Graph,
    records: &[Option<SearchRecord>],
    end: Node,
) -> Result<Vec<Node>> {
    let mut path = Vec::new();
    let mut cursor = Some(end.index());

    while let Some(index) = cursor {
        path.push(graph.node(index)?.id());
        cursor = records[index].and_then(|record| record.previous);
    }

    path.reverse();
    Ok(path)
}

/// Total weight of a node sequence.
///
/// Each consecutive pair is charged the cheapest weighted edge joining them.
/// Fails if a pair is not adjacent, or if every joining edge lacks a weight.
pub fn path_cost(graph: &Graph, weights: &WeightMap, nodes: &[Node]) -> Result<f64> {
    let mut total = 0.0;

    for pair in nodes.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let joining: Vec<_> = graph
            .view(a)?
            .incident_edges()
            .filter(|edge| edge.is_incident(b))
            .collect();

        let Some(&first) = joining.first() else {
            return Err(WayfindError::usage(format!(
                "nodes {} and {} are not adjacent",
                a, b
            )));
        };

        let cheapest = joining
            .iter()
            .filter_map(|&edge| weights.get(edge))
            .min_by(f64::total_cmp);

        match cheapest {
            Some(weight) => total += weight,
            None => return Err(WayfindError::MissingWeight { edge: first.id() }),
        }
    }

    Ok(total)
}
