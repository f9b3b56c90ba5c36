//! Graph store: fixed node set with a dynamic, undirected edge set
//!
//! The graph owns one incident list per node. Each list holds `Copy` edge
//! handles, so an edge is reachable from both endpoints without either node
//! owning it. Connect and disconnect always update both lists together.

use std::collections::HashSet;

use crate::ensure_owned;
use crate::error::{Result, WayfindError};
use crate::graph::types::{Edge, EdgeId, GraphId, Node};

/// Undirected multigraph over nodes `0..len`
#[derive(Debug)]
pub struct Graph {
    id: GraphId,
    incident: Vec<Vec<Edge>>,
    next_edge: u64,
}

/// A clone is a new graph: it gets its own `GraphId`, so handles taken from
/// the original are foreign to it and vice versa.
impl Clone for Graph {
    fn clone(&self) -> Self {
        let id = GraphId::next();
        let incident = self
            .incident
            .iter()
            .map(|list| list.iter().map(|edge| edge.rehome(id)).collect())
            .collect();
        Graph {
            id,
            incident,
            next_edge: self.next_edge,
        }
    }
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Self {
        Graph {
            id: GraphId::next(),
            incident: vec![Vec::new(); node_count],
            next_edge: 0,
        }
    }

    /// Build a graph sized to the largest index in `pairs` and connect each
    /// pair in order.
    ///
    /// Returns the graph together with the created edges, in the same order as
    /// `pairs`, so callers can attach weights to them.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Result<(Self, Vec<Edge>)> {
        let node_count = pairs
            .iter()
            .map(|&(a, b)| {
                let highest = a.max(b);
                highest.checked_add(1).ok_or(WayfindError::IndexOutOfRange {
                    index: highest,
                    len: usize::MAX,
                })
            })
            .try_fold(0, |count, needed| needed.map(|n| count.max(n)))?;
        let mut graph = Graph::new(node_count);
        let edges = pairs
            .iter()
            .map(|&(a, b)| graph.connect_indices(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok((graph, edges))
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.incident.len()
    }

    pub fn is_empty(&self) -> bool {
        self.incident.is_empty()
    }

    /// True if `node` was created by this graph
    pub fn contains(&self, node: Node) -> bool {
        node.graph() == self.id && node.index() < self.incident.len()
    }

    /// Look up a node by index
    pub fn node(&self, index: usize) -> Result<NodeRef<'_>> {
        if index >= self.incident.len() {
            return Err(WayfindError::IndexOutOfRange {
                index,
                len: self.incident.len(),
            });
        }
        Ok(NodeRef {
            graph: self,
            node: Node::new(self.id, index),
        })
    }

    /// Borrow a view of a node handle, checking that it belongs here
    pub fn view(&self, node: Node) -> Result<NodeRef<'_>> {
        ensure_owned!(self, node);
        Ok(NodeRef { graph: self, node })
    }

    /// All nodes in construction order
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'_>> + '_ {
        (0..self.incident.len()).map(move |index| NodeRef {
            graph: self,
            node: Node::new(self.id, index),
        })
    }

    /// All live edges, each reported once.
    ///
    /// Order is by first appearance when walking nodes in index order and each
    /// node's incident list in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let mut seen = HashSet::new();
        self.incident
            .iter()
            .flatten()
            .copied()
            .filter(move |edge| seen.insert(edge.id()))
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Create a new edge between two distinct nodes of this graph
    ///
    /// Repeated calls with the same pair create parallel edges.
    pub fn connect(&mut self, a: Node, b: Node) -> Result<Edge> {
        ensure_owned!(self, a);
        ensure_owned!(self, b);
        if a == b {
            return Err(WayfindError::SelfLoop { node: a });
        }

        let edge = Edge::new(EdgeId(self.next_edge), a, b);
        self.next_edge += 1;
        self.incident[a.index()].push(edge);
        self.incident[b.index()].push(edge);

        tracing::debug!(edge = %edge.id(), from = %a, to = %b, "connect");
        Ok(edge)
    }

    /// Connect two nodes by index
    pub fn connect_indices(&mut self, a: usize, b: usize) -> Result<Edge> {
        let a = self.node(a)?.id();
        let b = self.node(b)?.id();
        self.connect(a, b)
    }

    /// Remove an edge from both endpoints' incident lists.
    ///
    /// Returns `Ok(false)` when the edge was already disconnected; a second
    /// disconnect of the same edge is a no-op.
    pub fn disconnect(&mut self, edge: Edge) -> Result<bool> {
        let (from, to) = edge.endpoints();
        if edge.graph() != self.id || !self.contains(from) || !self.contains(to) {
            return Err(WayfindError::invalid_reference(format!(
                "edge {}",
                edge.id()
            )));
        }

        let at_from = position_of(&self.incident[from.index()], edge.id());
        let at_to = position_of(&self.incident[to.index()], edge.id());
        match (at_from, at_to) {
            (Some(i), Some(j)) => {
                self.incident[from.index()].remove(i);
                self.incident[to.index()].remove(j);
                tracing::debug!(edge = %edge.id(), from = %from, to = %to, "disconnect");
                Ok(true)
            }
            (None, None) => {
                tracing::debug!(edge = %edge.id(), "disconnect: edge already removed");
                Ok(false)
            }
            // Registered on one endpoint only: the handle does not describe
            // an edge of this graph.
            _ => Err(WayfindError::invalid_reference(format!(
                "edge {}",
                edge.id()
            ))),
        }
    }

    pub(crate) fn incident_of(&self, node: Node) -> &[Edge] {
        &self.incident[node.index()]
    }
}

fn position_of(list: &[Edge], id: EdgeId) -> Option<usize> {
    list.iter().position(|edge| edge.id() == id)
}

/// Borrowed view of a node and its current incident edges
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'g> {
    graph: &'g Graph,
    node: Node,
}

impl<'g> NodeRef<'g> {
    /// The underlying node handle
    pub fn id(&self) -> Node {
        self.node
    }

    pub fn index(&self) -> usize {
        self.node.index()
    }

    /// Edges touching this node, in the order they were connected
    pub fn incident_edges(&self) -> impl Iterator<Item = Edge> + 'g {
        self.graph.incident_of(self.node).iter().copied()
    }

    /// Opposite endpoint of each incident edge, in the same order
    pub fn incident_nodes(&self) -> impl Iterator<Item = Node> + 'g {
        let node = self.node;
        self.incident_edges().map(move |edge| edge.opposite(node))
    }

    pub fn degree(&self) -> usize {
        self.graph.incident_of(self.node).len()
    }
}
