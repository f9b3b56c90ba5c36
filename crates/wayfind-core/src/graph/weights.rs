use std::collections::HashMap;

use crate::error::{Result, WayfindError};
use crate::graph::types::Edge;

/// Caller-owned association of edges to traversal costs
///
/// Weights live outside the graph so the same topology can be searched under
/// different cost assignments. Keys are edge identities: parallel edges carry
/// independent weights.
#[derive(Debug, Clone, Default)]
pub struct WeightMap {
    weights: HashMap<Edge, f64>,
}

impl WeightMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        WeightMap {
            weights: HashMap::with_capacity(capacity),
        }
    }

    /// Record the cost of traversing `edge`, returning any previous value.
    ///
    /// Weights must be finite and non-negative.
    pub fn insert(&mut self, edge: Edge, weight: f64) -> Result<Option<f64>> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(WayfindError::InvalidWeight {
                edge: edge.id(),
                weight,
            });
        }
        Ok(self.weights.insert(edge, weight))
    }

    pub fn get(&self, edge: Edge) -> Option<f64> {
        self.weights.get(&edge).copied()
    }

    /// Weight of `edge`, failing if the caller never supplied one
    pub fn weight(&self, edge: Edge) -> Result<f64> {
        self.get(edge)
            .ok_or(WayfindError::MissingWeight { edge: edge.id() })
    }

    pub fn contains(&self, edge: Edge) -> bool {
        self.weights.contains_key(&edge)
    }

    pub fn remove(&mut self, edge: Edge) -> Option<f64> {
        self.weights.remove(&edge)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
