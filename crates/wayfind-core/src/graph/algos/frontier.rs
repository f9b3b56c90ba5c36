//! Frontier selection for the shortest-path search
//!
//! Both strategies pick the unfinalized node with the lowest recorded price,
//! breaking ties by lowest node index, so they settle nodes in the same order.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Best known price and predecessor of a discovered node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRecord {
    pub price: f64,
    pub previous: Option<usize>,
}

/// Source of the next node to finalize
pub trait Frontier {
    /// Note that `node` has a new best price
    fn discovered(&mut self, node: usize, price: f64);

    /// Remove and return the cheapest unfinalized node that has a record
    fn select(&mut self, records: &[Option<SearchRecord>], finalized: &[bool]) -> Option<usize>;
}

/// Linear scan over node order
#[derive(Debug, Default)]
pub struct LinearScanFrontier;

impl Frontier for LinearScanFrontier {
    fn discovered(&mut self, _node: usize, _price: f64) {}

    fn select(&mut self, records: &[Option<SearchRecord>], finalized: &[bool]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (node, record) in records.iter().enumerate() {
            if finalized[node] {
                continue;
            }
            if let Some(record) = record {
                // Strict comparison keeps the first node seen on ties
                if best.is_none_or(|(_, price)| record.price < price) {
                    best = Some((node, record.price));
                }
            }
        }
        best.map(|(node, _)| node)
    }
}

/// Min-heap entry ordered by price, then node index
#[derive(Debug, Clone, Copy)]
pub struct HeapEntry {
    pub node: usize,
    pub price: f64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.price
            .total_cmp(&other.price)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Binary heap with lazy deletion
///
/// A node is pushed again each time its price drops; entries whose node is
/// already finalized or whose price no longer matches the record are stale and
/// skipped on pop.
#[derive(Debug, Default)]
pub struct HeapFrontier {
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl Frontier for HeapFrontier {
    fn discovered(&mut self, node: usize, price: f64) {
        self.heap.push(Reverse(HeapEntry { node, price }));
    }

    fn select(&mut self, records: &[Option<SearchRecord>], finalized: &[bool]) -> Option<usize> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if finalized[entry.node] {
                continue;
            }
            match records[entry.node] {
                Some(record) if record.price == entry.price => return Some(entry.node),
                _ => continue,
            }
        }
        None
    }
}
