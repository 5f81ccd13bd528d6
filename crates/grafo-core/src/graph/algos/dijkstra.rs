//! Single-source-to-target shortest path (Dijkstra)
//!
//! Correct for non-negative weights only; negative weights are accepted
//! by the model and silently degrade the result, never crash.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::algos::pairs::EdgePairIndex;
use crate::graph::model::Graph;
use crate::graph::types::EdgeId;

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone)]
struct HeapEntry {
    node: String,
    dist: i64,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.dist.cmp(&other.dist)
    }
}

/// Find the cheapest path from `source` to `target` over the current
/// edge set, respecting per-edge directedness.
///
/// Returns the path as edge ids in source-to-target order. The empty
/// sequence means "no path" (unreachable target, or `source == target`);
/// it is never an error.
#[tracing::instrument(skip(graph), fields(edges = graph.len()))]
pub fn find_path(graph: &Graph, source: &str, target: &str) -> Vec<EdgeId> {
    if source == target {
        return Vec::new();
    }

    let adjacency = graph.adjacency();
    let pairs = EdgePairIndex::build(graph);

    // Absent from `dist` means +infinity
    let mut dist: HashMap<String, i64> = HashMap::new();
    let mut prev: HashMap<String, String> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();

    dist.insert(source.to_string(), 0);
    heap.push(Reverse(HeapEntry {
        node: source.to_string(),
        dist: 0,
    }));

    while let Some(Reverse(HeapEntry { node, dist: d })) = heap.pop() {
        if node == target {
            break;
        }
        // Stale entry left behind by a later improvement
        if dist.get(&node).is_some_and(|best| d > *best) {
            continue;
        }

        for neighbor in adjacency.neighbors(&node) {
            let Some(edge) = graph.edge(neighbor.edge) else {
                continue;
            };
            // Saturating: negative weights degrade result quality but must
            // never overflow, and the clamp at i64::MIN stops the
            // relaxation loop on negative cycles
            let alt = d.saturating_add(edge.weight);
            if alt < dist.get(&neighbor.node).copied().unwrap_or(i64::MAX) {
                dist.insert(neighbor.node.clone(), alt);
                prev.insert(neighbor.node.clone(), node.clone());
                heap.push(Reverse(HeapEntry {
                    node: neighbor.node.clone(),
                    dist: alt,
                }));
            }
        }
    }

    reconstruct(&prev, &pairs, source, target)
}

/// Walk predecessor links from `target` back to `source`, map each hop
/// to an edge id through the pair index, and flip to forward order.
fn reconstruct(
    prev: &HashMap<String, String>,
    pairs: &EdgePairIndex,
    source: &str,
    target: &str,
) -> Vec<EdgeId> {
    let mut hops = Vec::new();
    let mut current = target;
    while let Some(pred) = prev.get(current) {
        match pairs.get(pred, current) {
            Some(id) => hops.push(id),
            None => return Vec::new(),
        }
        current = pred;
        if current == source {
            hops.reverse();
            return hops;
        }
    }
    Vec::new()
}
