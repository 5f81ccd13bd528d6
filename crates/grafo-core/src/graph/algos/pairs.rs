//! Endpoint-pair to edge-id lookup shared by path reconstruction
//!
//! Both lookups assume at most one edge per unordered node pair; with
//! parallel edges an arbitrary matching edge is chosen (for the index,
//! the last inserted; for the scan, the first in insertion order). This
//! nondeterminism is inherited behavior, not a contract.

use std::collections::HashMap;

use crate::graph::model::Graph;
use crate::graph::types::EdgeId;

/// Unordered endpoint-pair index, built once per query over the live
/// edge set. Directed edges are indexed under both orderings too.
#[derive(Debug, Default)]
pub struct EdgePairIndex {
    map: HashMap<(String, String), EdgeId>,
}

impl EdgePairIndex {
    pub fn build(graph: &Graph) -> Self {
        let mut map = HashMap::new();
        for edge in graph.edges() {
            map.insert((edge.from.clone(), edge.to.clone()), edge.id);
            map.insert((edge.to.clone(), edge.from.clone()), edge.id);
        }
        EdgePairIndex { map }
    }

    pub fn get(&self, a: &str, b: &str) -> Option<EdgeId> {
        self.map.get(&(a.to_string(), b.to_string())).copied()
    }
}

/// First edge in insertion order joining `a` and `b` in either
/// orientation, if any.
pub fn first_connecting_edge(graph: &Graph, a: &str, b: &str) -> Option<EdgeId> {
    graph.edges().iter().find(|e| e.connects(a, b)).map(|e| e.id)
}
