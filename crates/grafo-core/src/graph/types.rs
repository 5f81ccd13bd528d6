use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an edge, assigned at insertion and never reused
/// within a session, even after the edge is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(u32);

impl EdgeId {
    pub(crate) fn new(raw: u32) -> Self {
        EdgeId(raw)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// One entry in a node's adjacency list: the far endpoint plus the
/// edge that reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor {
    pub node: String,
    pub edge: EdgeId,
}

/// Outcome of a circuit query (Eulerian or Hamiltonian).
///
/// `edges` is the traversal order when `found`, empty otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct CircuitResult {
    pub found: bool,
    pub edges: Vec<EdgeId>,
}

impl CircuitResult {
    pub fn not_found() -> Self {
        CircuitResult {
            found: false,
            edges: Vec::new(),
        }
    }

    pub fn found(edges: Vec<EdgeId>) -> Self {
        CircuitResult { found: true, edges }
    }
}

/// Shortest-path query result as rendered by the host.
///
/// `found` is false when the target is unreachable (or trivially equal
/// to the source); `total_weight` is the sum of edge weights on the path.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub total_weight: i64,
    pub edges: Vec<EdgeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_id_display() {
        assert_eq!(EdgeId::new(0).to_string(), "e0");
        assert_eq!(EdgeId::new(17).to_string(), "e17");
    }

    #[test]
    fn test_edge_id_serializes_as_number() {
        let json = serde_json::to_string(&EdgeId::new(3)).unwrap();
        assert_eq!(json, "3");
    }

    #[test]
    fn test_circuit_result_constructors() {
        let miss = CircuitResult::not_found();
        assert!(!miss.found);
        assert!(miss.edges.is_empty());

        let hit = CircuitResult::found(vec![EdgeId::new(1), EdgeId::new(2)]);
        assert!(hit.found);
        assert_eq!(hit.edges.len(), 2);
    }
}
