//! Eulerian circuit/trail detection
//!
//! Two stages: a degree-parity gate, then a constructive Hierholzer
//! walk with an explicit stack. Degree is the expanded adjacency-list
//! length, so a directed edge counts only at its source. The walk
//! consumes each edge at most once in either direction; success means
//! every live edge was consumed.

use std::collections::{HashMap, HashSet};

use crate::graph::model::Graph;
use crate::graph::types::{CircuitResult, EdgeId};

/// Report whether the graph admits an Eulerian circuit (no odd-degree
/// nodes) or trail (exactly two), and if so the edge ids in walk order.
#[tracing::instrument(skip(graph), fields(edges = graph.len()))]
pub fn eulerian_circuit(graph: &Graph) -> CircuitResult {
    if graph.is_empty() {
        return CircuitResult::not_found();
    }

    let adjacency = graph.adjacency();
    let odd: Vec<&str> = adjacency
        .nodes()
        .filter(|n| adjacency.degree(n) % 2 == 1)
        .collect();

    // 0 odd nodes: circuit possible; 2: open trail possible; else: neither
    if !matches!(odd.len(), 0 | 2) {
        return CircuitResult::not_found();
    }

    // An open trail must start at an odd node; a circuit can start anywhere
    let start = match odd.first() {
        Some(n) => n.to_string(),
        None => match adjacency.nodes().next() {
            Some(n) => n.to_string(),
            None => return CircuitResult::not_found(),
        },
    };

    // Hierholzer with an explicit stack. Dead-end prefixes are spliced
    // out as the stack unwinds, so greedy neighbor order cannot cause a
    // false negative. Each stack frame remembers the edge that got there.
    let mut used: HashSet<EdgeId> = HashSet::new();
    let mut cursor: HashMap<String, usize> = HashMap::new();
    let mut stack: Vec<(String, Option<EdgeId>)> = vec![(start, None)];
    let mut walk: Vec<EdgeId> = Vec::new();

    while let Some((node, via)) = stack.last().cloned() {
        let neighbors = adjacency.neighbors(&node);
        let idx = cursor.entry(node.clone()).or_insert(0);
        while *idx < neighbors.len() && used.contains(&neighbors[*idx].edge) {
            *idx += 1;
        }
        if *idx < neighbors.len() {
            let next = &neighbors[*idx];
            used.insert(next.edge);
            stack.push((next.node.clone(), Some(next.edge)));
        } else {
            stack.pop();
            if let Some(edge) = via {
                walk.push(edge);
            }
        }
    }

    walk.reverse();
    if walk.len() == graph.len() {
        CircuitResult::found(walk)
    } else {
        // Parity passed but some edges sit in another component
        CircuitResult::not_found()
    }
}
