//! Hamiltonian circuit detection by exhaustive backtracking
//!
//! Directedness is ignored: every edge contributes undirected adjacency
//! for this search. Worst case is factorial in node count, which the
//! edge cap keeps tolerable.

use std::collections::HashSet;

use crate::graph::algos::pairs::first_connecting_edge;
use crate::graph::model::{Adjacency, Graph};
use crate::graph::types::CircuitResult;

/// Search for a closed walk visiting every node exactly once.
///
/// Start candidates are tried in node-discovery order; the first start
/// that closes a tour wins. Edge ids for the returned sequence come from
/// a first-match scan per consecutive node pair, which can pick an
/// arbitrary edge when parallel edges join the same pair.
#[tracing::instrument(skip(graph), fields(edges = graph.len()))]
pub fn hamiltonian_circuit(graph: &Graph) -> CircuitResult {
    let adjacency = graph.undirected_adjacency();
    if adjacency.is_empty() {
        return CircuitResult::not_found();
    }
    let total = adjacency.node_count();

    let starts: Vec<String> = adjacency.nodes().map(str::to_string).collect();
    for start in starts {
        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(start.clone());
        let mut path = vec![start.clone()];

        if backtrack(&adjacency, &start, &start, total, &mut path, &mut visited) {
            // Close the cycle, then resolve node pairs to edge ids
            path.push(start);
            let mut edges = Vec::with_capacity(path.len() - 1);
            for hop in path.windows(2) {
                match first_connecting_edge(graph, &hop[0], &hop[1]) {
                    Some(id) => edges.push(id),
                    None => return CircuitResult::not_found(),
                }
            }
            return CircuitResult::found(edges);
        }
    }

    CircuitResult::not_found()
}

fn backtrack(
    adjacency: &Adjacency,
    current: &str,
    start: &str,
    total: usize,
    path: &mut Vec<String>,
    visited: &mut HashSet<String>,
) -> bool {
    if path.len() == total
        && adjacency
            .neighbors(current)
            .iter()
            .any(|n| n.node == start)
    {
        return true;
    }

    for i in 0..adjacency.neighbors(current).len() {
        let next = adjacency.neighbors(current)[i].node.clone();
        if !visited.contains(&next) {
            visited.insert(next.clone());
            path.push(next.clone());

            if backtrack(adjacency, &next, start, total, path, visited) {
                return true;
            }

            path.pop();
            visited.remove(&next);
        }
    }
    false
}
