//! The editable graph: an ordered edge list with on-demand adjacency
//!
//! Nodes are opaque string labels and are never stored on their own;
//! the node set is whatever the live edges mention. Edge ids are stable
//! for the lifetime of a session and never reused after removal.

use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::error::{GrafoError, Result};
use crate::graph::types::{EdgeId, Neighbor};

/// A single weighted edge. Immutable once added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub from: String,
    pub to: String,
    pub weight: i64,
    pub directed: bool,
}

impl Edge {
    /// Whether either endpoint is `node`
    pub fn touches(&self, node: &str) -> bool {
        self.from == node || self.to == node
    }

    /// Whether this edge joins `a` and `b` in either orientation
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Ordered edge set with policy checks on mutation.
///
/// Insertion order is preserved; it drives tie-breaking and iteration
/// determinism in the algorithms but never reachability.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    next_id: u32,
    config: GraphConfig,
}

impl Graph {
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    pub fn with_config(config: GraphConfig) -> Self {
        Graph {
            edges: Vec::new(),
            next_id: 0,
            config,
        }
    }

    /// Live edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a live edge by id
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Append an edge. Fails without mutating the graph when an endpoint
    /// label is invalid or the edge ceiling has been reached.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: i64, directed: bool) -> Result<EdgeId> {
        if a.is_empty() || b.is_empty() {
            return Err(GrafoError::InvalidEndpoints {
                reason: "node labels must be non-empty".to_string(),
            });
        }
        if a == b && !self.config.allow_self_loops {
            return Err(GrafoError::InvalidEndpoints {
                reason: format!("self-loop on '{}' is not allowed", a),
            });
        }
        if self.edges.len() >= self.config.max_edges {
            return Err(GrafoError::CapacityExceeded {
                limit: self.config.max_edges,
            });
        }

        let id = EdgeId::new(self.next_id);
        self.next_id += 1;
        self.edges.push(Edge {
            id,
            from: a.to_string(),
            to: b.to_string(),
            weight,
            directed,
        });
        tracing::debug!(edge = %id, from = a, to = b, weight, directed, "add_edge");
        Ok(id)
    }

    /// Remove every edge touching `node`; returns the count removed.
    /// An absent node is not an error, it just removes nothing.
    pub fn remove_incident(&mut self, node: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(node));
        let removed = before - self.edges.len();
        tracing::debug!(node, removed, "remove_incident");
        removed
    }

    /// Drop all edges (and with them, all nodes)
    pub fn clear(&mut self) {
        tracing::debug!(edges = self.edges.len(), "clear");
        self.edges.clear();
    }

    /// Derive the adjacency view of the current edge set.
    ///
    /// Each undirected edge expands into both directions, each directed
    /// edge into one; the far endpoint of a directed edge still appears
    /// as a node. Recomputed fresh on every call so callers always see a
    /// consistent snapshot.
    pub fn adjacency(&self) -> Adjacency {
        let mut adj = Adjacency::default();
        for edge in &self.edges {
            adj.add_arc(&edge.from, &edge.to, edge.id);
            if edge.directed {
                adj.touch(&edge.to);
            } else {
                adj.add_arc(&edge.to, &edge.from, edge.id);
            }
        }
        adj
    }

    /// Adjacency that ignores edge direction entirely (used by the
    /// Hamiltonian search, which treats the graph as undirected).
    pub fn undirected_adjacency(&self) -> Adjacency {
        let mut adj = Adjacency::default();
        for edge in &self.edges {
            adj.add_arc(&edge.from, &edge.to, edge.id);
            adj.add_arc(&edge.to, &edge.from, edge.id);
        }
        adj
    }
}

/// Node-to-neighbors mapping derived from a [`Graph`] snapshot.
///
/// Nodes are kept in first-mention order over the edge list; neighbor
/// lists are in edge insertion order.
#[derive(Debug, Clone, Default)]
pub struct Adjacency {
    order: Vec<String>,
    lists: HashMap<String, Vec<Neighbor>>,
}

impl Adjacency {
    /// Ensure `node` exists, preserving first-mention order
    fn touch(&mut self, node: &str) {
        if !self.lists.contains_key(node) {
            self.order.push(node.to_string());
            self.lists.insert(node.to_string(), Vec::new());
        }
    }

    fn add_arc(&mut self, from: &str, to: &str, edge: EdgeId) {
        if !self.lists.contains_key(from) {
            self.order.push(from.to_string());
        }
        self.lists.entry(from.to_string()).or_default().push(Neighbor {
            node: to.to_string(),
            edge,
        });
    }

    /// Nodes in first-mention order
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of distinct nodes
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Neighbor list for `node` (empty if the node is absent)
    pub fn neighbors(&self, node: &str) -> &[Neighbor] {
        self.lists.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Degree as counted for the Eulerian parity test: the length of the
    /// node's expanded adjacency list (a directed edge counts only at
    /// its source).
    pub fn degree(&self, node: &str) -> usize {
        self.neighbors(node).len()
    }
}
