//! Graph policy configuration for grafo
//!
//! The host owns a `GraphConfig` and hands it to `Graph::with_config`.
//! There is no config file; policy is set programmatically or via CLI flags.

use serde::{Deserialize, Serialize};

/// Default ceiling on the number of live edges in a graph
pub const DEFAULT_MAX_EDGES: usize = 50;

/// Policy knobs for a [`Graph`](crate::graph::Graph)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum number of live edges; `add_edge` fails beyond this
    pub max_edges: usize,
    /// Whether an edge may connect a node to itself
    pub allow_self_loops: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            max_edges: DEFAULT_MAX_EDGES,
            allow_self_loops: false,
        }
    }
}

impl GraphConfig {
    /// Override the edge ceiling
    pub fn with_max_edges(mut self, max_edges: usize) -> Self {
        self.max_edges = max_edges;
        self
    }

    /// Allow or forbid self-loop edges
    pub fn with_self_loops(mut self, allow: bool) -> Self {
        self.allow_self_loops = allow;
        self
    }
}
