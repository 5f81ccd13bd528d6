//! Host-side parsing: edge specs and the --format flag
//!
//! The core never sees spec text; it receives two labels, a weight and
//! a directed flag. Everything textual is resolved here.

use grafo_core::config::GraphConfig;
use grafo_core::error::{GrafoError, Result};
use grafo_core::format::OutputFormat;
use grafo_core::graph::Graph;

/// A parsed `--edge` / `add` argument, not yet applied to a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: i64,
    pub directed: bool,
}

/// Parse `[>]NODE,NODE[:WEIGHT]`.
///
/// A leading `>` marks the edge directed (first node to second). The
/// weight suffix is split at the last `:` and defaults to 1. Labels are
/// trimmed; exactly two non-empty labels are required.
pub fn parse_edge_spec(spec: &str) -> Result<EdgeSpec> {
    let trimmed = spec.trim();
    let (directed, rest) = match trimmed.strip_prefix('>') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let (nodes, weight) = match rest.rsplit_once(':') {
        Some((nodes, raw)) => {
            let weight = raw.trim().parse::<i64>().map_err(|_| {
                GrafoError::InvalidEdgeSpec {
                    spec: spec.to_string(),
                    reason: format!("weight '{}' is not an integer", raw.trim()),
                }
            })?;
            (nodes, weight)
        }
        None => (rest, 1),
    };

    let labels: Vec<&str> = nodes.split(',').map(str::trim).collect();
    if labels.len() != 2 {
        return Err(GrafoError::InvalidEdgeSpec {
            spec: spec.to_string(),
            reason: "expected two nodes separated by a comma".to_string(),
        });
    }
    if labels.iter().any(|l| l.is_empty()) {
        return Err(GrafoError::InvalidEdgeSpec {
            spec: spec.to_string(),
            reason: "node labels must be non-empty".to_string(),
        });
    }

    Ok(EdgeSpec {
        a: labels[0].to_string(),
        b: labels[1].to_string(),
        weight,
        directed,
    })
}

/// Build a graph from a list of `--edge` specs
pub fn build_graph(specs: &[String], allow_self_loops: bool) -> Result<Graph> {
    let config = GraphConfig::default().with_self_loops(allow_self_loops);
    let mut graph = Graph::with_config(config);
    for spec in specs {
        let edge = parse_edge_spec(spec)?;
        graph.add_edge(&edge.a, &edge.b, edge.weight, edge.directed)?;
    }
    Ok(graph)
}

/// clap value parser for the global `--format` flag
pub fn parse_output_format(s: &str) -> Result<OutputFormat> {
    s.parse()
}
