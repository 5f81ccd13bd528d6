//! `grafo path` - cheapest route between two nodes

use grafo_core::error::Result;
use grafo_core::graph::{find_path, EdgeId, Graph, PathReport};

use crate::cli::{Cli, GraphArgs};
use crate::cli::parse::build_graph;
use crate::commands::render;

pub fn run(cli: &Cli, graph_args: &GraphArgs, from: &str, to: &str) -> Result<()> {
    let graph = build_graph(&graph_args.edges, graph_args.allow_self_loops)?;
    let edges = find_path(&graph, from, to);
    let report = build_report(&graph, from, to, edges);
    render::print_path(&report, cli.format)
}

/// Attach endpoints and the summed weight to a raw edge sequence
pub fn build_report(graph: &Graph, from: &str, to: &str, edges: Vec<EdgeId>) -> PathReport {
    let total_weight = edges
        .iter()
        .filter_map(|id| graph.edge(*id))
        .map(|e| e.weight)
        .sum();
    PathReport {
        from: from.to_string(),
        to: to.to_string(),
        found: !edges.is_empty(),
        total_weight,
        edges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_sums_weights() {
        let mut g = Graph::new();
        let e0 = g.add_edge("a", "b", 2, false).unwrap();
        let e1 = g.add_edge("b", "c", 3, false).unwrap();
        let report = build_report(&g, "a", "c", vec![e0, e1]);
        assert!(report.found);
        assert_eq!(report.total_weight, 5);
    }

    #[test]
    fn test_report_empty_path_not_found() {
        let g = Graph::new();
        let report = build_report(&g, "a", "c", Vec::new());
        assert!(!report.found);
        assert_eq!(report.total_weight, 0);
    }
}
