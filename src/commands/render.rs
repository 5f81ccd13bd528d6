//! Result rendering: human text or stable JSON
//!
//! Human output mirrors what the original host drew as a highlighted
//! edge sequence: the edge ids in traversal order.

use grafo_core::error::Result;
use grafo_core::format::OutputFormat;
use grafo_core::graph::{CircuitResult, PathReport};

fn edge_list(ids: &[grafo_core::graph::EdgeId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn print_path(report: &PathReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
        OutputFormat::Human => {
            if report.found {
                println!(
                    "path {} -> {}: {} (weight {})",
                    report.from,
                    report.to,
                    edge_list(&report.edges),
                    report.total_weight
                );
            } else {
                println!("no path from {} to {}", report.from, report.to);
            }
        }
    }
    Ok(())
}

pub fn print_circuit(kind: &str, result: &CircuitResult, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let envelope = serde_json::json!({
                "kind": kind,
                "found": result.found,
                "edges": result.edges,
            });
            println!("{}", envelope);
        }
        OutputFormat::Human => {
            if result.found {
                println!("{} circuit: {}", kind, edge_list(&result.edges));
            } else {
                println!("no {} circuit", kind);
            }
        }
    }
    Ok(())
}
