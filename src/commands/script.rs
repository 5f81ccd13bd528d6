//! `grafo script` - drive one mutable graph with commands from stdin
//!
//! Command language, one command per line (`#` starts a comment):
//!
//! ```text
//! add [>]NODE,NODE[:WEIGHT]
//! remove NODE
//! clear
//! path FROM TO
//! eulerian
//! hamiltonian
//! ```
//!
//! Edits the graph rejects (capacity, bad endpoints) are reported on
//! stderr and the script continues, the way the original host alerted
//! and kept its state. Malformed commands abort with a usage error.

use std::io::BufRead;

use grafo_core::config::GraphConfig;
use grafo_core::error::{GrafoError, Result};
use grafo_core::graph::{eulerian_circuit, find_path, hamiltonian_circuit, Graph};

use crate::cli::parse::parse_edge_spec;
use crate::cli::{Cli, OutputFormat};
use crate::commands::{path, render};

pub fn run(cli: &Cli, allow_self_loops: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let mut graph = Graph::with_config(GraphConfig::default().with_self_loops(allow_self_loops));

    for line in stdin.lock().lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        apply(cli, &mut graph, trimmed)?;
    }

    Ok(())
}

fn apply(cli: &Cli, graph: &mut Graph, command: &str) -> Result<()> {
    let (verb, rest) = match command.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (command, ""),
    };

    match verb {
        "add" => {
            let edge = parse_edge_spec(rest)?;
            match graph.add_edge(&edge.a, &edge.b, edge.weight, edge.directed) {
                Ok(id) => {
                    if !cli.quiet {
                        println!("added {}", id);
                    }
                }
                Err(e) => {
                    if cli.format == OutputFormat::Json {
                        eprintln!("{}", e.to_json());
                    } else {
                        eprintln!("error: {}", e);
                    }
                }
            }
            Ok(())
        }
        "remove" => {
            if rest.is_empty() {
                return Err(GrafoError::UsageError(
                    "remove requires a node label".to_string(),
                ));
            }
            let removed = graph.remove_incident(rest);
            if !cli.quiet {
                println!("removed {} edges touching {}", removed, rest);
            }
            Ok(())
        }
        "clear" => {
            graph.clear();
            if !cli.quiet {
                println!("cleared");
            }
            Ok(())
        }
        "path" => {
            let (from, to) = rest.split_once(char::is_whitespace).ok_or_else(|| {
                GrafoError::UsageError("path requires FROM and TO nodes".to_string())
            })?;
            let (from, to) = (from.trim(), to.trim());
            let edges = find_path(graph, from, to);
            let report = path::build_report(graph, from, to, edges);
            render::print_path(&report, cli.format)
        }
        "eulerian" => render::print_circuit("eulerian", &eulerian_circuit(graph), cli.format),
        "hamiltonian" => {
            render::print_circuit("hamiltonian", &hamiltonian_circuit(graph), cli.format)
        }
        other => Err(GrafoError::UsageError(format!(
            "unknown script command '{}'",
            other
        ))),
    }
}
