//! `grafo hamiltonian` - Hamiltonian circuit check

use grafo_core::error::Result;
use grafo_core::graph::hamiltonian_circuit;

use crate::cli::parse::build_graph;
use crate::cli::{Cli, GraphArgs};
use crate::commands::render;

pub fn run(cli: &Cli, graph_args: &GraphArgs) -> Result<()> {
    let graph = build_graph(&graph_args.edges, graph_args.allow_self_loops)?;
    let result = hamiltonian_circuit(&graph);
    render::print_circuit("hamiltonian", &result, cli.format)
}
