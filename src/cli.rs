//! CLI argument parsing for grafo
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json. The graph itself is supplied as repeated
//! `--edge` specs or, for `script`, as commands on stdin.

pub mod parse;

use clap::{Args, Parser, Subcommand};

pub use grafo_core::format::OutputFormat;

use parse::parse_output_format;

/// Grafo - graph analysis CLI (shortest paths, Eulerian and Hamiltonian circuits)
#[derive(Parser, Debug)]
#[command(name = "grafo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON to stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// The edge list shared by all query subcommands
#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Edge spec `[>]NODE,NODE[:WEIGHT]`; leading `>` makes the edge
    /// directed, weight defaults to 1. Repeatable.
    #[arg(long = "edge", value_name = "SPEC", action = clap::ArgAction::Append)]
    pub edges: Vec<String>,

    /// Allow self-loop edges (off by default)
    #[arg(long)]
    pub allow_self_loops: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest path between two nodes
    Path {
        #[command(flatten)]
        graph: GraphArgs,

        /// Start node
        #[arg(long)]
        from: String,

        /// Destination node
        #[arg(long)]
        to: String,
    },

    /// Check for an Eulerian circuit or trail
    Eulerian {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Check for a Hamiltonian circuit
    Hamiltonian {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Run edit/query commands from stdin (add, remove, clear, path,
    /// eulerian, hamiltonian)
    Script {
        /// Allow self-loop edges (off by default)
        #[arg(long)]
        allow_self_loops: bool,
    },
}
