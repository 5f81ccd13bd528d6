//! Command dispatch logic for grafo

use grafo_core::error::{GrafoError, Result};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        None => Err(GrafoError::UsageError(
            "no command given (try --help)".to_string(),
        )),

        Some(Commands::Path { graph, from, to }) => commands::path::run(cli, graph, from, to),

        Some(Commands::Eulerian { graph }) => commands::eulerian::run(cli, graph),

        Some(Commands::Hamiltonian { graph }) => commands::hamiltonian::run(cli, graph),

        Some(Commands::Script { allow_self_loops }) => commands::script::run(cli, *allow_self_loops),
    }
}
