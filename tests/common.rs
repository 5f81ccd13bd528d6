use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for grafo
pub fn grafo() -> Command {
    cargo_bin_cmd!("grafo")
}
