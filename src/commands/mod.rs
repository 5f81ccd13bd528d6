//! Command handlers for the grafo CLI

pub mod dispatch;
pub mod eulerian;
pub mod hamiltonian;
pub mod path;
pub mod render;
pub mod script;
