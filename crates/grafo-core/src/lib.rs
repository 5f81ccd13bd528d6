//! Grafo Core Library
//!
//! Core domain logic for the grafo graph-analysis toolkit: an editable
//! weighted graph (directed or undirected per edge) plus shortest-path,
//! Eulerian-circuit and Hamiltonian-circuit queries.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
