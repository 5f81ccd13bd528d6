//! Graph model and algorithms
//!
//! The editable weighted graph plus the three query operations:
//! - Dijkstra shortest path between two nodes
//! - Eulerian circuit/trail detection
//! - Hamiltonian circuit detection

pub mod algos;
pub mod model;
pub mod types;

pub use algos::{eulerian_circuit, find_path, hamiltonian_circuit};
pub use model::{Adjacency, Edge, Graph};
pub use types::{CircuitResult, EdgeId, Neighbor, PathReport};
