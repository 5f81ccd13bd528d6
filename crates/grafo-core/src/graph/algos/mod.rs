//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted shortest path between two nodes
//! - `eulerian`: Eulerian circuit/trail detection with a constructive walk
//! - `hamiltonian`: Hamiltonian circuit detection by backtracking
//! - `pairs`: endpoint-pair to edge-id lookup shared by reconstruction

pub mod dijkstra;
pub mod eulerian;
pub mod hamiltonian;
pub mod pairs;

pub use dijkstra::find_path;
pub use eulerian::eulerian_circuit;
pub use hamiltonian::hamiltonian_circuit;
pub use pairs::EdgePairIndex;
