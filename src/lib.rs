//! Dijkstra Paths - Single-Source Shortest Paths with Path Reconstruction
//!
//! This library runs Dijkstra's algorithm over any weighted undirected graph
//! exposed through the [`graph::Graph`] trait and reconstructs the shortest
//! path from the source to a target, both as a vertex sequence and as an
//! edge sequence.
//!
//! Edge weights are supplied by a pluggable [`EdgeWeight`] function and must
//! be non-negative. Negative weights are not validated and the results under
//! them are undefined.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod report;

pub use algorithm::{
    dijkstra::{shortest_paths, Dijkstra, EngineState, RunStats},
    tree::ShortestPathTree,
    weight::{EdgeWeight, PayloadWeight},
};
/// Re-export main types for convenient use
pub use graph::{EdgeId, UndirectedGraph, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Invalid edge ID: {0}")]
    InvalidEdge(usize),

    #[error("Engine has not been initialized with a source vertex")]
    NotInitialized,

    #[error("Shortest paths have not been computed since the last initialization")]
    NotComputed,

    #[error("Predecessor chain to vertex {0} does not lead back to the source")]
    BrokenPath(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
