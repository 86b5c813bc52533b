pub mod traits;
pub mod undirected;
pub mod generators;

pub use traits::{EdgeId, Graph, MutableGraph, VertexId};
pub use undirected::UndirectedGraph;
