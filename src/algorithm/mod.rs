pub mod dijkstra;
pub mod tree;
pub mod weight;

pub use dijkstra::{shortest_paths, Dijkstra, EngineState, RunStats};
pub use tree::ShortestPathTree;
pub use weight::{EdgeWeight, PayloadWeight};
