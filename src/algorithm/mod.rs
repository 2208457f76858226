pub mod bellman_ford;
pub mod dijkstra;
pub mod dijkstra_heap;
pub mod floyd_warshall;
pub mod traits;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
