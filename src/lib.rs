//! Single-source shortest paths over weighted graphs.
//!
//! The interesting part of this crate is the Fibonacci-heap priority queue
//! in [`data_structures::fibonacci_heap`] and the Dijkstra variant driving
//! it in [`algorithm::dijkstra_heap`]. The remaining algorithms
//! (array-scan Dijkstra, Bellman-Ford, Floyd-Warshall) are simpler
//! baselines kept for comparison and testing.
//!
//! All algorithms assume non-negative edge weights unless noted otherwise
//! (Bellman-Ford tolerates negative weights, but not negative cycles).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::ScanDijkstra, dijkstra_heap::HeapDijkstra,
    floyd_warshall::FloydWarshall, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::FibonacciHeap;
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Heap is empty")]
    EmptyHeap,

    #[error("New key does not strictly decrease the current key")]
    KeyMustDecrease,

    #[error("Vertex {0} is not reachable from the source")]
    NotReachable(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
