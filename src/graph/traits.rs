use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing a weighted graph.
///
/// Shortest-path runs treat the graph as read-only; mutation between runs
/// is fine, mutation during a run is not supported.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns an iterator over the neighbors reachable from a vertex
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns the out-degree of a vertex
    fn degree(&self, vertex: usize) -> usize {
        self.neighbors(vertex).count()
    }
}
