use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Result of a single-source shortest path run
#[derive(Debug, Clone)]
pub struct ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Distance from the source to each vertex; infinity where unreached
    pub distances: Vec<W>,

    /// Predecessor in the shortest-path tree. The source precedes itself;
    /// unreached vertices have no predecessor.
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns true if the vertex was reached from the source
    pub fn is_reachable(&self, vertex: usize) -> bool {
        vertex < self.distances.len() && self.distances[vertex].is_finite()
    }

    /// Reconstructs the path from the source to `target` by walking the
    /// predecessor chain backwards.
    ///
    /// Fails with [`Error::NotReachable`] when the target has no finite
    /// distance; disconnected targets are an expected outcome, so callers
    /// should check [`is_reachable`](Self::is_reachable) first or handle
    /// the error.
    pub fn path_to(&self, target: usize) -> Result<Vec<usize>> {
        if target >= self.predecessors.len() {
            return Err(Error::InvalidVertex(target));
        }
        if self.distances[target].is_infinite() {
            return Err(Error::NotReachable(target));
        }

        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessors[current] {
                Some(pred) => {
                    path.push(pred);
                    current = pred;
                }
                None => return Err(Error::NotReachable(target)),
            }
            // a predecessor chain longer than the vertex count means a
            // cycle (possible after a negative-cycle Bellman-Ford run)
            if path.len() > self.predecessors.len() {
                return Err(Error::NotReachable(target));
            }
        }
        path.reverse();
        Ok(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
