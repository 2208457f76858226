use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::graph::Graph;
use crate::{Error, Result};

/// Result of an all-pairs shortest path run
#[derive(Debug, Clone)]
pub struct AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// `distances[u][v]` is the shortest distance from u to v; infinity
    /// where no path exists
    pub distances: Vec<Vec<W>>,

    /// `next[u][v]` is the first hop on a shortest path from u to v
    pub next: Vec<Vec<Option<usize>>>,
}

impl<W> AllPairsResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Shortest distance between two vertices
    pub fn distance(&self, from: usize, to: usize) -> Result<W> {
        if from >= self.distances.len() {
            return Err(Error::InvalidVertex(from));
        }
        if to >= self.distances.len() {
            return Err(Error::InvalidVertex(to));
        }
        Ok(self.distances[from][to])
    }

    /// Reconstructs a shortest path by following first hops forward
    pub fn path(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        if self.distance(from, to)?.is_infinite() {
            return Err(Error::NotReachable(to));
        }

        let mut path = vec![from];
        let mut current = from;
        while current != to {
            match self.next[current][to] {
                Some(hop) => {
                    path.push(hop);
                    current = hop;
                }
                None => return Err(Error::NotReachable(to)),
            }
        }
        Ok(path)
    }
}

/// Floyd-Warshall all-pairs shortest paths.
///
/// O(V³) matrix relaxation over every intermediate vertex. Serves as the
/// all-pairs baseline; a single row of its output matches a
/// single-source run.
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new algorithm instance
    pub fn new() -> Self {
        FloydWarshall
    }

    /// Computes shortest paths between every pair of vertices
    pub fn all_pairs<W, G>(&self, graph: &G) -> AllPairsResult<W>
    where
        W: Float + Zero + Debug + Copy,
        G: Graph<W>,
    {
        let n = graph.vertex_count();
        let mut distances = vec![vec![W::infinity(); n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];

        for u in 0..n {
            distances[u][u] = W::zero();
            next[u][u] = Some(u);
            for v in graph.neighbors(u) {
                if let Some(weight) = graph.edge_weight(u, v) {
                    distances[u][v] = weight;
                    next[u][v] = Some(v);
                }
            }
        }

        // if a shortest path from u to v runs through k, the two halves
        // are themselves shortest paths
        for k in 0..n {
            for u in 0..n {
                if distances[u][k].is_infinite() {
                    continue;
                }
                for v in 0..n {
                    let through_k = distances[u][k] + distances[k][v];
                    if through_k < distances[u][v] {
                        distances[u][v] = through_k;
                        next[u][v] = next[u][k];
                    }
                }
            }
        }

        AllPairsResult { distances, next }
    }
}
