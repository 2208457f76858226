use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra with a linear scan for the next vertex.
///
/// O(V²) baseline used for comparison and for cross-checking the
/// heap-based variant in tests. Same contract as [`HeapDijkstra`]:
/// non-negative weights only.
///
/// [`HeapDijkstra`]: crate::algorithm::dijkstra_heap::HeapDijkstra
#[derive(Debug, Default)]
pub struct ScanDijkstra;

impl ScanDijkstra {
    /// Creates a new algorithm instance
    pub fn new() -> Self {
        ScanDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for ScanDijkstra
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra (array scan)"
    }

    fn shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = W::zero();
        predecessors[source] = Some(source);

        let mut unvisited: Vec<usize> = (0..n).collect();
        while !unvisited.is_empty() {
            // linear scan for the unvisited vertex with the smallest
            // tentative distance
            let mut best = 0;
            for (i, &v) in unvisited.iter().enumerate() {
                if distances[v] < distances[unvisited[best]] {
                    best = i;
                }
            }
            let u = unvisited.swap_remove(best);
            if distances[u].is_infinite() {
                // the remaining vertices are unreachable
                continue;
            }

            for v in graph.neighbors(u) {
                let Some(weight) = graph.edge_weight(u, v) else {
                    continue;
                };
                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                }
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
