use log::warn;
use num_traits::{Float, Zero};
use std::fmt::Debug;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::Graph;
use crate::{Error, Result};

/// Bellman-Ford: repeated relaxation over an explicit edge list.
///
/// O(V·E) baseline. Unlike the Dijkstra variants it tolerates negative
/// edge weights, as long as no cycle has negative total weight. A
/// negative cycle is detected by one extra relaxation round and reported
/// via `warn!`; the (then meaningless) distances are still returned, as
/// in the classic formulation.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new algorithm instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        let n = graph.vertex_count();

        // explicit edge list; undirected graphs yield both orientations
        let mut edges: Vec<(usize, usize, W)> = Vec::new();
        for u in 0..n {
            for v in graph.neighbors(u) {
                if let Some(weight) = graph.edge_weight(u, v) {
                    edges.push((u, v, weight));
                }
            }
        }

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = W::zero();
        predecessors[source] = Some(source);

        // V-1 rounds suffice; stop early once a round changes nothing
        for _ in 1..n {
            let mut changed = false;
            for &(u, v, weight) in &edges {
                if distances[u].is_infinite() {
                    continue;
                }
                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // an n-th round that still improves something means a negative cycle
        for &(u, v, weight) in &edges {
            if !distances[u].is_infinite() && distances[u] + weight < distances[v] {
                warn!("graph contains a negative-weight cycle; distances are not meaningful");
                break;
            }
        }

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source,
        })
    }
}
