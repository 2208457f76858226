use crate::graph::AdjacencyGraph;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// The 16-vertex example graph with the same weight on every edge
pub fn example_unit_weights() -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::new(16);
    let l = 1.0; // default edge weight for all edges
    for &(u, v) in EXAMPLE_EDGES {
        graph.add_edge(u, v, l);
    }
    graph
}

/// The same 16-vertex example graph with mixed edge weights
pub fn example_mixed_weights() -> AdjacencyGraph<f64> {
    let weights = [
        1.85, 1.36, 1.51, 2.14, 1.59, 0.55, 0.80, 0.91, 1.12, 1.05, 1.12, 0.92, 1.76, 0.78, 1.00,
        0.50, 0.45, 1.87, 1.27, 1.64, 1.12,
    ];
    let mut graph = AdjacencyGraph::new(16);
    for (&(u, v), &w) in EXAMPLE_EDGES.iter().zip(weights.iter()) {
        graph.add_edge(u, v, w);
    }
    graph
}

const EXAMPLE_EDGES: &[(usize, usize)] = &[
    (0, 1),
    (0, 4),
    (1, 2),
    (2, 3),
    (2, 7),
    (3, 4),
    (3, 5),
    (4, 8),
    (5, 6),
    (5, 9),
    (5, 10),
    (6, 7),
    (6, 14),
    (8, 9),
    (10, 11),
    (10, 12),
    (11, 12),
    (11, 13),
    (12, 14),
    (13, 14),
    (14, 15),
];

/// Generates a random undirected graph with `vertices` vertices.
///
/// Each vertex gets at least `per_vertex` edges to random other vertices;
/// all edges have unit weight. Pass a seeded `StdRng` for reproducible
/// graphs.
pub fn random_graph(vertices: usize, per_vertex: usize, rng: &mut impl Rng) -> AdjacencyGraph<f64> {
    let mut graph = AdjacencyGraph::new(vertices);
    for i in 0..vertices {
        let mut k = 0;
        while k < per_vertex {
            let r = rng.gen_range(0..vertices);
            // only count edges that were actually added, so every vertex
            // ends up with at least `per_vertex` distinct neighbors
            if r != i && graph.add_edge(i, r, 1.0) {
                k += 1;
            }
        }
    }
    graph
}

/// Generates a random undirected graph with weights drawn from `0.5..2.0`
pub fn random_weighted_graph(
    vertices: usize,
    per_vertex: usize,
    rng: &mut impl Rng,
) -> AdjacencyGraph<OrderedFloat<f64>> {
    let mut graph = AdjacencyGraph::new(vertices);
    for i in 0..vertices {
        let mut k = 0;
        while k < per_vertex {
            let r = rng.gen_range(0..vertices);
            if r != i {
                let weight = OrderedFloat(rng.gen_range(0.5..2.0));
                if graph.add_edge(i, r, weight) {
                    k += 1;
                }
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn example_graphs_share_structure() {
        let a = example_unit_weights();
        let b = example_mixed_weights();
        assert_eq!(a.vertex_count(), 16);
        assert_eq!(a.edge_count(), 21);
        assert_eq!(b.edge_count(), 21);
        for u in 0..16 {
            for v in 0..16 {
                assert_eq!(a.has_edge(u, v), b.has_edge(u, v));
            }
        }
    }

    #[test]
    fn random_graph_respects_minimum_degree() {
        let mut rng = StdRng::seed_from_u64(7);
        let g = random_graph(50, 2, &mut rng);
        assert_eq!(g.vertex_count(), 50);
        for v in 0..50 {
            assert!(g.degree(v) >= 2, "vertex {} has degree {}", v, g.degree(v));
        }
    }
}
