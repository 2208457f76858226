use crate::graph::traits::Graph;
use num_traits::{Float, Zero};
use std::fmt::Debug;

/// A weighted graph backed by an adjacency matrix.
///
/// Rows hold an edge-exists flag plus a weight; weights are only meaningful
/// where the flag is set. For undirected graphs both triangles of the
/// matrix are kept in sync, so `neighbors` works the same either way.
///
/// The matrix representation keeps edge lookups O(1), which is all the
/// shortest-path algorithms need. It is not meant for very large sparse
/// graphs.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Number of edges in the graph
    edge_count: usize,

    /// Edge-exists flags, row-major
    exists: Vec<Vec<bool>>,

    /// Edge weights, row-major; only meaningful where `exists` is set
    weights: Vec<Vec<W>>,

    /// Whether edges are one-way
    directed: bool,
}

impl<W> AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an undirected graph with the given number of vertices and no edges
    pub fn new(vertices: usize) -> Self {
        Self::with_direction(vertices, false)
    }

    /// Creates a directed graph with the given number of vertices and no edges
    pub fn directed(vertices: usize) -> Self {
        Self::with_direction(vertices, true)
    }

    fn with_direction(vertices: usize, directed: bool) -> Self {
        AdjacencyGraph {
            vertex_count: vertices,
            edge_count: 0,
            exists: vec![vec![false; vertices]; vertices],
            weights: vec![vec![W::zero(); vertices]; vertices],
            directed,
        }
    }

    /// Returns true if this graph is directed
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Adds an edge between two vertices with the given weight.
    ///
    /// Returns false without modifying the graph if either vertex is out of
    /// range or the edge already exists (parallel edges are refused).
    /// Undirected graphs get both orientations.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || self.exists[from][to] {
            return false;
        }

        self.exists[from][to] = true;
        self.weights[from][to] = weight;
        if !self.directed {
            self.exists[to][from] = true;
            self.weights[to][from] = weight;
        }
        self.edge_count += 1;
        true
    }

    /// Removes an edge between two vertices, if present
    pub fn remove_edge(&mut self, from: usize, to: usize) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || !self.exists[from][to] {
            return false;
        }

        self.exists[from][to] = false;
        self.weights[from][to] = W::zero();
        if !self.directed {
            self.exists[to][from] = false;
            self.weights[to][from] = W::zero();
        }
        self.edge_count -= 1;
        true
    }

    /// Removes every edge touching a vertex
    pub fn disconnect(&mut self, vertex: usize) {
        if !self.has_vertex(vertex) {
            return;
        }
        let targets: Vec<usize> = self.neighbors(vertex).collect();
        for t in targets {
            self.remove_edge(vertex, t);
        }
        // for directed graphs the incoming edges need a second pass
        if self.directed {
            for v in 0..self.vertex_count {
                self.remove_edge(v, vertex);
            }
        }
    }
}

impl<W> Graph<W> for AdjacencyGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.has_vertex(from) && self.has_vertex(to) && self.exists[from][to]
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if self.has_edge(from, to) {
            Some(self.weights[from][to])
        } else {
            None
        }
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        if let Some(row) = self.exists.get(vertex) {
            Box::new(
                row.iter()
                    .enumerate()
                    .filter(|(_, present)| **present)
                    .map(|(v, _)| v),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }
}
