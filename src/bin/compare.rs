use fib_dijkstra::algorithm::floyd_warshall::FloydWarshall;
use fib_dijkstra::graph::{generators, Graph};
use fib_dijkstra::{
    AdjacencyGraph, BellmanFord, HeapDijkstra, ScanDijkstra, ShortestPathAlgorithm,
};

/// Runs every shortest-path algorithm on the fixed example graph and
/// prints the path between the same two vertices for each of them.
fn main() {
    env_logger::init();

    let graph = generators::example_unit_weights();
    println!("Vertices {}", graph.vertex_count());
    println!("Edges {}", graph.edge_count());
    println!();

    let start = 0;
    let end = 13;

    report(&HeapDijkstra::new(), &graph, start, end);
    report(&ScanDijkstra::new(), &graph, start, end);
    report(&BellmanFord::new(), &graph, start, end);

    // Floyd-Warshall yields all pairs, so it is reported by hand
    println!(
        "Shortest path from {} to {} using Floyd-Warshall:",
        start, end
    );
    let all_pairs = FloydWarshall::new().all_pairs(&graph);
    match all_pairs.path(start, end) {
        Ok(path) => {
            println!("{:?}", path);
            println!(
                "with a total path length of {}",
                all_pairs.distances[start][end]
            );
        }
        Err(err) => println!("{}", err),
    }
}

fn report<A>(algorithm: &A, graph: &AdjacencyGraph<f64>, start: usize, end: usize)
where
    A: ShortestPathAlgorithm<f64, AdjacencyGraph<f64>>,
{
    println!(
        "Shortest path from {} to {} using {}:",
        start,
        end,
        algorithm.name()
    );
    match algorithm.shortest_paths(graph, start) {
        Ok(result) => match result.path_to(end) {
            Ok(path) => {
                println!("{:?}", path);
                println!("with a total path length of {}", result.distances[end]);
            }
            Err(err) => println!("{}", err),
        },
        Err(err) => println!("{}", err),
    }
    println!();
}
