use std::collections::HashMap;

use approx::assert_relative_eq;
use rstest::{fixture, rstest};
use wayfind_graph::algorithms::{
    all_pairs, astar, bellman_ford, dijkstra, find_negative_cycle, floyd_warshall, prim, DistanceMatrix,
};
use wayfind_graph::errors::{Error, NegativeCycleDetected};
use wayfind_graph::{Graph, KeyedGraph, Reversed};

#[fixture]
fn mixed_weights() -> KeyedGraph<&'static str, i32> {
    KeyedGraph::from_adjacency([
        ("A", vec![("B", 1), ("C", 4)]),
        ("B", vec![("C", 3), ("D", 2), ("E", 2)]),
        ("C", vec![]),
        ("D", vec![("C", 5), ("B", 1)]),
        ("E", vec![("D", -3)]),
    ])
}

#[fixture]
fn roads() -> KeyedGraph<&'static str, i32> {
    KeyedGraph::from_adjacency([
        ("A", vec![("B", 1), ("C", 4)]),
        ("B", vec![("C", 2), ("D", 5)]),
        ("C", vec![("D", 1)]),
        ("D", vec![]),
    ])
}

#[fixture]
fn network() -> KeyedGraph<&'static str, i32> {
    KeyedGraph::from_undirected_edges([
        ("A", "B", 1),
        ("A", "C", 3),
        ("B", "C", 2),
        ("B", "D", 4),
        ("C", "D", 5),
    ])
}

fn expected<const N: usize>(entries: [(&'static str, i32); N]) -> HashMap<&'static str, i32> {
    entries.into_iter().collect()
}

#[rstest]
fn test_bellman_ford_mixed_weights(mixed_weights: KeyedGraph<&'static str, i32>) {
    let source = mixed_weights.vertex(&"A").unwrap();
    let paths = bellman_ford(&mixed_weights, source).unwrap();

    // D is reached through B -> E -> D for 1 + 2 - 3; the D -> B -> E -> D loop weighs zero.
    assert_eq!(
        expected([("A", 0), ("B", 1), ("C", 4), ("D", 0), ("E", 3)]),
        mixed_weights.keyed_distances(&paths)
    );
    let d = mixed_weights.vertex(&"D").unwrap();
    assert_eq!(
        vec!["A", "B", "E", "D"],
        mixed_weights.keyed_vertices(&paths.path_to(d).unwrap().vertices)
    );
}

#[rstest]
fn test_dijkstra_roads(roads: KeyedGraph<&'static str, i32>) {
    let source = roads.vertex(&"A").unwrap();
    let paths = dijkstra(&roads, source).unwrap();
    assert_eq!(
        expected([("A", 0), ("B", 1), ("C", 3), ("D", 4)]),
        roads.keyed_distances(&paths)
    );
}

#[rstest]
#[case("A", 0)]
#[case("B", 1)]
#[case("C", 3)]
#[case("D", 4)]
fn test_bellman_ford_agrees_on_roads(roads: KeyedGraph<&'static str, i32>, #[case] key: &'static str, #[case] distance: i32) {
    let source = roads.vertex(&"A").unwrap();
    let vertex = roads.vertex(&key).unwrap();
    assert_eq!(Some(distance), bellman_ford(&roads, source).unwrap().distance(vertex));
    assert_eq!(Some(distance), dijkstra(&roads, source).unwrap().distance(vertex));
}

#[rstest]
fn test_prim_network(network: KeyedGraph<&'static str, i32>) {
    let start = network.vertex(&"A").unwrap();
    let tree = prim(&network, start).unwrap();

    assert_eq!(3, tree.len());
    assert_eq!(7, tree.total_weight());
    assert!(tree.spans(&network));
    assert_eq!(
        vec![("A", "B", 1), ("B", "C", 2), ("B", "D", 4)],
        network.keyed_tree(&tree)
    );
}

#[rstest]
fn test_all_pairs_matches_dijkstra(roads: KeyedGraph<&'static str, i32>) {
    let distances = all_pairs(&roads).unwrap();
    for source in roads.vertices() {
        let paths = dijkstra(&roads, source).unwrap();
        for target in roads.vertices() {
            assert_eq!(paths.distance(target), distances.distance(source, target));
        }
    }
}

#[rstest]
fn test_astar_roads(roads: KeyedGraph<&'static str, i32>) {
    let (a, d) = (roads.vertex(&"A").unwrap(), roads.vertex(&"D").unwrap());
    let path = astar(&roads, a, d, |_| 0).unwrap().unwrap();
    assert_eq!(4, path.cost);
    assert_eq!(vec!["A", "B", "C", "D"], roads.keyed_vertices(&path.vertices));
    assert_eq!(None, astar(&roads, d, a, |_| 0).unwrap());
}

#[rstest]
fn test_reversed_roads(roads: KeyedGraph<&'static str, i32>) {
    let d = roads.vertex(&"D").unwrap();
    let paths = dijkstra(&Reversed(&roads), d).unwrap();
    assert_eq!(
        expected([("A", 4), ("B", 3), ("C", 1), ("D", 0)]),
        roads.keyed_distances(&paths)
    );
}

#[rstest]
#[case::two_cycle(vec![("a", "b", 1), ("b", "a", -2)])]
#[case::three_cycle(vec![("a", "b", 2), ("b", "c", -1), ("c", "a", -2)])]
#[case::self_loop(vec![("a", "b", 1), ("b", "b", -1)])]
fn test_negative_cycle_is_reported(#[case] edges: Vec<(&'static str, &'static str, i32)>) {
    let graph = KeyedGraph::from_edges(edges);
    let source = graph.vertex(&"a").unwrap();

    assert!(matches!(bellman_ford(&graph, source), Err(Error::NegativeCycle(_))));
    assert!(matches!(all_pairs(&graph), Err(Error::NegativeCycle(_))));
    assert!(find_negative_cycle(&graph).is_some());
}

#[rstest]
fn test_negative_cycle_witness_lies_on_cycle() {
    let graph = KeyedGraph::from_edges([("s", "x", 1), ("x", "y", 1), ("y", "z", -1), ("z", "y", -1)]);
    let source = graph.vertex(&"s").unwrap();
    let Err(Error::NegativeCycle(NegativeCycleDetected { vertex })) = bellman_ford(&graph, source) else {
        panic!("expected a negative cycle");
    };
    assert!(matches!(graph.key(vertex), Some(&"y") | Some(&"z")));
}

#[rstest]
fn test_unreachable_negative_cycle_is_ignored_by_bellman_ford() {
    let graph = KeyedGraph::from_edges([("s", "t", 2), ("x", "y", 1), ("y", "x", -3)]);
    let source = graph.vertex(&"s").unwrap();

    let paths = bellman_ford(&graph, source).unwrap();
    assert_eq!(expected([("s", 0), ("t", 2)]), graph.keyed_distances(&paths));
    assert!(find_negative_cycle(&graph).is_some());
}

#[rstest]
fn test_floyd_warshall_negative_diagonal() {
    let matrix = DistanceMatrix::from_rows(vec![
        vec![Some(0), Some(1), None],
        vec![None, Some(0), Some(-1)],
        vec![Some(-1), None, Some(0)],
    ])
    .unwrap();
    assert!(floyd_warshall(matrix).is_err());
}

#[rstest]
fn test_floyd_warshall_floats() {
    let matrix = DistanceMatrix::from_rows(vec![
        vec![Some(0.0), Some(0.1), None],
        vec![None, Some(0.0), Some(0.2)],
        vec![Some(1.0), None, Some(0.0)],
    ])
    .unwrap();
    let closed = floyd_warshall(matrix).unwrap();
    assert_relative_eq!(0.3, closed.get(0, 2).unwrap());
    assert_relative_eq!(1.1, closed.get(2, 1).unwrap());
}

#[rstest]
fn test_repeated_runs_are_identical(
    mixed_weights: KeyedGraph<&'static str, i32>,
    network: KeyedGraph<&'static str, i32>,
) {
    let source = mixed_weights.vertex(&"A").unwrap();
    assert_eq!(
        bellman_ford(&mixed_weights, source),
        bellman_ford(&mixed_weights, source)
    );

    let start = network.vertex(&"A").unwrap();
    assert_eq!(prim(&network, start), prim(&network, start));
    assert_eq!(dijkstra(&network, start), dijkstra(&network, start));
}

#[rstest]
fn test_concurrent_calls_share_graph(roads: KeyedGraph<&'static str, i32>) {
    let source = roads.vertex(&"A").unwrap();
    let reference = dijkstra(&roads, source).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| dijkstra(&roads, source).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(reference, handle.join().unwrap());
        }
    });
}
