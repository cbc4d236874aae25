//! Module of traversal algorithms.
use crate::errors::InvalidVertex;
use crate::{EdgeId, Graph, VertexId};
use slotmap::SecondaryMap;
use std::collections::VecDeque;

/// Labels used to classify edges during graph traversal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EdgeLabel {
    /// Indicates an edge leading to a vertex that had already been discovered.
    Back,
    /// Indicates an edge through which a vertex is discovered for the first time.
    Front,
}

/// Performs a depth-first search (DFS) traversal of the graph starting from a given vertex,
/// calling `on_edge` for each edge examined along the way, labelled [`EdgeLabel::Front`] when it
/// discovers a new vertex and [`EdgeLabel::Back`] otherwise.
///
/// Outgoing edges are explored in graph order, fully descending into each newly discovered
/// vertex before moving on. The traversal uses an explicit stack, so its depth is not bounded by
/// the call stack.
///
/// ### Errors
///
/// Returns [`InvalidVertex`] if `start` is not part of the graph.
///
/// ### Example
///
/// ```
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::{dfs, EdgeLabel};
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c] = [(); 3].map(|_| builder.add_vertex());
/// let ab = builder.add_edge(a, b, 1).unwrap();
/// let ac = builder.add_edge(a, c, 1).unwrap();
/// let bc = builder.add_edge(b, c, 1).unwrap();
/// let graph = builder.build();
///
/// let mut visited = Vec::new();
/// dfs(&graph, a, |edge, label| visited.push((edge, label))).unwrap();
/// assert_eq!(
///     vec![(ab, EdgeLabel::Front), (bc, EdgeLabel::Front), (ac, EdgeLabel::Back)],
///     visited
/// );
/// ```
pub fn dfs(
    graph: &impl Graph,
    start: VertexId,
    mut on_edge: impl FnMut(EdgeId, EdgeLabel),
) -> Result<(), InvalidVertex> {
    graph.check_vertex(start)?;
    let mut discovered = SecondaryMap::new();
    discovered.insert(start, ());
    let mut stack = vec![(graph.outgoing(start).collect::<Vec<_>>(), 0usize)];
    while let Some((edges, cursor)) = stack.last_mut() {
        let next = edges.get(*cursor).copied();
        *cursor += 1;
        let Some(edge) = next else {
            stack.pop();
            continue;
        };
        let Some(target) = graph.get_edge(edge).map(|e| e.to) else {
            continue;
        };
        if discovered.contains_key(target) {
            on_edge(edge, EdgeLabel::Back);
        } else {
            on_edge(edge, EdgeLabel::Front);
            discovered.insert(target, ());
            stack.push((graph.outgoing(target).collect(), 0));
        }
    }
    Ok(())
}

/// Performs a breadth-first search (BFS) traversal of a directed graph.
///
/// This function starts from the given vertex and traverses the graph layer by layer. For each
/// edge encountered, it calls `on_edge` with the edge's ID and a label
/// ([`EdgeLabel::Front`] if it discovers a new vertex, [`EdgeLabel::Back`] otherwise).
///
/// ### Errors
///
/// Returns [`InvalidVertex`] if `start` is not part of the graph.
///
/// ### Example
///
/// ```
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::{bfs, EdgeLabel};
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c, d] = [(); 4].map(|_| builder.add_vertex());
/// let ab = builder.add_edge(a, b, 1).unwrap();
/// let ac = builder.add_edge(a, c, 1).unwrap();
/// let ca = builder.add_edge(c, a, 1).unwrap();
/// builder.add_edge(d, a, 1).unwrap();
/// let graph = builder.build();
///
/// let mut visited = Vec::new();
/// bfs(&graph, a, |edge, label| visited.push((edge, label))).unwrap();
/// assert_eq!(
///     vec![(ab, EdgeLabel::Front), (ac, EdgeLabel::Front), (ca, EdgeLabel::Back)],
///     visited
/// );
/// ```
pub fn bfs(
    graph: &impl Graph,
    start: VertexId,
    mut on_edge: impl FnMut(EdgeId, EdgeLabel),
) -> Result<(), InvalidVertex> {
    graph.check_vertex(start)?;
    let mut discovered = SecondaryMap::new();
    discovered.insert(start, ());
    let mut queue = VecDeque::from([start]);
    while let Some(vertex) = queue.pop_front() {
        for edge in graph.outgoing(vertex) {
            let Some(target) = graph.get_edge(edge).map(|e| e.to) else {
                continue;
            };
            let label = if discovered.contains_key(target) {
                EdgeLabel::Back
            } else {
                discovered.insert(target, ());
                queue.push_back(target);
                EdgeLabel::Front
            };
            on_edge(edge, label);
        }
    }
    Ok(())
}

/// Returns every vertex reachable from `start` (itself included), in breadth-first order.
///
/// ### Errors
///
/// Returns [`InvalidVertex`] if `start` is not part of the graph.
pub fn reachable(graph: &impl Graph, start: VertexId) -> Result<Vec<VertexId>, InvalidVertex> {
    let mut found = vec![start];
    bfs(graph, start, |edge, label| {
        if label == EdgeLabel::Front {
            found.extend(graph.get_edge(edge).map(|e| e.to));
        }
    })?;
    Ok(found)
}
