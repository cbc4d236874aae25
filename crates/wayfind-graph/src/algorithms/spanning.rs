//! Module of minimum spanning tree algorithms.
use super::frontier::Frontier;
use super::relax::Labels;
use super::traversal::reachable;
use crate::config::Config;
use crate::errors::Error;
use crate::{Graph, VertexId, Weight};
use num_traits::Zero;
use slotmap::SecondaryMap;

/// Edge of a spanning tree, oriented away from the root.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeEdge<W> {
    /// Vertex already in the tree when this edge was chosen.
    pub parent: VertexId,
    /// Vertex added to the tree by this edge.
    pub child: VertexId,
    /// Edge weight.
    pub weight: W,
}

/// Result of [`prim`]: the tree edges in the order they were added.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanningTree<W> {
    root: VertexId,
    edges: Vec<TreeEdge<W>>,
}

impl<W: Weight> SpanningTree<W> {
    /// Vertex the tree was grown from.
    pub fn root(&self) -> VertexId {
        self.root
    }

    /// Tree edges, in insertion order.
    pub fn edges(&self) -> &[TreeEdge<W>] {
        &self.edges
    }

    /// Number of tree edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the tree is only its root.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all tree edge weights.
    pub fn total_weight(&self) -> W {
        self.edges.iter().fold(W::zero(), |sum, edge| sum + edge.weight)
    }

    /// Iterates over the vertices covered by the tree, root first.
    pub fn vertices(&self) -> impl '_ + Iterator<Item = VertexId> {
        std::iter::once(self.root).chain(self.edges.iter().map(|edge| edge.child))
    }

    /// Returns true if the tree covers every vertex of `graph`.
    pub fn spans(&self, graph: &impl Graph) -> bool {
        self.edges.len() + 1 == graph.vertex_count()
    }
}

/// Grows a minimum spanning tree from `start` using Prim's algorithm.
///
/// The graph is expected to be undirected, i.e. every edge mirrored with an equal weight (see
/// [`GraphBuilder::add_undirected_edge`](crate::GraphBuilder::add_undirected_edge)). Only
/// outgoing edges are followed. On a disconnected graph the result spans the component of
/// `start` only; run it once per component to get a spanning forest.
///
/// ### Errors
///
/// - [`Error::InvalidVertex`] if `start` is not part of the graph.
///
/// ### Example
///
/// ```rust
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::prim;
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c, d] = [(); 4].map(|_| builder.add_vertex());
/// builder.add_undirected_edge(a, b, 1).unwrap();
/// builder.add_undirected_edge(a, c, 3).unwrap();
/// builder.add_undirected_edge(b, c, 2).unwrap();
/// builder.add_undirected_edge(b, d, 4).unwrap();
/// builder.add_undirected_edge(c, d, 5).unwrap();
/// let graph = builder.build();
///
/// let tree = prim(&graph, a).unwrap();
/// assert_eq!(3, tree.len());
/// assert_eq!(7, tree.total_weight());
/// assert!(tree.spans(&graph));
/// ```
pub fn prim<G: Graph>(graph: &G, start: VertexId) -> Result<SpanningTree<G::Weight>, Error> {
    prim_with(graph, start, &Config::default())
}

/// [`prim`] with an explicit [`Config`].
///
/// ### Errors
///
/// - [`Error::InvalidVertex`] if `start` is not part of the graph.
/// - [`Error::Asymmetric`] if [`Config::check_symmetric`] is set and some edge has no mirror of
///   equal weight.
/// - [`Error::Disconnected`] if [`Config::check_connected`] is set and `start` cannot reach
///   every vertex.
#[profiling::function]
pub fn prim_with<G: Graph>(graph: &G, start: VertexId, config: &Config) -> Result<SpanningTree<G::Weight>, Error> {
    graph.check_vertex(start)?;
    if config.check_symmetric {
        check_symmetric(graph)?;
    }
    let total = graph.vertex_count();
    if config.check_connected {
        let reached = reachable(graph, start)?.len();
        if reached != total {
            return Err(Error::Disconnected { reached, total });
        }
    }

    let mut keys = Labels::from_source(start);
    let mut frontier = Frontier::new();
    frontier.push(G::Weight::zero(), start);
    let mut in_tree = SecondaryMap::new();
    let mut edges = Vec::with_capacity(total.saturating_sub(1));

    while let Some((weight, vertex)) = frontier.pop() {
        if in_tree.contains_key(vertex) {
            continue;
        }
        in_tree.insert(vertex, ());
        if let Some(parent) = keys.predecessor(vertex) {
            edges.push(TreeEdge {
                parent,
                child: vertex,
                weight,
            });
        }
        if in_tree.len() == total {
            break;
        }
        for (next, weight) in graph.neighbors(vertex)? {
            if !in_tree.contains_key(next) && keys.improve(next, vertex, weight) {
                frontier.push(weight, next);
            }
        }
    }

    log::debug!("prim: tree covers {} of {total} vertices", in_tree.len());
    Ok(SpanningTree { root: start, edges })
}

fn check_symmetric<G: Graph>(graph: &G) -> Result<(), Error> {
    for (id, edge) in graph.weighted_edges() {
        let mirrored = graph
            .outgoing(edge.to)
            .filter_map(|back| graph.get_edge(back))
            .any(|back| back.to == edge.from && back.weight == edge.weight);
        if !mirrored {
            return Err(Error::Asymmetric { edge: id });
        }
    }
    Ok(())
}
