#![warn(missing_docs)]
//! # Weighted graph algorithms
//!
//! Shortest-path and minimum-spanning-tree algorithms over an immutable, directed,
//! edge-weighted graph.
//!
//! Graphs are assembled once with a [`GraphBuilder`] and frozen into an [`AdjacencyList`]. The
//! algorithms in [`algorithms`] are free functions taking any [`Graph`] by reference plus their
//! own parameters; each call owns its working state and returns a value or a typed
//! [`Error`](errors::Error). Nothing is cached between calls, so a frozen graph can be shared
//! freely between threads.
//!
//! Vertices are opaque [`VertexId`]s. When the natural vertex names are strings or other
//! hashable keys, [`KeyedGraph`] resolves them to IDs up-front.
use slotmap::new_key_type;

pub mod adjacency;
pub mod algorithms;
pub mod base;
pub mod config;
pub mod errors;
pub mod keyed;
pub mod weight;
mod wrappers;

pub use adjacency::AdjacencyList;
pub use base::GraphBuilder;
pub use config::Config;
pub use keyed::KeyedGraph;
pub use weight::Weight;
pub use wrappers::Reversed;

use errors::InvalidVertex;

new_key_type! {
    /// Type of vertex IDs.
    pub struct VertexId;
    /// Type of edge IDs.
    pub struct EdgeId;
}

/// Directed, weighted edge connecting two vertices together.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W> {
    /// Source vertex
    pub from: VertexId,
    /// Target vertex
    pub to: VertexId,
    /// Edge weight
    pub weight: W,
}

/// Read-only view over a directed, edge-weighted graph.
///
/// Implementors only need to provide [`Graph::get_edge`], [`Graph::vertices`] and
/// [`Graph::edges`]; every other method has a default implementation based on those, which
/// implementors with better indexing (like [`AdjacencyList`]) override.
///
/// # Examples
///
/// ```
/// use wayfind_graph::{Graph, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex();
/// let b = builder.add_vertex();
/// builder.add_edge(a, b, 2).unwrap();
/// let graph = builder.build();
///
/// assert_eq!(2, graph.vertex_count());
/// assert_eq!(1, graph.edge_count());
/// assert_eq!(vec![(b, 2)], graph.neighbors(a).unwrap().collect::<Vec<_>>());
/// assert!(graph.neighbors(b).unwrap().next().is_none());
/// ```
pub trait Graph {
    /// Numeric type of edge weights.
    type Weight: Weight;

    /// Returns the edge data for this id, if it exists.
    ///
    /// # Arguments
    ///
    /// - `id`: Edge ID
    fn get_edge(&self, id: EdgeId) -> Option<Edge<Self::Weight>>;

    /// Returns an iterator over all vertices in the graph.
    fn vertices(&self) -> impl '_ + Iterator<Item = VertexId>;

    /// Returns an iterator over all edges in the graph.
    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId>;

    /// Checks whether the graph contains a specific vertex.
    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices().any(|id| id == vertex)
    }

    /// Checks whether the graph contains an edge with a specific [`EdgeId`].
    fn has_edge(&self, id: EdgeId) -> bool {
        self.get_edge(id).is_some()
    }

    /// Returns the total number of vertices in the graph.
    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    /// Returns the total number of edges in the graph.
    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Returns `Ok(())` if the vertex is part of the graph, or [`InvalidVertex`] otherwise.
    fn check_vertex(&self, vertex: VertexId) -> Result<(), InvalidVertex> {
        if self.has_vertex(vertex) {
            Ok(())
        } else {
            Err(InvalidVertex(vertex))
        }
    }

    /// Returns an iterator over all edges together with their data.
    fn weighted_edges(&self) -> impl '_ + Iterator<Item = (EdgeId, Edge<Self::Weight>)> {
        self.edges().filter_map(|id| self.get_edge(id).map(|edge| (id, edge)))
    }

    /// Returns an iterator over all outgoing edges of a given vertex.
    ///
    /// The iterator is empty for vertices not in the graph; use [`Graph::neighbors`] for a
    /// checked query.
    fn outgoing(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges()
            .filter(move |id| self.get_edge(*id).is_some_and(|e| e.from == vertex))
    }

    /// Returns an iterator over all incoming edges of a given vertex.
    ///
    /// The iterator is empty for vertices not in the graph.
    fn incoming(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges()
            .filter(move |id| self.get_edge(*id).is_some_and(|e| e.to == vertex))
    }

    /// Returns the targets and weights of every outgoing edge of a given vertex.
    ///
    /// Parallel edges are all reported; nothing is deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidVertex`] if the vertex is not part of the graph.
    fn neighbors(
        &self,
        vertex: VertexId,
    ) -> Result<impl '_ + Iterator<Item = (VertexId, Self::Weight)>, InvalidVertex> {
        self.check_vertex(vertex)?;
        Ok(self
            .outgoing(vertex)
            .filter_map(move |id| self.get_edge(id))
            .map(|e| (e.to, e.weight)))
    }
}

impl<G: Graph> Graph for &G {
    type Weight = G::Weight;

    fn get_edge(&self, id: EdgeId) -> Option<Edge<Self::Weight>> {
        (**self).get_edge(id)
    }

    fn vertices(&self) -> impl '_ + Iterator<Item = VertexId> {
        (**self).vertices()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        (**self).edges()
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        (**self).has_vertex(vertex)
    }

    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn outgoing(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        (**self).outgoing(vertex)
    }

    fn incoming(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        (**self).incoming(vertex)
    }
}

/// A trait for constructing a type from an existing [`Graph`] structure.
///
/// # Examples
///
/// ```
/// use wayfind_graph::{AdjacencyList, FromGraph, Graph, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// let a = builder.add_vertex();
/// let b = builder.add_vertex();
/// builder.add_edge(a, b, 1.5).unwrap();
///
/// let adjacency_list = AdjacencyList::from_graph(&builder);
/// assert_eq!(adjacency_list.vertex_count(), builder.vertex_count());
/// assert_eq!(adjacency_list.edge_count(), builder.edge_count());
/// ```
pub trait FromGraph<W>: Sized {
    /// Constructs an instance of a type by reading every vertex and edge of `graph`.
    fn from_graph(graph: &impl Graph<Weight = W>) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn two_vertices() -> (GraphBuilder<i32>, VertexId, VertexId) {
        let mut graph = GraphBuilder::new();
        let a = graph.add_vertex();
        let b = graph.add_vertex();
        (graph, a, b)
    }

    #[test]
    fn test_incoming_edges() {
        let (mut graph, a, b) = two_vertices();
        let edge_id = graph.add_edge(b, a, 1).unwrap();

        let incoming: Vec<EdgeId> = graph.incoming(a).collect();
        assert_eq!(incoming, vec![edge_id]);
        assert!(graph.incoming(b).next().is_none());
    }

    #[test]
    fn test_outgoing_edges() {
        let (mut graph, a, b) = two_vertices();
        let edge_id = graph.add_edge(a, b, 1).unwrap();

        let outgoing: Vec<EdgeId> = graph.outgoing(a).collect();
        assert_eq!(outgoing, vec![edge_id]);
    }

    #[test]
    fn test_neighbors_keeps_parallel_edges() {
        let (mut graph, a, b) = two_vertices();
        graph.add_edge(a, b, 4).unwrap();
        graph.add_edge(a, b, 3).unwrap();

        let neighbors: Vec<_> = graph.neighbors(a).unwrap().collect();
        assert_eq!(neighbors, vec![(b, 4), (b, 3)]);
    }

    #[test]
    fn test_neighbors_invalid_vertex() {
        let (graph, a, _) = two_vertices();
        let mut other = GraphBuilder::<i32>::new();
        other.add_vertices(3);
        let stranger = other.add_vertex();

        assert!(graph.neighbors(a).is_ok());
        assert_eq!(
            Some(InvalidVertex(stranger)),
            graph.neighbors(stranger).err()
        );
    }

    #[test]
    fn test_reference_delegates() {
        let (mut graph, a, b) = two_vertices();
        graph.add_edge(a, b, 1).unwrap();
        let frozen = graph.build();
        let by_ref = &frozen;

        assert_eq!(2, by_ref.vertex_count());
        assert_eq!(
            HashSet::from([a, b]),
            Graph::vertices(&by_ref).collect::<HashSet<_>>()
        );
        assert_eq!(vec![(b, 1)], by_ref.neighbors(a).unwrap().collect::<Vec<_>>());
    }
}
