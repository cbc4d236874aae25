//! A module providing the immutable adjacency list representation handed to algorithms.
//!
//! This module defines the [`AdjacencyList`] struct, which indexes the outgoing and incoming
//! edges of every vertex so that neighbor queries do not scan the whole edge set.
use crate::{Edge, EdgeId, FromGraph, Graph, VertexId, Weight};
use slotmap::SecondaryMap;

/// A frozen graph represented as an adjacency list.
///
/// There is no mutation API: build one with [`GraphBuilder::build`](crate::GraphBuilder::build)
/// or [`FromGraph::from_graph`], then share it by reference.
#[derive(Debug, Clone)]
pub struct AdjacencyList<W> {
    vertices: SecondaryMap<VertexId, ()>,
    edges: SecondaryMap<EdgeId, Edge<W>>,
    /// For any [`VertexId`], the [`EdgeId`]s of all edges terminating at it.
    incoming: SecondaryMap<VertexId, Vec<EdgeId>>,
    /// For any [`VertexId`], the [`EdgeId`]s of all edges originating from it.
    outgoing: SecondaryMap<VertexId, Vec<EdgeId>>,
}

impl<W> Default for AdjacencyList<W> {
    fn default() -> Self {
        Self {
            vertices: SecondaryMap::new(),
            edges: SecondaryMap::new(),
            incoming: SecondaryMap::new(),
            outgoing: SecondaryMap::new(),
        }
    }
}

impl<W: Weight> AdjacencyList<W> {
    /// Returns the out-degree of a vertex, or `None` if it is not part of the graph.
    pub fn out_degree(&self, vertex: VertexId) -> Option<usize> {
        self.outgoing.get(vertex).map(Vec::len)
    }

    /// Returns the in-degree of a vertex, or `None` if it is not part of the graph.
    pub fn in_degree(&self, vertex: VertexId) -> Option<usize> {
        self.incoming.get(vertex).map(Vec::len)
    }
}

impl<W: Weight> Graph for AdjacencyList<W> {
    type Weight = W;

    fn get_edge(&self, id: EdgeId) -> Option<Edge<W>> {
        self.edges.get(id).copied()
    }

    fn vertices(&self) -> impl '_ + Iterator<Item = VertexId> {
        self.vertices.keys()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.edges.keys()
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.edges.contains_key(id)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.outgoing.get(vertex).into_iter().flatten().copied()
    }

    fn incoming(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.incoming.get(vertex).into_iter().flatten().copied()
    }
}

impl<W: Weight> FromGraph<W> for AdjacencyList<W> {
    fn from_graph(graph: &impl Graph<Weight = W>) -> Self {
        let mut list = Self::default();
        for vertex in graph.vertices() {
            list.vertices.insert(vertex, ());
            list.incoming.insert(vertex, Vec::new());
            list.outgoing.insert(vertex, Vec::new());
        }
        for (id, edge) in graph.weighted_edges() {
            list.edges.insert(id, edge);
            if let Some(out) = list.outgoing.get_mut(edge.from) {
                out.push(id);
            }
            if let Some(inc) = list.incoming.get_mut(edge.to) {
                inc.push(id);
            }
        }
        list
    }
}
