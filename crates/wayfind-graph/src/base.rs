use crate::errors::InvalidVertex;
use crate::{AdjacencyList, Edge, EdgeId, FromGraph, Graph, VertexId, Weight};
use slotmap::SlotMap;

/// Owning graph used to assemble vertices and edges before freezing them with
/// [`GraphBuilder::build`].
///
/// The builder implements [`Graph`] with the linear-scan default methods, so it can be queried
/// directly, but algorithms should be run on the frozen [`AdjacencyList`].
#[derive(Debug, Clone)]
pub struct GraphBuilder<W> {
    vertices: SlotMap<VertexId, ()>,
    edges: SlotMap<EdgeId, Edge<W>>,
}

impl<W> Default for GraphBuilder<W> {
    fn default() -> Self {
        Self {
            vertices: SlotMap::default(),
            edges: SlotMap::default(),
        }
    }
}

impl<W: Weight> GraphBuilder<W> {
    /// Create a new, empty [`GraphBuilder`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new vertex into the graph.
    pub fn add_vertex(&mut self) -> VertexId {
        self.vertices.insert(())
    }

    /// Adds `count` new vertices, returning their IDs in insertion order.
    pub fn add_vertices(&mut self, count: usize) -> Vec<VertexId> {
        (0..count).map(|_| self.add_vertex()).collect()
    }

    /// Adds a directed edge to the graph.
    ///
    /// Parallel edges and self-loops are accepted and kept as separate edges.
    ///
    /// # Arguments
    ///
    /// - `from`: Source [`VertexId`].
    /// - `to`  : Target [`VertexId`].
    /// - `weight`: Edge weight.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidVertex`] with the first endpoint that is not part of this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> Result<EdgeId, InvalidVertex> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        Ok(self.push_edge(from, to, weight))
    }

    /// Inserts an edge between two vertices obtained from [`GraphBuilder::add_vertex`] on this
    /// builder.
    pub(crate) fn push_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> EdgeId {
        self.edges.insert(Edge { from, to, weight })
    }

    /// Adds an undirected edge, modeled as two directed edges of equal weight.
    ///
    /// Returns the IDs of the `from -> to` and `to -> from` edges, in that order.
    pub fn add_undirected_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: W,
    ) -> Result<(EdgeId, EdgeId), InvalidVertex> {
        let forward = self.add_edge(from, to, weight)?;
        let backward = self.add_edge(to, from, weight)?;
        Ok((forward, backward))
    }

    /// Freezes the graph into an immutable [`AdjacencyList`].
    pub fn build(self) -> AdjacencyList<W> {
        AdjacencyList::from_graph(&self)
    }
}

impl<W: Weight> Graph for GraphBuilder<W> {
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
}
