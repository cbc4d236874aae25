//! Binding layer between user-facing vertex keys and [`VertexId`]s.
//!
//! Algorithms only ever see IDs; [`KeyedGraph`] resolves keys once, at construction, and maps
//! results back to keys afterwards.
use crate::algorithms::{ShortestPaths, SpanningTree};
use crate::{AdjacencyList, Edge, EdgeId, Graph, GraphBuilder, VertexId, Weight};
use slotmap::SecondaryMap;
use std::collections::HashMap;
use std::hash::Hash;

/// Immutable graph whose vertices are named by hashable keys.
///
/// # Examples
///
/// ```
/// use wayfind_graph::KeyedGraph;
/// use wayfind_graph::algorithms::dijkstra;
///
/// let graph = KeyedGraph::from_adjacency([
///     ("A", vec![("B", 1), ("C", 4)]),
///     ("B", vec![("C", 2), ("D", 5)]),
///     ("C", vec![("D", 1)]),
/// ]);
///
/// let source = graph.vertex(&"A").unwrap();
/// let paths = dijkstra(&graph, source).unwrap();
/// let distances = graph.keyed_distances(&paths);
/// assert_eq!(Some(&4), distances.get("D"));
/// ```
#[derive(Debug, Clone)]
pub struct KeyedGraph<K, W> {
    graph: AdjacencyList<W>,
    keys: SecondaryMap<VertexId, K>,
    lookup: HashMap<K, VertexId>,
}

impl<K: Clone + Eq + Hash, W: Weight> KeyedGraph<K, W> {
    /// Builds a graph from an adjacency table: every vertex key with its outgoing
    /// `(neighbor, weight)` pairs.
    ///
    /// Keys which only ever appear as neighbors still become vertices. Vertices are created in
    /// order of first appearance.
    pub fn from_adjacency<N>(table: impl IntoIterator<Item = (K, N)>) -> Self
    where
        N: IntoIterator<Item = (K, W)>,
    {
        let mut binder = Binder::default();
        for (key, neighbors) in table {
            let from = binder.vertex(key);
            for (neighbor, weight) in neighbors {
                let to = binder.vertex(neighbor);
                binder.edge(from, to, weight);
            }
        }
        binder.finish()
    }

    /// Builds a graph from directed `(from, to, weight)` edges.
    pub fn from_edges(edges: impl IntoIterator<Item = (K, K, W)>) -> Self {
        let mut binder = Binder::default();
        for (from, to, weight) in edges {
            let (from, to) = (binder.vertex(from), binder.vertex(to));
            binder.edge(from, to, weight);
        }
        binder.finish()
    }

    /// Builds a graph from undirected `(a, b, weight)` edges, each stored in both directions.
    pub fn from_undirected_edges(edges: impl IntoIterator<Item = (K, K, W)>) -> Self {
        let mut binder = Binder::default();
        for (a, b, weight) in edges {
            let (a, b) = (binder.vertex(a), binder.vertex(b));
            binder.edge(a, b, weight);
            binder.edge(b, a, weight);
        }
        binder.finish()
    }

    /// Resolves a key to its vertex.
    pub fn vertex(&self, key: &K) -> Option<VertexId> {
        self.lookup.get(key).copied()
    }

    /// Returns the key of a vertex.
    pub fn key(&self, vertex: VertexId) -> Option<&K> {
        self.keys.get(vertex)
    }

    /// Underlying ID-based graph.
    pub fn graph(&self) -> &AdjacencyList<W> {
        &self.graph
    }

    /// Maps every reachable vertex of a shortest-path result to its key.
    pub fn keyed_distances(&self, paths: &ShortestPaths<W>) -> HashMap<K, W> {
        paths
            .distances()
            .filter_map(|(vertex, distance)| Some((self.key(vertex)?.clone(), distance)))
            .collect()
    }

    /// Maps the edges of a spanning tree to `(parent, child, weight)` key triples, in tree order.
    pub fn keyed_tree(&self, tree: &SpanningTree<W>) -> Vec<(K, K, W)> {
        tree.edges()
            .iter()
            .filter_map(|edge| Some((self.key(edge.parent)?.clone(), self.key(edge.child)?.clone(), edge.weight)))
            .collect()
    }

    /// Maps a sequence of vertices (a path or a cycle) to keys.
    pub fn keyed_vertices<'a>(&'a self, vertices: impl IntoIterator<Item = &'a VertexId>) -> Vec<K> {
        vertices
            .into_iter()
            .filter_map(|&vertex| self.key(vertex).cloned())
            .collect()
    }
}

impl<K, W: Weight> Graph for KeyedGraph<K, W> {
    type Weight = W;

    fn get_edge(&self, id: EdgeId) -> Option<Edge<W>> {
        self.graph.get_edge(id)
    }

    fn vertices(&self) -> impl '_ + Iterator<Item = VertexId> {
        self.graph.vertices()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.graph.edges()
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.graph.has_vertex(vertex)
    }

    fn has_edge(&self, id: EdgeId) -> bool {
        self.graph.has_edge(id)
    }

    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn outgoing(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.graph.outgoing(vertex)
    }

    fn incoming(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.graph.incoming(vertex)
    }
}

struct Binder<K, W> {
    builder: GraphBuilder<W>,
    keys: SecondaryMap<VertexId, K>,
    lookup: HashMap<K, VertexId>,
}

impl<K, W> Default for Binder<K, W> {
    fn default() -> Self {
        Self {
            builder: GraphBuilder::default(),
            keys: SecondaryMap::new(),
            lookup: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash, W: Weight> Binder<K, W> {
    fn vertex(&mut self, key: K) -> VertexId {
        if let Some(&id) = self.lookup.get(&key) {
            return id;
        }
        let id = self.builder.add_vertex();
        self.keys.insert(id, key.clone());
        self.lookup.insert(key, id);
        id
    }

    /// Both endpoints must come from [`Binder::vertex`].
    fn edge(&mut self, from: VertexId, to: VertexId, weight: W) {
        self.builder.push_edge(from, to, weight);
    }

    fn finish(self) -> KeyedGraph<K, W> {
        log::trace!(
            "keyed graph: {} vertices, {} edges",
            self.builder.vertex_count(),
            self.builder.edge_count()
        );
        KeyedGraph {
            graph: self.builder.build(),
            keys: self.keys,
            lookup: self.lookup,
        }
    }
}
