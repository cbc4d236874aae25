use crate::{Edge, EdgeId, Graph, VertexId};

/// View which reverses the direction of all edges of the inner graph.
///
/// Running a single-source algorithm on a reversed graph yields distances *to* the chosen
/// vertex instead of *from* it.
///
/// ```
/// use wayfind_graph::{GraphBuilder, Reversed};
/// use wayfind_graph::algorithms::dijkstra;
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c] = [builder.add_vertex(), builder.add_vertex(), builder.add_vertex()];
/// builder.add_edge(a, b, 1).unwrap();
/// builder.add_edge(b, c, 2).unwrap();
/// let graph = builder.build();
///
/// let to_c = dijkstra(&Reversed(&graph), c).unwrap();
/// assert_eq!(Some(3), to_c.distance(a));
/// assert_eq!(Some(2), to_c.distance(b));
/// ```
#[derive(Debug, Clone)]
pub struct Reversed<G>(pub G);

impl<G: Graph> Graph for Reversed<G> {
    type Weight = G::Weight;

    fn get_edge(&self, id: EdgeId) -> Option<Edge<Self::Weight>> {
        self.0.get_edge(id).map(|e| Edge {
            from: e.to,
            to: e.from,
            weight: e.weight,
        })
    }

    fn vertices(&self) -> impl '_ + Iterator<Item = VertexId> {
        self.0.vertices()
    }

    fn edges(&self) -> impl '_ + Iterator<Item = EdgeId> {
        self.0.edges()
    }

    fn has_vertex(&self, vertex: VertexId) -> bool {
        self.0.has_vertex(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.0.edge_count()
    }

    fn incoming(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.0.outgoing(vertex)
    }

    fn outgoing(&self, vertex: VertexId) -> impl '_ + Iterator<Item = EdgeId> {
        self.0.incoming(vertex)
    }
}
