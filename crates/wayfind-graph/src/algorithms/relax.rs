//! Distance labels, the relaxation primitive, and the single-source result type.
//!
//! Every label-correcting algorithm in this crate (Dijkstra, Bellman-Ford, A*, Prim) funnels its
//! numeric comparison through [`Labels::improve`], so they all share the same tie-breaking rule:
//! only a strictly smaller candidate replaces a label, which keeps the earliest-found
//! predecessor on ties.
use crate::{VertexId, Weight};
use slotmap::SecondaryMap;

/// Working state of a single algorithm call: best-known label and predecessor per vertex.
///
/// A vertex without a label is unreached; unreached vertices never take part in a sum.
#[derive(Debug, Clone)]
pub struct Labels<W> {
    distances: SecondaryMap<VertexId, W>,
    predecessors: SecondaryMap<VertexId, VertexId>,
}

impl<W> Default for Labels<W> {
    fn default() -> Self {
        Self {
            distances: SecondaryMap::new(),
            predecessors: SecondaryMap::new(),
        }
    }
}

impl<W: Weight> Labels<W> {
    /// Create empty labels, where every vertex is unreached.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create labels where only `source` is reached, at distance zero.
    pub fn from_source(source: VertexId) -> Self {
        let mut labels = Self::new();
        labels.seed(source, W::zero());
        labels
    }

    /// Sets the label of a vertex without a predecessor.
    pub fn seed(&mut self, vertex: VertexId, value: W) {
        self.distances.insert(vertex, value);
        self.predecessors.remove(vertex);
    }

    /// Current label of a vertex, or `None` if it is unreached.
    pub fn get(&self, vertex: VertexId) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Vertex that produced the current label of `vertex`, if any.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.predecessors.get(vertex).copied()
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no vertex is reached.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Tries to shorten the label of `to` through the edge `from -> to` of the given weight.
    ///
    /// Computes `label(from) + weight` and stores it, with `from` as predecessor, if it is
    /// strictly smaller than the label of `to` (or `to` is unreached). Returns whether an
    /// improvement occurred; when `from` is unreached nothing happens and `false` is returned.
    pub fn relax(&mut self, from: VertexId, to: VertexId, weight: W) -> bool {
        match self.get(from) {
            Some(base) => self.improve(to, from, base + weight),
            None => false,
        }
    }

    /// Stores `candidate` as the label of `vertex`, reached via `via`, if it is strictly
    /// smaller than the current label. Returns whether an improvement occurred.
    pub fn improve(&mut self, vertex: VertexId, via: VertexId, candidate: W) -> bool {
        let better = match self.get(vertex) {
            Some(current) => candidate < current,
            None => true,
        };
        if better {
            self.distances.insert(vertex, candidate);
            self.predecessors.insert(vertex, via);
        }
        better
    }

    /// Walks the predecessor chain ending at `vertex` and returns it in source-to-vertex order.
    ///
    /// Returns `None` for unreached vertices, and also if the chain loops back on itself, which
    /// can only happen when labels were produced in the presence of a negative cycle.
    pub fn trace(&self, vertex: VertexId) -> Option<Vec<VertexId>> {
        self.get(vertex)?;
        let mut chain = vec![vertex];
        let mut current = vertex;
        while let Some(previous) = self.predecessor(current) {
            if chain.len() > self.distances.len() {
                return None;
            }
            chain.push(previous);
            current = previous;
        }
        chain.reverse();
        Some(chain)
    }

    /// Turns the working labels into a result rooted at `source`.
    pub fn into_shortest_paths(self, source: VertexId) -> ShortestPaths<W> {
        ShortestPaths { source, labels: self }
    }
}

/// A path through the graph along with its total weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Path<W> {
    /// Vertices visited, starting at the source and ending at the target.
    pub vertices: Vec<VertexId>,
    /// Sum of the edge weights along the path.
    pub cost: W,
}

impl<W> Path<W> {
    /// Number of edges along the path.
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

/// Single-source shortest-path result: distance and predecessor per reached vertex.
#[derive(Debug, Clone)]
pub struct ShortestPaths<W> {
    source: VertexId,
    labels: Labels<W>,
}

impl<W: Weight> ShortestPaths<W> {
    /// Source vertex the distances are measured from.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Shortest distance from the source, or `None` if `vertex` is unreachable.
    pub fn distance(&self, vertex: VertexId) -> Option<W> {
        self.labels.get(vertex)
    }

    /// Returns true if `vertex` is reachable from the source.
    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.labels.get(vertex).is_some()
    }

    /// Last hop on the shortest path to `vertex`. `None` for the source and unreachable vertices.
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.labels.predecessor(vertex)
    }

    /// Reconstructs the shortest path from the source to `vertex`.
    pub fn path_to(&self, vertex: VertexId) -> Option<Path<W>> {
        let cost = self.distance(vertex)?;
        let vertices = self.labels.trace(vertex)?;
        Some(Path { vertices, cost })
    }

    /// Iterates over every reachable vertex along with its distance.
    pub fn distances(&self) -> impl '_ + Iterator<Item = (VertexId, W)> {
        self.labels.distances.iter().map(|(vertex, &distance)| (vertex, distance))
    }

    /// Number of reachable vertices, the source included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns true if no vertex is reachable. Never the case for a successful run.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<W: PartialEq> PartialEq for ShortestPaths<W> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.labels.distances == other.labels.distances
            && self.labels.predecessors == other.labels.predecessors
    }
}

#[cfg(feature = "serialize")]
impl<W: serde::Serialize> serde::Serialize for ShortestPaths<W> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("ShortestPaths", 3)?;
        state.serialize_field("source", &self.source)?;
        state.serialize_field("distances", &self.labels.distances)?;
        state.serialize_field("predecessors", &self.labels.predecessors)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;

    fn vertices(count: usize) -> Vec<VertexId> {
        GraphBuilder::<i32>::new().add_vertices(count)
    }

    #[test]
    fn test_relax_from_unreached_is_noop() {
        let v = vertices(2);
        let mut labels = Labels::<i32>::new();
        assert!(!labels.relax(v[0], v[1], 1));
        assert_eq!(None, labels.get(v[1]));
    }

    #[test]
    fn test_relax_improves_strictly() {
        let v = vertices(3);
        let mut labels = Labels::from_source(v[0]);
        assert!(labels.relax(v[0], v[2], 5));
        assert_eq!(Some(5), labels.get(v[2]));
        assert_eq!(Some(v[0]), labels.predecessor(v[2]));

        labels.seed(v[1], 2);
        // Equal candidate: the earlier predecessor wins.
        assert!(!labels.relax(v[1], v[2], 3));
        assert_eq!(Some(v[0]), labels.predecessor(v[2]));

        assert!(labels.relax(v[1], v[2], 2));
        assert_eq!(Some(4), labels.get(v[2]));
        assert_eq!(Some(v[1]), labels.predecessor(v[2]));
    }

    #[test]
    fn test_trace_detects_loops() {
        let v = vertices(2);
        let mut labels = Labels::from_source(v[0]);
        labels.relax(v[0], v[1], -1);
        labels.relax(v[1], v[0], -1);
        assert_eq!(None, labels.trace(v[0]));
    }

    #[test]
    fn test_path_to() {
        let v = vertices(4);
        let mut labels = Labels::from_source(v[0]);
        labels.relax(v[0], v[1], 1);
        labels.relax(v[1], v[2], 2);
        let paths = labels.into_shortest_paths(v[0]);

        assert_eq!(
            Some(Path {
                vertices: vec![v[0], v[1], v[2]],
                cost: 3
            }),
            paths.path_to(v[2])
        );
        assert_eq!(Some(0), paths.path_to(v[0]).map(|p| p.hops()));
        assert_eq!(None, paths.path_to(v[3]));
        assert_eq!(3, paths.len());
    }
}
