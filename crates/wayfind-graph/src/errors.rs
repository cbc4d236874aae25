//! Error types returned by graph queries and algorithms.
use crate::{EdgeId, VertexId};
use std::fmt;
use thiserror::Error;

/// Error type used when a query references a vertex that is not part of the graph.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("Vertex {0:?} is not part of the graph")]
pub struct InvalidVertex(pub VertexId);

/// Error type used when an algorithm finds a cycle whose total weight is negative.
///
/// Shortest distances are undefined along such a cycle, so no distances are returned. The
/// witness is a vertex lying on the offending cycle (or, for the dense all-pairs closure, on a
/// closed walk of negative weight).
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("Negative-weight cycle detected through vertex {vertex:?}")]
pub struct NegativeCycleDetected<V: fmt::Debug = VertexId> {
    /// Witness vertex.
    pub vertex: V,
}

/// Umbrella error for the algorithm entry points.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum Error {
    /// A referenced vertex is absent from the graph.
    #[error(transparent)]
    InvalidVertex(#[from] InvalidVertex),
    /// A negative-weight cycle makes shortest distances undefined.
    #[error(transparent)]
    NegativeCycle(#[from] NegativeCycleDetected),
    /// Only returned when [`Config::check_non_negative`](crate::config::Config) is set.
    #[error("Edge {edge:?} has a negative weight")]
    NegativeWeight {
        /// First offending edge.
        edge: EdgeId,
    },
    /// Only returned when [`Config::check_symmetric`](crate::config::Config) is set.
    #[error("Edge {edge:?} has no mirrored edge of equal weight")]
    Asymmetric {
        /// First edge without a mirror.
        edge: EdgeId,
    },
    /// Only returned when [`Config::check_connected`](crate::config::Config) is set.
    #[error("Only {reached} out of {total} vertices are reachable from the start vertex")]
    Disconnected {
        /// Number of vertices in the start vertex's component.
        reached: usize,
        /// Number of vertices in the graph.
        total: usize,
    },
    /// A dense matrix was built from rows that do not form a square.
    #[error("Row {row} has {found} cells, expected {expected}")]
    MatrixShape {
        /// Index of the first malformed row.
        row: usize,
        /// Number of rows, which every row length must match.
        expected: usize,
        /// Length of the malformed row.
        found: usize,
    },
}
