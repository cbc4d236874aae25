//! Module of algorithms working on weighted graphs.
//!
//! Every algorithm is a pure function of its graph and parameters: it borrows the graph, owns
//! its working state for the duration of the call, and returns either a result value or a typed
//! [`Error`](crate::errors::Error). Running the same call twice yields the same output.
//!
//! | Operation                   | Weights          | Result                           |
//! |-----------------------------|------------------|----------------------------------|
//! | [`dijkstra`]                | non-negative     | [`ShortestPaths`]                |
//! | [`bellman_ford`]            | any              | [`ShortestPaths`] or cycle error |
//! | [`astar`]                   | non-negative     | optional [`Path`]                |
//! | [`floyd_warshall`]          | any              | [`DistanceMatrix`] or cycle error|
//! | [`all_pairs`]               | any              | [`AllPairs`] or cycle error      |
//! | [`prim`]                    | any, undirected  | [`SpanningTree`]                 |
//! | [`find_negative_cycle`]     | any              | optional cycle                   |
pub mod frontier;
pub mod matrix;
pub mod path;
pub mod relax;
pub mod spanning;
pub mod traversal;

pub use matrix::*;
pub use path::*;
pub use relax::{Labels, Path, ShortestPaths};
pub use spanning::*;
pub use traversal::*;
