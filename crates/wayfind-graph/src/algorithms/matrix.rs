//! Dense all-pairs shortest paths.
use super::relax::Path;
use crate::errors::{Error, NegativeCycleDetected};
use crate::{Graph, VertexId, Weight};
use slotmap::SecondaryMap;

/// Square matrix of path lengths, indexed by vertex position.
///
/// A `None` cell means "no path" (positive infinity).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawMatrix<W>")
)]
pub struct DistanceMatrix<W> {
    size: usize,
    cells: Vec<Option<W>>,
}

/// Unchecked wire form of [`DistanceMatrix`]; `cells` must hold exactly `size * size` entries.
#[cfg(feature = "serialize")]
#[derive(serde::Deserialize)]
struct RawMatrix<W> {
    size: usize,
    cells: Vec<Option<W>>,
}

#[cfg(feature = "serialize")]
impl<W> TryFrom<RawMatrix<W>> for DistanceMatrix<W> {
    type Error = Error;

    fn try_from(RawMatrix { size, cells }: RawMatrix<W>) -> Result<Self, Error> {
        let len = cells.len();
        let expected_len = size.checked_mul(size);
        if expected_len == Some(len) {
            return Ok(Self { size, cells });
        }
        // Report the first row that is short, or the surplus past the last row.
        let row = if size == 0 { 0 } else { (len / size).min(size) };
        Err(Error::MatrixShape {
            row,
            expected: size,
            found: len - row * size,
        })
    }
}

impl<W: Weight> DistanceMatrix<W> {
    /// Create a `size × size` matrix with zeros on the diagonal and no other path.
    pub fn new(size: usize) -> Self {
        let mut cells = vec![None; size * size];
        for i in 0..size {
            cells[i * size + i] = Some(W::zero());
        }
        Self { size, cells }
    }

    /// Create a matrix from its rows, taken as-is.
    ///
    /// The diagonal is expected to hold zeros (or negative self-loop weights), but this is not
    /// enforced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixShape`] if the rows do not form a square.
    pub fn from_rows(rows: Vec<Vec<Option<W>>>) -> Result<Self, Error> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, cells_in_row) in rows.into_iter().enumerate() {
            if cells_in_row.len() != size {
                return Err(Error::MatrixShape {
                    row,
                    expected: size,
                    found: cells_in_row.len(),
                });
            }
            cells.extend(cells_in_row);
        }
        Ok(Self { size, cells })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Path length from `i` to `j`, or `None` if there is none.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<W> {
        assert!(i < self.size && j < self.size, "({i}, {j}) out of bounds for size {}", self.size);
        self.cells[i * self.size + j]
    }

    /// Records a direct edge from `i` to `j`. When the cell already holds a smaller value
    /// (a parallel edge, or the zero diagonal) it is kept. Returns whether the cell changed.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is out of bounds.
    pub fn insert_edge(&mut self, i: usize, j: usize, weight: W) -> bool {
        let cell = self.get(i, j);
        if cell.is_some_and(|current| !(weight < current)) {
            return false;
        }
        self.cells[i * self.size + j] = Some(weight);
        true
    }

    /// Iterates over the rows of the matrix.
    pub fn rows(&self) -> impl '_ + Iterator<Item = &[Option<W>]> {
        self.cells.chunks(self.size.max(1)).take(self.size)
    }

    /// Index of the first vertex whose diagonal entry is negative.
    fn negative_diagonal(&self) -> Option<usize> {
        (0..self.size).find(|&i| self.get(i, i).is_some_and(|d| d.is_negative()))
    }
}

/// Runs the Floyd-Warshall closure over a dense matrix.
///
/// On return, every cell holds the length of the shortest path between its two vertices, given
/// that the input held direct edge weights (see [`DistanceMatrix::new`] and
/// [`DistanceMatrix::insert_edge`]).
///
/// ### Errors
///
/// Returns [`NegativeCycleDetected`] with the index of a vertex whose diagonal ended up
/// negative, i.e. which lies on a closed walk of negative weight. The closure stops as soon as
/// one appears, so cell values never run away and no intermediate sum overflows.
///
/// ### Example
///
/// ```rust
/// use wayfind_graph::algorithms::{floyd_warshall, DistanceMatrix};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![Some(0), Some(3), None, Some(7)],
///     vec![Some(8), Some(0), Some(2), None],
///     vec![Some(5), None, Some(0), Some(1)],
///     vec![Some(2), None, None, Some(0)],
/// ])
/// .unwrap();
///
/// let closed = floyd_warshall(matrix).unwrap();
/// assert_eq!(Some(5), closed.get(0, 2));
/// assert_eq!(Some(5), closed.get(1, 0));
/// assert_eq!(Some(5), closed.get(3, 1));
/// ```
#[profiling::function]
pub fn floyd_warshall<W: Weight>(mut matrix: DistanceMatrix<W>) -> Result<DistanceMatrix<W>, NegativeCycleDetected<usize>> {
    match close(&mut matrix, |_, _, _| {}) {
        Some(vertex) => {
            log::warn!("floyd_warshall: negative-weight cycle through index {vertex}");
            Err(NegativeCycleDetected { vertex })
        }
        None => Ok(matrix),
    }
}

/// All-pairs shortest-path result keyed by [`VertexId`].
#[derive(Debug, Clone)]
pub struct AllPairs<W> {
    order: Vec<VertexId>,
    index: SecondaryMap<VertexId, usize>,
    matrix: DistanceMatrix<W>,
    next_hop: Vec<Option<usize>>,
}

impl<W: Weight> AllPairs<W> {
    /// Vertices in matrix order.
    pub fn vertices(&self) -> &[VertexId] {
        &self.order
    }

    /// Matrix position of a vertex.
    pub fn index_of(&self, vertex: VertexId) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Underlying distance matrix, in [`AllPairs::vertices`] order.
    pub fn matrix(&self) -> &DistanceMatrix<W> {
        &self.matrix
    }

    /// Shortest distance from `from` to `to`, or `None` if there is no path or either vertex
    /// is unknown.
    pub fn distance(&self, from: VertexId, to: VertexId) -> Option<W> {
        let (i, j) = (self.index_of(from)?, self.index_of(to)?);
        self.matrix.get(i, j)
    }

    /// Reconstructs the shortest path from `from` to `to` by following next hops.
    pub fn path(&self, from: VertexId, to: VertexId) -> Option<Path<W>> {
        let cost = self.distance(from, to)?;
        let (mut i, j) = (self.index_of(from)?, self.index_of(to)?);
        let n = self.order.len();
        let mut vertices = vec![from];
        while i != j {
            i = self.next_hop[i * n + j]?;
            vertices.push(self.order[i]);
            if vertices.len() > n {
                return None;
            }
        }
        Some(Path { vertices, cost })
    }
}

/// Computes shortest distances between every pair of vertices of a graph with Floyd-Warshall.
///
/// The graph is first collapsed into a [`DistanceMatrix`]: parallel edges keep their minimum
/// weight and negative self-loops land on the diagonal.
///
/// ### Errors
///
/// Returns [`Error::NegativeCycle`] if the graph contains any negative-weight cycle.
///
/// ### Example
///
/// ```rust
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::all_pairs;
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c] = [(); 3].map(|_| builder.add_vertex());
/// builder.add_edge(a, b, 1.0).unwrap();
/// builder.add_edge(b, c, 1.0).unwrap();
/// builder.add_edge(a, c, 3.0).unwrap();
/// let graph = builder.build();
///
/// let distances = all_pairs(&graph).unwrap();
/// assert_eq!(Some(2.0), distances.distance(a, c));
/// assert_eq!(None, distances.distance(c, a));
/// assert_eq!(vec![a, b, c], distances.path(a, c).unwrap().vertices);
/// ```
#[profiling::function]
pub fn all_pairs<G: Graph>(graph: &G) -> Result<AllPairs<G::Weight>, Error> {
    let order: Vec<VertexId> = graph.vertices().collect();
    let index: SecondaryMap<VertexId, usize> = order.iter().enumerate().map(|(i, &v)| (v, i)).collect();
    let n = order.len();

    let mut matrix = DistanceMatrix::new(n);
    let mut next_hop = vec![None; n * n];
    for i in 0..n {
        next_hop[i * n + i] = Some(i);
    }
    for (_, edge) in graph.weighted_edges() {
        let (Some(&i), Some(&j)) = (index.get(edge.from), index.get(edge.to)) else {
            continue;
        };
        if matrix.insert_edge(i, j, edge.weight) {
            next_hop[i * n + j] = Some(j);
        }
    }

    if let Some(i) = close(&mut matrix, |i, j, k| next_hop[i * n + j] = next_hop[i * n + k]) {
        log::warn!("all_pairs: negative-weight cycle through {:?}", order[i]);
        return Err(NegativeCycleDetected { vertex: order[i] }.into());
    }

    log::debug!("all_pairs: closed {n}x{n} matrix");
    Ok(AllPairs {
        order,
        index,
        matrix,
        next_hop,
    })
}

/// The Floyd-Warshall triple loop. `k` must stay outermost: when intermediate `k` is
/// processed, row `k` and column `k` already account for intermediates `0..k`.
///
/// `on_improve(i, j, k)` is called whenever the `i -> j` cell is shortened through `k`.
///
/// Stops after the first round leaving a negative diagonal entry and returns its index. Cells
/// only hold shortest path lengths while no such entry exists; past that point they shrink
/// exponentially and would overflow integer weights.
fn close<W: Weight>(matrix: &mut DistanceMatrix<W>, mut on_improve: impl FnMut(usize, usize, usize)) -> Option<usize> {
    let n = matrix.size;
    if let Some(vertex) = matrix.negative_diagonal() {
        return Some(vertex);
    }
    for k in 0..n {
        for i in 0..n {
            let Some(ik) = matrix.cells[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(kj) = matrix.cells[k * n + j] else {
                    continue;
                };
                let candidate = ik + kj;
                let cell = &mut matrix.cells[i * n + j];
                if cell.is_none_or(|current| candidate < current) {
                    *cell = Some(candidate);
                    on_improve(i, j, k);
                }
            }
        }
        if let Some(vertex) = matrix.negative_diagonal() {
            log::trace!("closure stopped at intermediate {k} of {n}");
            return Some(vertex);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphBuilder;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_has_zero_diagonal() {
        let matrix = DistanceMatrix::<i32>::new(3);
        assert_eq!(Some(0), matrix.get(1, 1));
        assert_eq!(None, matrix.get(0, 2));
        assert_eq!(3, matrix.rows().count());
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let rows = vec![vec![Some(0), None], vec![Some(1)]];
        assert_eq!(
            Err(Error::MatrixShape {
                row: 1,
                expected: 2,
                found: 1
            }),
            DistanceMatrix::from_rows(rows)
        );
    }

    #[test]
    fn test_insert_edge_keeps_minimum() {
        let mut matrix = DistanceMatrix::new(2);
        assert!(matrix.insert_edge(0, 1, 5));
        assert!(!matrix.insert_edge(0, 1, 7));
        assert!(matrix.insert_edge(0, 1, 2));
        assert!(!matrix.insert_edge(1, 1, 3));
        assert!(matrix.insert_edge(1, 1, -1));
        assert_eq!(Some(2), matrix.get(0, 1));
        assert_eq!(Some(-1), matrix.get(1, 1));
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds() {
        DistanceMatrix::<i32>::new(2).get(2, 0);
    }

    #[test]
    fn test_floyd_warshall_negative_cycle() {
        let mut matrix = DistanceMatrix::new(3);
        matrix.insert_edge(0, 1, 1);
        matrix.insert_edge(1, 2, -1);
        matrix.insert_edge(2, 1, -1);
        let error = floyd_warshall(matrix).unwrap_err();
        assert!(error.vertex == 1 || error.vertex == 2);
    }

    #[test]
    fn test_floyd_warshall_negative_edges_without_cycle() {
        let mut matrix = DistanceMatrix::new(3);
        matrix.insert_edge(0, 1, 4.0);
        matrix.insert_edge(1, 2, -1.5);
        matrix.insert_edge(0, 2, 3.0);
        let closed = floyd_warshall(matrix).unwrap();
        assert_relative_eq!(2.5, closed.get(0, 2).unwrap());
        assert_eq!(None, closed.get(2, 0));
    }

    #[test]
    fn test_floyd_warshall_complete_negative_graph() {
        let n = 40;
        let mut matrix = DistanceMatrix::<i32>::new(n);
        let mut builder = GraphBuilder::new();
        let v = builder.add_vertices(n);
        for i in 0..n {
            for j in (0..n).filter(|&j| j != i) {
                matrix.insert_edge(i, j, -1);
                builder.add_edge(v[i], v[j], -1).unwrap();
            }
        }
        let graph = builder.build();

        let error = floyd_warshall(matrix).unwrap_err();
        assert!(error.vertex < n);
        assert!(matches!(all_pairs(&graph), Err(Error::NegativeCycle(_))));
    }

    #[test]
    fn test_floyd_warshall_negative_input_diagonal() {
        let mut matrix = DistanceMatrix::new(3);
        matrix.insert_edge(2, 2, -1i64);
        assert_eq!(NegativeCycleDetected { vertex: 2 }, floyd_warshall(matrix).unwrap_err());
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_deserialize_checks_shape() {
        let short = serde_json::from_str::<DistanceMatrix<i32>>(r#"{"size":3,"cells":[0]}"#);
        assert!(short.is_err());
        let long = serde_json::from_str::<DistanceMatrix<i32>>(r#"{"size":1,"cells":[0,1]}"#);
        assert!(long.is_err());

        let matrix = DistanceMatrix::<i32>::new(2);
        let json = serde_json::to_string(&matrix).unwrap();
        assert_eq!(matrix, serde_json::from_str(&json).unwrap());
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_raw_matrix_shape_error() {
        let raw = RawMatrix {
            size: 3,
            cells: vec![Some(0); 4],
        };
        assert_eq!(
            Err(Error::MatrixShape {
                row: 1,
                expected: 3,
                found: 1
            }),
            DistanceMatrix::try_from(raw)
        );
    }

    #[test]
    fn test_floyd_warshall_empty() {
        let closed = floyd_warshall(DistanceMatrix::<i32>::new(0)).unwrap();
        assert_eq!(0, closed.size());
        assert_eq!(0, closed.rows().count());
    }

    #[test]
    fn test_all_pairs_negative_self_loop() {
        let mut builder = GraphBuilder::new();
        let [a, b] = [builder.add_vertex(), builder.add_vertex()];
        builder.add_edge(a, b, 1).unwrap();
        builder.add_edge(b, b, -1).unwrap();
        let graph = builder.build();
        assert_eq!(
            Err(Error::NegativeCycle(NegativeCycleDetected { vertex: b })),
            all_pairs(&graph).map(|pairs| pairs.matrix().clone())
        );
    }

    #[test]
    fn test_all_pairs_paths() {
        let mut builder = GraphBuilder::new();
        let v = builder.add_vertices(4);
        builder.add_edge(v[0], v[1], 2).unwrap();
        builder.add_edge(v[1], v[2], 2).unwrap();
        builder.add_edge(v[0], v[2], 5).unwrap();
        builder.add_edge(v[2], v[3], 1).unwrap();
        builder.add_edge(v[0], v[1], 1).unwrap();
        let graph = builder.build();

        let pairs = all_pairs(&graph).unwrap();
        let path = pairs.path(v[0], v[3]).unwrap();
        assert_eq!(vec![v[0], v[1], v[2], v[3]], path.vertices);
        assert_eq!(4, path.cost);
        assert_eq!(Some(0), pairs.distance(v[3], v[3]));
        assert_eq!(vec![v[3]], pairs.path(v[3], v[3]).unwrap().vertices);
        assert_eq!(None, pairs.path(v[3], v[0]));
    }
}
