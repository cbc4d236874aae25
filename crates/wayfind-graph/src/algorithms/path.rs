//! Module of single-source and single-pair shortest path algorithms.
use super::frontier::Frontier;
use super::relax::{Labels, Path, ShortestPaths};
use crate::config::Config;
use crate::errors::{Error, NegativeCycleDetected};
use crate::{Graph, VertexId, Weight};
use num_traits::Zero;
use slotmap::SecondaryMap;

/// Finds the shortest distance from `source` to every reachable vertex using Dijkstra's
/// algorithm.
///
/// All edge weights are expected to be non-negative. This is not checked by default; with
/// negative weights the returned distances are simply wrong. Each vertex is expanded at most
/// once and a settled label is final, so the call terminates even on negative-weight cycles. Use [`dijkstra_with`] and
/// [`Config::check_non_negative`] to reject such graphs instead.
///
/// ### Errors
///
/// - [`Error::InvalidVertex`] if `source` is not part of the graph.
///
/// ### Example
///
/// ```rust
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::dijkstra;
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c, d] = [(); 4].map(|_| builder.add_vertex());
/// builder.add_edge(a, b, 1).unwrap();
/// builder.add_edge(a, c, 4).unwrap();
/// builder.add_edge(b, c, 2).unwrap();
/// builder.add_edge(b, d, 5).unwrap();
/// builder.add_edge(c, d, 1).unwrap();
/// let graph = builder.build();
///
/// let paths = dijkstra(&graph, a).unwrap();
/// assert_eq!(Some(3), paths.distance(c));
/// assert_eq!(Some(4), paths.distance(d));
/// assert_eq!(vec![a, b, c, d], paths.path_to(d).unwrap().vertices);
/// ```
pub fn dijkstra<G: Graph>(graph: &G, source: VertexId) -> Result<ShortestPaths<G::Weight>, Error> {
    dijkstra_with(graph, source, &Config::default())
}

/// [`dijkstra`] with an explicit [`Config`].
///
/// ### Errors
///
/// - [`Error::InvalidVertex`] if `source` is not part of the graph.
/// - [`Error::NegativeWeight`] if [`Config::check_non_negative`] is set and an edge has a
///   negative weight.
#[profiling::function]
pub fn dijkstra_with<G: Graph>(
    graph: &G,
    source: VertexId,
    config: &Config,
) -> Result<ShortestPaths<G::Weight>, Error> {
    graph.check_vertex(source)?;
    if config.check_non_negative {
        check_non_negative(graph)?;
    }

    let mut labels = Labels::from_source(source);
    let mut frontier = Frontier::new();
    frontier.push(G::Weight::zero(), source);
    let mut settled = SecondaryMap::new();

    while let Some((_, vertex)) = frontier.pop() {
        if settled.insert(vertex, ()).is_some() {
            continue;
        }
        for (next, weight) in graph.neighbors(vertex)? {
            if !settled.contains_key(next) && labels.relax(vertex, next, weight) {
                if let Some(improved) = labels.get(next) {
                    frontier.push(improved, next);
                }
            }
        }
    }

    log::debug!(
        "dijkstra: settled {} of {} vertices",
        settled.len(),
        graph.vertex_count()
    );
    Ok(labels.into_shortest_paths(source))
}

/// Finds the shortest distance from `source` to every reachable vertex using the Bellman-Ford
/// algorithm.
///
/// Negative edge weights are allowed. Every edge is relaxed in `|V| - 1` full passes, then one
/// more pass checks whether any edge can still be relaxed, which happens exactly when a
/// negative-weight cycle is reachable from `source`.
///
/// ### Errors
///
/// - [`Error::InvalidVertex`] if `source` is not part of the graph.
/// - [`Error::NegativeCycle`] if a negative-weight cycle (including a negative self-loop) is
///   reachable from `source`.
///
/// ### Example
///
/// ```rust
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::bellman_ford;
/// use wayfind_graph::errors::Error;
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c] = [(); 3].map(|_| builder.add_vertex());
/// builder.add_edge(a, b, 4).unwrap();
/// builder.add_edge(a, c, 5).unwrap();
/// builder.add_edge(c, b, -3).unwrap();
/// let graph = builder.build();
///
/// let paths = bellman_ford(&graph, a).unwrap();
/// assert_eq!(Some(2), paths.distance(b));
///
/// let mut builder = GraphBuilder::new();
/// let [a, b] = [(); 2].map(|_| builder.add_vertex());
/// builder.add_edge(a, b, 1).unwrap();
/// builder.add_edge(b, a, -2).unwrap();
/// let graph = builder.build();
/// assert!(matches!(bellman_ford(&graph, a), Err(Error::NegativeCycle(_))));
/// ```
pub fn bellman_ford<G: Graph>(graph: &G, source: VertexId) -> Result<ShortestPaths<G::Weight>, Error> {
    bellman_ford_with(graph, source, &Config::default())
}

/// [`bellman_ford`] with an explicit [`Config`]. Only [`Config::early_exit`] applies here.
#[profiling::function]
pub fn bellman_ford_with<G: Graph>(
    graph: &G,
    source: VertexId,
    config: &Config,
) -> Result<ShortestPaths<G::Weight>, Error> {
    graph.check_vertex(source)?;
    let n = graph.vertex_count();
    let mut labels = Labels::from_source(source);

    let passes = relax_passes(graph, &mut labels, n - 1, config.early_exit);
    log::debug!(
        "bellman_ford: {passes} relaxation passes over {} edges",
        graph.edge_count()
    );

    if let Some(relaxed) = relax_first(graph, &mut labels) {
        let vertex = negative_cycle(graph, &mut labels)
            .and_then(|cycle| cycle.first().copied())
            .unwrap_or(relaxed);
        log::warn!("bellman_ford: negative-weight cycle through {vertex:?}");
        return Err(NegativeCycleDetected { vertex }.into());
    }

    Ok(labels.into_shortest_paths(source))
}

/// Looks for a negative-weight cycle anywhere in the graph, reachable or not.
///
/// Runs Bellman-Ford as if a virtual source were connected to every vertex with a zero-weight
/// edge. Returns the vertices of one negative cycle in edge order (the last vertex has an edge
/// back to the first), or `None` if the graph has none.
///
/// ```rust
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::find_negative_cycle;
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c, d] = [(); 4].map(|_| builder.add_vertex());
/// builder.add_edge(a, b, 1).unwrap();
/// builder.add_edge(c, d, 1).unwrap();
/// builder.add_edge(d, c, -5).unwrap();
/// let graph = builder.build();
///
/// let cycle = find_negative_cycle(&graph).unwrap();
/// assert_eq!(2, cycle.len());
/// assert!(cycle.contains(&c) && cycle.contains(&d));
/// ```
#[profiling::function]
pub fn find_negative_cycle<G: Graph>(graph: &G) -> Option<Vec<VertexId>> {
    let n = graph.vertex_count();
    let mut labels = Labels::new();
    for vertex in graph.vertices() {
        labels.seed(vertex, G::Weight::zero());
    }
    // The virtual source makes n + 1 vertices, hence n passes.
    relax_passes(graph, &mut labels, n, true);
    relax_first(graph, &mut labels)?;
    let cycle = negative_cycle(graph, &mut labels);
    if cycle.is_none() {
        log::warn!("find_negative_cycle: relaxable edge left but no predecessor cycle formed");
    }
    cycle
}

/// Finds the shortest path from `source` to `target` using A* search.
///
/// `heuristic` estimates the remaining distance from a vertex to `target`. It must never
/// overestimate it (admissible) for the result to be a shortest path; it does not need to be
/// consistent, as vertices are re-expanded whenever a cheaper route to them is found. With a
/// zero heuristic this is Dijkstra's algorithm stopped at `target`. Edge weights must be
/// non-negative, as for [`dijkstra`].
///
/// Returns `Ok(None)` when `target` is unreachable.
///
/// ### Example
///
/// ```rust
/// use wayfind_graph::GraphBuilder;
/// use wayfind_graph::algorithms::astar;
///
/// let mut builder = GraphBuilder::new();
/// let [a, b, c] = [(); 3].map(|_| builder.add_vertex());
/// builder.add_edge(a, b, 2.0).unwrap();
/// builder.add_edge(b, c, 2.0).unwrap();
/// builder.add_edge(a, c, 5.0).unwrap();
/// let graph = builder.build();
///
/// let path = astar(&graph, a, c, |_| 0.0).unwrap().unwrap();
/// assert_eq!(vec![a, b, c], path.vertices);
/// assert_eq!(4.0, path.cost);
/// ```
pub fn astar<G: Graph>(
    graph: &G,
    source: VertexId,
    target: VertexId,
    heuristic: impl Fn(VertexId) -> G::Weight,
) -> Result<Option<Path<G::Weight>>, Error> {
    astar_with(graph, source, target, heuristic, &Config::default())
}

/// [`astar`] with an explicit [`Config`]. Only [`Config::check_non_negative`] applies here.
#[profiling::function]
pub fn astar_with<G: Graph>(
    graph: &G,
    source: VertexId,
    target: VertexId,
    heuristic: impl Fn(VertexId) -> G::Weight,
    config: &Config,
) -> Result<Option<Path<G::Weight>>, Error> {
    graph.check_vertex(source)?;
    graph.check_vertex(target)?;
    if config.check_non_negative {
        check_non_negative(graph)?;
    }

    let mut labels = Labels::from_source(source);
    let mut frontier = Frontier::new();
    frontier.push(heuristic(source), (source, G::Weight::zero()));
    let mut expanded = 0usize;

    while let Some((_, (vertex, cost))) = frontier.pop() {
        if labels.get(vertex).is_some_and(|best| cost > best) {
            continue;
        }
        if vertex == target {
            log::debug!("astar: reached target after {expanded} expansions");
            return Ok(labels.trace(target).map(|vertices| Path { vertices, cost }));
        }
        expanded += 1;
        for (next, weight) in graph.neighbors(vertex)? {
            if labels.relax(vertex, next, weight) {
                if let Some(improved) = labels.get(next) {
                    frontier.push(improved + heuristic(next), (next, improved));
                }
            }
        }
    }

    log::debug!("astar: target unreachable after {expanded} expansions");
    Ok(None)
}

pub(crate) fn check_non_negative<G: Graph>(graph: &G) -> Result<(), Error> {
    match graph.weighted_edges().find(|(_, edge)| edge.weight.is_negative()) {
        Some((edge, _)) => Err(Error::NegativeWeight { edge }),
        None => Ok(()),
    }
}

/// Relaxes every edge once. Returns whether any label improved.
fn relax_pass<G: Graph>(graph: &G, labels: &mut Labels<G::Weight>) -> bool {
    let mut improved = false;
    for (_, edge) in graph.weighted_edges() {
        improved |= labels.relax(edge.from, edge.to, edge.weight);
    }
    improved
}

/// Runs up to `passes` full relaxation passes and returns how many were run.
fn relax_passes<G: Graph>(graph: &G, labels: &mut Labels<G::Weight>, passes: usize, early_exit: bool) -> usize {
    for pass in 0..passes {
        if !relax_pass(graph, labels) && early_exit {
            log::trace!("relaxation converged after {} passes", pass + 1);
            return pass + 1;
        }
    }
    passes
}

/// Relaxes the first edge which still admits relaxation and returns its target.
fn relax_first<G: Graph>(graph: &G, labels: &mut Labels<G::Weight>) -> Option<VertexId> {
    graph
        .weighted_edges()
        .find_map(|(_, edge)| labels.relax(edge.from, edge.to, edge.weight).then_some(edge.to))
}

/// Extracts a cycle from the predecessor graph, running more passes until one forms.
///
/// Only called once an edge is known to still be relaxable, meaning a negative cycle exists; any
/// cycle formed by predecessor links then has negative total weight.
fn negative_cycle<G: Graph>(graph: &G, labels: &mut Labels<G::Weight>) -> Option<Vec<VertexId>> {
    for _ in 0..=graph.vertex_count() {
        if let Some(cycle) = predecessor_cycle(labels, graph.vertices()) {
            return Some(cycle);
        }
        relax_pass(graph, labels);
    }
    None
}

fn predecessor_cycle<W: Weight>(labels: &Labels<W>, vertices: impl Iterator<Item = VertexId>) -> Option<Vec<VertexId>> {
    let mut walk_of = SecondaryMap::new();
    for (walk, start) in vertices.enumerate() {
        let mut current = start;
        loop {
            if let Some(&seen) = walk_of.get(current) {
                if seen == walk {
                    return Some(collect_cycle(labels, current));
                }
                break;
            }
            walk_of.insert(current, walk);
            match labels.predecessor(current) {
                Some(previous) => current = previous,
                None => break,
            }
        }
    }
    None
}

fn collect_cycle<W: Weight>(labels: &Labels<W>, on_cycle: VertexId) -> Vec<VertexId> {
    let mut cycle = vec![on_cycle];
    let mut current = on_cycle;
    while let Some(previous) = labels.predecessor(current) {
        if previous == on_cycle {
            break;
        }
        cycle.push(previous);
        current = previous;
    }
    cycle.reverse();
    cycle
}
