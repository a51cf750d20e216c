//! Traversals: weak components, strongly connected components, transpose
//! and plain reachability.
//!
//! # Frontier Order
//!
//! Component expansion does not use a LIFO stack or a FIFO queue. The
//! frontier is a min-heap keyed by vertex name, so the smallest discovered
//! vertex is always expanded next. The visiting sequence therefore depends
//! only on the graph's shape and names, never on edge insertion order, and
//! component listings are reproducible byte for byte.
//!
//! A vertex is marked visited when it is popped, not when it is pushed. The
//! same vertex may sit in the frontier more than once; stale copies are
//! skipped on pop.
//!
//! # Strongly Connected Components
//!
//! Kosaraju's two passes, with both passes using the name-ordered frontier:
//!
//! 1. Expand every unvisited vertex on the original graph, recording each
//!    vertex when first visited, and push that path reversed onto a
//!    finishing stack.
//! 2. Pop the finishing stack; every unvisited vertex seeds an expansion on
//!    the transposed graph, and everything it reaches is one component.
//!
//! The first pass records visiting order rather than DFS completion order.
//! When a vertex is discovered before a sibling that reaches it, pass two
//! groups the two together. The result is always a partition of the vertex
//! set.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use fixedbitset::FixedBitSet;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, instrument};

use crate::graph::build::WeightedGraph;

/// Expand from `start` with a name-ordered frontier, marking vertices in
/// `visited` and returning them in visiting order.
fn ordered_expand<'g, I>(
    graph: &'g WeightedGraph,
    start: NodeIndex,
    visited: &mut FixedBitSet,
    mut next: impl FnMut(NodeIndex) -> I,
) -> Vec<NodeIndex>
where
    I: IntoIterator<Item = NodeIndex>,
{
    let mut frontier: BinaryHeap<Reverse<(&'g str, NodeIndex)>> = BinaryHeap::new();
    frontier.push(Reverse((graph.name(start), start)));

    let mut order = Vec::new();

    while let Some(Reverse((_, current))) = frontier.pop() {
        if visited.put(current.index()) {
            continue;
        }
        order.push(current);

        for neighbor in next(current) {
            if !visited.contains(neighbor.index()) {
                frontier.push(Reverse((graph.name(neighbor), neighbor)));
            }
        }
    }

    order
}

fn to_names(graph: &WeightedGraph, indices: Vec<NodeIndex>) -> Vec<String> {
    indices
        .into_iter()
        .map(|idx| graph.name(idx).to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Weak components
// ---------------------------------------------------------------------------

/// Partition the vertices into weakly connected components.
///
/// Seeds are taken in vertex insertion order; each component lists its
/// members in name-ordered frontier order (see the module docs). Edge
/// direction is ignored, so on an undirected graph these are the ordinary
/// connected components. Isolated vertices form singleton components.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn weak_components(graph: &WeightedGraph) -> Vec<Vec<String>> {
    let g = graph.inner();
    let mut visited = FixedBitSet::with_capacity(g.node_count());
    let mut components = Vec::new();

    for v in g.node_indices() {
        if visited.contains(v.index()) {
            continue;
        }
        let members = ordered_expand(graph, v, &mut visited, |x| g.neighbors_undirected(x));
        components.push(to_names(graph, members));
    }

    debug!(components = components.len(), "weak components computed");
    components
}

// ---------------------------------------------------------------------------
// Strongly connected components
// ---------------------------------------------------------------------------

/// Reverse every edge of `graph`, dropping weights.
///
/// Node indices and names are preserved, so an index valid in `graph` names
/// the same vertex in the result.
#[must_use]
pub fn transpose(graph: &WeightedGraph) -> DiGraph<String, ()> {
    let mut t = graph.inner().map(|_, name| name.clone(), |_, _| ());
    t.reverse();
    t
}

/// Partition the vertices into strongly connected components (Kosaraju).
///
/// Every vertex appears in exactly one component; a vertex on no cycle is
/// a singleton. On an undirected graph the components coincide with the
/// weak components because every edge is stored in both directions.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn strongly_connected_components(graph: &WeightedGraph) -> Vec<Vec<String>> {
    let g = graph.inner();
    let n = g.node_count();

    // Pass 1: finishing stack from name-ordered expansions.
    let mut visited = FixedBitSet::with_capacity(n);
    let mut finishing: Vec<NodeIndex> = Vec::with_capacity(n);

    for v in g.node_indices() {
        if visited.contains(v.index()) {
            continue;
        }
        let path = ordered_expand(graph, v, &mut visited, |x| g.neighbors(x));
        finishing.extend(path.into_iter().rev());
    }

    // Pass 2: expand on the transpose in LIFO order of the stack.
    let transposed = transpose(graph);
    visited.clear();
    let mut components = Vec::new();

    while let Some(v) = finishing.pop() {
        if visited.contains(v.index()) {
            continue;
        }
        let members = ordered_expand(graph, v, &mut visited, |x| transposed.neighbors(x));
        components.push(to_names(graph, members));
    }

    debug!(
        components = components.len(),
        non_trivial = components.iter().filter(|c| c.len() > 1).count(),
        "strongly connected components computed"
    );
    components
}

// ---------------------------------------------------------------------------
// Reachability
// ---------------------------------------------------------------------------

/// Membership bitset of every vertex reachable from `start` by plain BFS
/// over outgoing adjacency, `start` included. Weights are ignored.
pub(crate) fn reachable_set(graph: &WeightedGraph, start: NodeIndex) -> FixedBitSet {
    let g = graph.inner();
    let mut seen = FixedBitSet::with_capacity(g.node_count());
    seen.insert(start.index());

    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        for next in g.neighbors(current) {
            if !seen.put(next.index()) {
                queue.push_back(next);
            }
        }
    }

    seen
}

/// Every vertex reachable from `start` (BFS order, `start` first).
///
/// On an undirected graph this is the connected component of `start`.
/// Empty when `start` is not in the graph.
#[must_use]
pub fn component_of(graph: &WeightedGraph, start: &str) -> Vec<String> {
    let Some(s) = graph.index_of(start) else {
        return Vec::new();
    };
    let g = graph.inner();

    let mut seen = FixedBitSet::with_capacity(g.node_count());
    seen.insert(s.index());
    let mut order = vec![s];
    let mut queue = VecDeque::from([s]);

    while let Some(current) = queue.pop_front() {
        for next in graph.adjacency(current).into_iter().map(|(n, _)| n) {
            if !seen.put(next.index()) {
                order.push(next);
                queue.push_back(next);
            }
        }
    }

    to_names(graph, order)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
