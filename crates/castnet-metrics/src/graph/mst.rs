//! Minimum spanning tree (Prim) restricted to one connected component.
//!
//! # Algorithm
//!
//! 1. Collect the component of the start vertex with a plain BFS
//!    ([`crate::graph::traverse::component_of`]'s reachability). Edges that
//!    leave this set are never considered.
//! 2. Lazy Prim: a min-heap of candidate edges keyed by weight, ties broken
//!    by the order the edges were pushed. Popping an edge whose far end is
//!    already in the tree discards it.
//! 3. Stop once every component vertex is in the tree or the heap is empty.
//!
//! The result is a tree over the start vertex's component only. An isolated
//! start vertex yields an empty tree with cost 0.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{MetricsError, Orientation};
use crate::graph::build::WeightedGraph;
use crate::graph::traverse::reachable_set;

/// One tree edge, oriented away from the start vertex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
    pub weight: u64,
}

/// Edges of a minimum spanning tree and their summed weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpanningTree {
    /// Edges in acceptance order.
    pub edges: Vec<TreeEdge>,
    /// Sum of `edges[*].weight`.
    pub total_cost: u64,
}

impl SpanningTree {
    /// Number of vertices the tree spans (zero for an empty tree).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        if self.edges.is_empty() {
            0
        } else {
            self.edges.len() + 1
        }
    }
}

/// Candidate edge in the Prim heap: `(weight, push sequence, from, to)`.
type Candidate = Reverse<(u64, u64, NodeIndex, NodeIndex)>;

/// Compute a minimum spanning tree of the component containing `start`.
///
/// # Errors
///
/// Returns [`MetricsError::WrongOrientation`] if `graph` is directed.
///
/// An absent `start` is not an error: the result is an empty tree with
/// cost 0, the same as for an isolated vertex.
#[instrument(skip(graph))]
pub fn minimum_spanning_tree(
    graph: &WeightedGraph,
    start: &str,
) -> Result<SpanningTree, MetricsError> {
    MetricsError::require(
        "minimum spanning tree",
        Orientation::Undirected,
        graph.is_directed(),
    )?;

    let Some(s) = graph.index_of(start) else {
        debug!("start vertex not in graph");
        return Ok(SpanningTree::default());
    };

    let component = reachable_set(graph, s);
    let component_size = component.count_ones(..);
    if component_size <= 1 {
        return Ok(SpanningTree::default());
    }

    let mut in_tree = FixedBitSet::with_capacity(graph.node_count());
    let mut heap: BinaryHeap<Candidate> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let mut push_edges =
        |from: NodeIndex, in_tree: &FixedBitSet, heap: &mut BinaryHeap<Candidate>| {
            for (to, weight) in graph.adjacency(from) {
                if component.contains(to.index()) && !in_tree.contains(to.index()) {
                    heap.push(Reverse((weight, seq, from, to)));
                    seq += 1;
                }
            }
        };

    in_tree.insert(s.index());
    push_edges(s, &in_tree, &mut heap);

    let mut tree = SpanningTree::default();
    let mut spanned = 1;

    while spanned < component_size {
        let Some(Reverse((weight, _, from, to))) = heap.pop() else {
            break;
        };
        if in_tree.put(to.index()) {
            continue;
        }

        tree.edges.push(TreeEdge {
            from: graph.name(from).to_string(),
            to: graph.name(to).to_string(),
            weight,
        });
        tree.total_cost += weight;
        spanned += 1;

        push_edges(to, &in_tree, &mut heap);
    }

    debug!(
        component_size,
        edges = tree.edges.len(),
        total_cost = tree.total_cost,
        "minimum spanning tree computed"
    );
    Ok(tree)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
