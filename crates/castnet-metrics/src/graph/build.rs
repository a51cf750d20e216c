//! Weighted collaboration graph and its builders.
//!
//! # Overview
//!
//! [`WeightedGraph`] stores vertices (normalized person names) and weighted
//! adjacency on top of a [`petgraph`] directed graph. Undirected graphs are
//! stored as two mirrored directed entries per edge, so every algorithm can
//! walk outgoing edges regardless of orientation.
//!
//! ## Edge Weights
//!
//! Weights count collaborations. Adding an edge between a pair that is
//! already connected sums the weights instead of creating a parallel edge,
//! so there is at most one entry per ordered pair `(u, v)`.
//!
//! ## Builders
//!
//! - [`build_directed_graph`]: `actor → director`, weight = number of titles
//!   the actor made with that director.
//! - [`build_undirected_graph`]: `actor ↔ actor`, weight = number of titles
//!   the two actors share.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
    visit::EdgeRef,
};
use tracing::{debug, instrument};

// ---------------------------------------------------------------------------
// WeightedGraph
// ---------------------------------------------------------------------------

/// A weighted graph over named vertices.
///
/// Vertices and edges are only ever added. Every query in this crate takes
/// `&WeightedGraph` and leaves it untouched.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    directed: bool,
    /// Adjacency storage. Undirected edges appear once in each direction.
    graph: DiGraph<String, u64>,
    /// Mapping from vertex name to petgraph `NodeIndex`.
    node_map: HashMap<String, NodeIndex>,
    /// Number of logical edges (an undirected edge counts once).
    edge_count: usize,
}

impl WeightedGraph {
    /// Create an empty graph with fixed orientation.
    #[must_use]
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            graph: DiGraph::new(),
            node_map: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self::new(false)
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.directed
    }

    /// Insert `v` if it is not already present. Returns its index.
    pub fn add_node(&mut self, v: &str) -> NodeIndex {
        if let Some(&idx) = self.node_map.get(v) {
            return idx;
        }
        let idx = self.graph.add_node(v.to_string());
        self.node_map.insert(v.to_string(), idx);
        idx
    }

    /// Add `weight` to the edge `u → v`, creating both endpoints and the
    /// edge when missing.
    ///
    /// On undirected graphs the mirrored entry `v → u` receives the same
    /// increment, keeping both directions at equal weight.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: u64) {
        let ui = self.add_node(u);
        let vi = self.add_node(v);

        if let Some(e) = self.graph.find_edge(ui, vi) {
            self.graph[e] += weight;
            if !self.directed && ui != vi {
                if let Some(back) = self.graph.find_edge(vi, ui) {
                    self.graph[back] += weight;
                }
            }
            return;
        }

        self.graph.add_edge(ui, vi, weight);
        self.edge_count += 1;

        if !self.directed && ui != vi && self.graph.find_edge(vi, ui).is_none() {
            self.graph.add_edge(vi, ui, weight);
        }
    }

    /// Number of vertices, isolated ones included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges. An undirected edge is counted once even though it
    /// is stored as two adjacency entries.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// `(node_count, edge_count)` in one call.
    #[must_use]
    pub fn counts(&self) -> (usize, usize) {
        (self.node_count(), self.edge_count())
    }

    #[must_use]
    pub fn contains(&self, v: &str) -> bool {
        self.node_map.contains_key(v)
    }

    /// Vertex names in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(|idx| self.graph[idx].as_str())
    }

    /// Adjacency list of `v` as `(neighbor, weight)` pairs in insertion
    /// order. Empty for an absent vertex.
    #[must_use]
    pub fn neighbors(&self, v: &str) -> Vec<(&str, u64)> {
        self.index_of(v).map_or_else(Vec::new, |idx| {
            self.adjacency(idx)
                .into_iter()
                .map(|(n, w)| (self.graph[n].as_str(), w))
                .collect()
        })
    }

    /// Weight of the entry `u → v`, if present.
    #[must_use]
    pub fn edge_weight(&self, u: &str, v: &str) -> Option<u64> {
        let ui = self.index_of(u)?;
        let vi = self.index_of(v)?;
        self.graph.find_edge(ui, vi).map(|e| self.graph[e])
    }

    /// Number of adjacency entries leaving `v`.
    #[must_use]
    pub fn out_degree(&self, v: &str) -> usize {
        self.index_of(v).map_or(0, |idx| {
            self.graph.edges_directed(idx, Direction::Outgoing).count()
        })
    }

    /// Number of adjacency entries targeting `v`.
    #[must_use]
    pub fn in_degree(&self, v: &str) -> usize {
        self.index_of(v).map_or(0, |idx| {
            self.graph.edges_directed(idx, Direction::Incoming).count()
        })
    }

    /// Degree of `v`: in + out on directed graphs, adjacency length on
    /// undirected graphs. Zero for an absent vertex.
    #[must_use]
    pub fn degree(&self, v: &str) -> usize {
        if self.directed {
            self.in_degree(v) + self.out_degree(v)
        } else {
            self.out_degree(v)
        }
    }

    // -----------------------------------------------------------------------
    // Crate-internal index access used by the algorithms.
    // -----------------------------------------------------------------------

    pub(crate) fn index_of(&self, v: &str) -> Option<NodeIndex> {
        self.node_map.get(v).copied()
    }

    pub(crate) fn name(&self, idx: NodeIndex) -> &str {
        self.graph[idx].as_str()
    }

    pub(crate) fn inner(&self) -> &DiGraph<String, u64> {
        &self.graph
    }

    /// Outgoing `(neighbor, weight)` entries of `idx`, most recent first.
    pub(crate) fn out_edges(
        &self,
        idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, u64)> + '_ {
        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (e.target(), *e.weight()))
    }

    /// Outgoing `(neighbor, weight)` entries of `idx` in insertion order.
    pub(crate) fn adjacency(&self, idx: NodeIndex) -> Vec<(NodeIndex, u64)> {
        // petgraph lists a node's edges most-recent first.
        let mut out: Vec<(NodeIndex, u64)> = self.out_edges(idx).collect();
        out.reverse();
        out
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build the `actor → director` graph.
///
/// `cast_lists[i]` and `director_lists[i]` describe the same title. Every
/// actor of a title gets a weight-1 edge to every director of that title;
/// repeat collaborations accumulate. Extra entries in the longer sequence
/// are ignored.
#[must_use]
#[instrument(skip_all, fields(titles = cast_lists.len()))]
pub fn build_directed_graph<S: AsRef<str>>(
    cast_lists: &[Vec<S>],
    director_lists: &[Vec<S>],
) -> WeightedGraph {
    let mut graph = WeightedGraph::directed();

    for (cast, directors) in cast_lists.iter().zip(director_lists) {
        for actor in cast {
            for director in directors {
                graph.add_edge(actor.as_ref(), director.as_ref(), 1);
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built actor → director graph"
    );
    graph
}

/// Build the undirected `actor ↔ actor` co-appearance graph.
///
/// Every unordered pair of cast members in a title gets a weight-1 edge;
/// pairs that share several titles accumulate.
#[must_use]
#[instrument(skip_all, fields(titles = cast_lists.len()))]
pub fn build_undirected_graph<S: AsRef<str>>(cast_lists: &[Vec<S>]) -> WeightedGraph {
    let mut graph = WeightedGraph::undirected();

    for cast in cast_lists {
        for (i, a) in cast.iter().enumerate() {
            for b in &cast[i + 1..] {
                graph.add_edge(a.as_ref(), b.as_ref(), 1);
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built actor ↔ actor graph"
    );
    graph
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
