//! Weighted betweenness centrality via Brandes' algorithm.
//!
//! # Overview
//!
//! Betweenness centrality measures how often a vertex lies on shortest
//! paths between other pairs of vertices. In the collaboration graphs a
//! high score marks someone who bridges otherwise separate groups.
//!
//! # Algorithm
//!
//! Brandes (2001) with Dijkstra in place of BFS, since edges carry
//! collaboration weights:
//!
//! 1. For each source `s`, run Dijkstra, tracking per vertex `w` the number
//!    of shortest paths `sigma[w]` and the predecessors of `w` on them. A
//!    strictly shorter path resets both; an equally short one adds to them.
//! 2. Pop vertices in reverse settle order and propagate dependencies:
//!    `delta[v] += sigma[v] / sigma[w] * (1 + delta[w])` for each
//!    predecessor `v` of `w`.
//! 3. Sum the target's dependency over every source other than itself.
//!
//! One pass from a source yields the dependency of every vertex, so
//! [`betweenness_centralities`] runs each source once and reads all the
//! targets from it.
//!
//! # Sampling
//!
//! Graphs with fewer than [`CentralityConfig::sample_threshold`] vertices
//! use every vertex as a source. Larger graphs draw
//! [`CentralityConfig::sample_size`] sources uniformly. For a single target,
//! if the target is not among them it replaces the first drawn source; a
//! batch query shares one sample across all targets.
//!
//! # Normalization
//!
//! Unsampled: `1 / ((n-1)(n-2))`. Sampled: `(k / n) / ((n-1)(n-2))` with
//! `k` the number of sources. Graphs with fewer than three vertices score 0.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use fixedbitset::FixedBitSet;
use petgraph::graph::NodeIndex;
use rand::Rng;
use tracing::{debug, instrument};

use crate::graph::build::WeightedGraph;
use crate::metrics::CentralityConfig;

/// Every vertex when the graph is under the sampling threshold, otherwise
/// a uniform draw of `sample_size` vertices. The flag reports sampling.
fn draw_sources<R: Rng + ?Sized>(
    graph: &WeightedGraph,
    config: &CentralityConfig,
    rng: &mut R,
) -> (Vec<NodeIndex>, bool) {
    let n = graph.node_count();
    if n < config.sample_threshold {
        return (graph.inner().node_indices().collect(), false);
    }

    let k = config.sample_size.min(n);
    let sources = rand::seq::index::sample(rng, n, k)
        .into_iter()
        .map(NodeIndex::new)
        .collect();
    (sources, true)
}

/// Pick the Dijkstra sources for `target`. Returns the sources and whether
/// they were sampled.
fn choose_sources<R: Rng + ?Sized>(
    graph: &WeightedGraph,
    target: NodeIndex,
    config: &CentralityConfig,
    rng: &mut R,
) -> (Vec<NodeIndex>, bool) {
    let (mut sources, sampled) = draw_sources(graph, config, rng);
    if sampled && !sources.contains(&target) {
        if let Some(first) = sources.first_mut() {
            *first = target;
        }
    }

    (sources, sampled)
}

/// Dependency of every vertex on shortest paths starting at `source`,
/// indexed by node. The source's own entry is 0.
#[allow(clippy::many_single_char_names)]
fn source_dependencies(graph: &WeightedGraph, source: NodeIndex) -> Vec<f64> {
    let n = graph.node_count();

    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut sigma: Vec<f64> = vec![0.0; n];
    let mut predecessors: Vec<Vec<NodeIndex>> = vec![Vec::new(); n];
    let mut settled = FixedBitSet::with_capacity(n);

    // Settle order; popped back-to-front for the dependency pass.
    let mut stack: Vec<NodeIndex> = Vec::with_capacity(n);

    dist[source.index()] = Some(0);
    sigma[source.index()] = 1.0;

    let mut heap: BinaryHeap<Reverse<(u64, &str, NodeIndex)>> = BinaryHeap::new();
    heap.push(Reverse((0, graph.name(source), source)));

    while let Some(Reverse((d, _, v))) = heap.pop() {
        if settled.put(v.index()) {
            continue;
        }
        stack.push(v);
        let vi = v.index();

        for (w, weight) in graph.out_edges(v) {
            let wi = w.index();
            if settled.contains(wi) {
                continue;
            }
            let candidate = d + weight;
            match dist[wi] {
                Some(current) if candidate > current => {}
                Some(current) if candidate == current => {
                    sigma[wi] += sigma[vi];
                    predecessors[wi].push(v);
                }
                _ => {
                    dist[wi] = Some(candidate);
                    sigma[wi] = sigma[vi];
                    predecessors[wi].clear();
                    predecessors[wi].push(v);
                    heap.push(Reverse((candidate, graph.name(w), w)));
                }
            }
        }
    }

    let mut delta: Vec<f64> = vec![0.0; n];
    while let Some(w) = stack.pop() {
        let wi = w.index();
        for &v in &predecessors[wi] {
            let vi = v.index();
            delta[vi] += (sigma[vi] / sigma[wi]) * (1.0 + delta[wi]);
        }
    }
    delta[source.index()] = 0.0;

    delta
}

#[allow(clippy::cast_precision_loss)]
fn normalization(n: usize, sources: usize, sampled: bool) -> f64 {
    let pairs = ((n - 1) * (n - 2)) as f64;
    if sampled {
        (sources as f64 / n as f64) / pairs
    } else {
        1.0 / pairs
    }
}

/// Betweenness centrality of `target`.
///
/// Returns 0.0 when `target` is absent or the graph has fewer than three
/// vertices. Sampling (see the module docs) draws from `rng`.
#[must_use]
#[instrument(skip(graph, config, rng), fields(nodes = graph.node_count()))]
pub fn betweenness_centrality<R: Rng + ?Sized>(
    graph: &WeightedGraph,
    target: &str,
    config: &CentralityConfig,
    rng: &mut R,
) -> f64 {
    let n = graph.node_count();
    let Some(t) = graph.index_of(target) else {
        return 0.0;
    };
    if n < 3 {
        return 0.0;
    }

    let (sources, sampled) = choose_sources(graph, t, config, rng);

    let total: f64 = sources
        .iter()
        .map(|&s| source_dependencies(graph, s)[t.index()])
        .sum();

    debug!(sources = sources.len(), sampled, raw = total, "betweenness computed");
    total * normalization(n, sources.len(), sampled)
}

/// Betweenness centrality of each vertex in `targets`, or of every vertex
/// when `targets` is `None`. Absent names map to 0.0.
///
/// All targets share one set of sources, and each source runs a single
/// Brandes pass. Unsampled, every score equals the one
/// [`betweenness_centrality`] gives.
#[must_use]
#[instrument(skip(graph, targets, config, rng), fields(nodes = graph.node_count()))]
pub fn betweenness_centralities<R: Rng + ?Sized>(
    graph: &WeightedGraph,
    targets: Option<&[&str]>,
    config: &CentralityConfig,
    rng: &mut R,
) -> HashMap<String, f64> {
    let n = graph.node_count();
    let mut totals: Vec<f64> = vec![0.0; n];
    let mut scale = 0.0;

    if n >= 3 {
        let (sources, sampled) = draw_sources(graph, config, rng);
        for &s in &sources {
            for (total, delta) in totals.iter_mut().zip(source_dependencies(graph, s)) {
                *total += delta;
            }
        }
        scale = normalization(n, sources.len(), sampled);
        debug!(sources = sources.len(), sampled, "betweenness computed for all vertices");
    }

    let score = |v: &str| graph.index_of(v).map_or(0.0, |i| totals[i.index()] * scale);
    match targets {
        Some(names) => names.iter().map(|&v| (v.to_string(), score(v))).collect(),
        None => graph.vertices().map(|v| (v.to_string(), score(v))).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
