//! Weighted closeness centrality.
//!
//! For a vertex `v`, run Dijkstra from `v` over outgoing edges. With `reach`
//! the number of other vertices reached and `total` the sum of their
//! distances:
//!
//! ```text
//! closeness(v) = (reach / total) * ((n - 1) / reach)
//! ```
//!
//! The two factors are evaluated separately, not folded into
//! `(n - 1) / total`; `n` counts every vertex, reachable or not.
//! A vertex that reaches nothing (or only at distance 0) scores 0.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use petgraph::graph::NodeIndex;
use rand::Rng;
use tracing::{debug, instrument};

use crate::graph::build::WeightedGraph;
use crate::metrics::ClosenessSampling;

/// Shortest distances from `source` to every reachable vertex.
fn shortest_distances(graph: &WeightedGraph, source: NodeIndex) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.node_count()];
    dist[source.index()] = Some(0);

    let mut heap: BinaryHeap<Reverse<(u64, NodeIndex)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((d, v))) = heap.pop() {
        if dist[v.index()].is_some_and(|best| d > best) {
            continue;
        }
        for (w, weight) in graph.out_edges(v) {
            let candidate = d + weight;
            if dist[w.index()].is_none_or(|current| candidate < current) {
                dist[w.index()] = Some(candidate);
                heap.push(Reverse((candidate, w)));
            }
        }
    }

    dist
}

/// Closeness centrality of `v`; 0.0 when `v` is absent.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_of(graph: &WeightedGraph, v: &str) -> f64 {
    let Some(source) = graph.index_of(v) else {
        return 0.0;
    };
    let n = graph.node_count();

    let dist = shortest_distances(graph, source);
    let (reach, total) = dist
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != source.index())
        .filter_map(|(_, d)| *d)
        .fold((0usize, 0u64), |(count, sum), d| (count + 1, sum + d));

    if reach == 0 || total == 0 {
        return 0.0;
    }

    let reach = reach as f64;
    (reach / total as f64) * ((n - 1) as f64 / reach)
}

/// Closeness centrality of each vertex in `vertices`, or of every vertex
/// when `vertices` is `None`. Absent names map to 0.0.
#[must_use]
#[instrument(skip(graph, vertices), fields(nodes = graph.node_count()))]
pub fn closeness_centrality(
    graph: &WeightedGraph,
    vertices: Option<&[&str]>,
) -> HashMap<String, f64> {
    let scores: HashMap<String, f64> = match vertices {
        Some(vs) => vs
            .iter()
            .map(|&v| (v.to_string(), closeness_of(graph, v)))
            .collect(),
        None => graph
            .vertices()
            .map(|v| (v.to_string(), closeness_of(graph, v)))
            .collect(),
    };

    debug!(scored = scores.len(), "closeness computed");
    scores
}

/// Closeness for at most [`ClosenessSampling::max_nodes`] vertices drawn
/// uniformly from `graph`; every vertex when the graph is small enough.
#[must_use]
#[instrument(skip(graph, sampling, rng), fields(nodes = graph.node_count()))]
pub fn sampled_closeness<R: Rng + ?Sized>(
    graph: &WeightedGraph,
    sampling: &ClosenessSampling,
    rng: &mut R,
) -> HashMap<String, f64> {
    let n = graph.node_count();
    if n <= sampling.max_nodes {
        return closeness_centrality(graph, None);
    }

    let names: Vec<&str> = graph.vertices().collect();
    let picked: Vec<&str> = rand::seq::index::sample(rng, n, sampling.max_nodes)
        .into_iter()
        .map(|i| names[i])
        .collect();

    closeness_centrality(graph, Some(picked.as_slice()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn undirected(edges: &[(&str, &str, u64)]) -> WeightedGraph {
        let mut g = WeightedGraph::undirected();
        for (a, b, w) in edges {
            g.add_edge(a, b, *w);
        }
        g
    }

    #[test]
    fn path_center_and_ends() {
        // A -1- B -1- C. B: reach 2, total 2 → 1.0. A: reach 2, total 3 → 2/3.
        let g = undirected(&[("A", "B", 1), ("B", "C", 1)]);
        assert!((closeness_of(&g, "B") - 1.0).abs() < 1e-12);
        assert!((closeness_of(&g, "A") - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_distances() {
        // A -2- B -3- C: from A distances 2 and 5, n - 1 = 2 → 2/7.
        let g = undirected(&[("A", "B", 2), ("B", "C", 3)]);
        assert!((closeness_of(&g, "A") - 2.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn partial_reach_uses_whole_graph_size() {
        // A - B plus isolated C: from A reach 1, total 1, n - 1 = 2 → 2.0.
        let mut g = undirected(&[("A", "B", 1)]);
        g.add_node("C");
        assert!((closeness_of(&g, "A") - 2.0).abs() < 1e-12);
    }

    #[test]
    fn isolated_vertex_scores_zero() {
        let mut g = undirected(&[("A", "B", 1)]);
        g.add_node("LONE");
        assert!(closeness_of(&g, "LONE").abs() < f64::EPSILON);
    }

    #[test]
    fn directed_sink_scores_zero() {
        let mut g = WeightedGraph::directed();
        g.add_edge("ACTOR", "DIRECTOR", 1);
        assert!(closeness_of(&g, "DIRECTOR").abs() < f64::EPSILON);
        assert!((closeness_of(&g, "ACTOR") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn absent_vertex_scores_zero() {
        let g = undirected(&[("A", "B", 1)]);
        assert!(closeness_of(&g, "NOPE").abs() < f64::EPSILON);
        let scores = closeness_centrality(&g, Some(&["NOPE"][..]));
        assert_eq!(scores.len(), 1);
        assert!(scores["NOPE"].abs() < f64::EPSILON);
    }

    #[test]
    fn defaults_to_every_vertex() {
        let g = undirected(&[("A", "B", 1), ("B", "C", 1)]);
        let scores = closeness_centrality(&g, None);
        assert_eq!(scores.len(), 3);
        assert!((scores["C"] - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn sampling_limits_scored_vertices() {
        let mut g = WeightedGraph::undirected();
        for i in 0..30 {
            g.add_edge("HUB", &format!("L{i:02}"), 1);
        }
        let mut rng = StdRng::seed_from_u64(11);
        let scores = sampled_closeness(&g, &ClosenessSampling { max_nodes: 8 }, &mut rng);
        assert_eq!(scores.len(), 8);
        assert!(scores.keys().all(|k| g.contains(k)));
    }

    #[test]
    fn small_graph_is_not_sampled() {
        let g = undirected(&[("A", "B", 1), ("B", "C", 1)]);
        let mut rng = StdRng::seed_from_u64(11);
        let scores = sampled_closeness(&g, &ClosenessSampling::default(), &mut rng);
        assert_eq!(scores, closeness_centrality(&g, None));
    }
}
