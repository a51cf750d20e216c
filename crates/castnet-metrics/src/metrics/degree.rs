//! Degree centrality.
//!
//! `degree(v) / (n - 1)`, where `degree` is in + out on directed graphs and
//! the adjacency length on undirected ones. On a directed graph a vertex
//! with edges both ways to the same partner can exceed `n - 1`; the score
//! is capped at 1.0 so it stays in `[0, 1]`.

use std::collections::HashMap;

use tracing::instrument;

use crate::error::{MetricsError, Orientation};
use crate::graph::build::WeightedGraph;

#[allow(clippy::cast_precision_loss)]
fn normalize(count: usize, node_count: usize) -> f64 {
    if node_count <= 1 {
        return 0.0;
    }
    (count as f64 / (node_count - 1) as f64).min(1.0)
}

/// Degree centrality of `v`. Zero for a single-vertex graph or an absent
/// vertex.
#[must_use]
pub fn degree_centrality(graph: &WeightedGraph, v: &str) -> f64 {
    normalize(graph.degree(v), graph.node_count())
}

/// Degree centrality of every vertex.
#[must_use]
#[instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn degree_centralities(graph: &WeightedGraph) -> HashMap<String, f64> {
    graph
        .vertices()
        .map(|v| (v.to_string(), degree_centrality(graph, v)))
        .collect()
}

/// In-degree centrality of `v` on a directed graph: how many distinct
/// vertices point at it, relative to `n - 1`.
///
/// On the actor → director graph this is the share of actors who worked
/// with a director.
///
/// # Errors
///
/// Returns [`MetricsError::WrongOrientation`] if `graph` is undirected.
pub fn in_degree_centrality(graph: &WeightedGraph, v: &str) -> Result<f64, MetricsError> {
    MetricsError::require(
        "in-degree centrality",
        Orientation::Directed,
        graph.is_directed(),
    )?;
    Ok(normalize(graph.in_degree(v), graph.node_count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(n: usize) -> WeightedGraph {
        let mut g = WeightedGraph::undirected();
        for i in 0..n {
            for j in i + 1..n {
                g.add_edge(&format!("V{i}"), &format!("V{j}"), 1);
            }
        }
        g
    }

    #[test]
    fn complete_graph_vertices_score_one() {
        for n in 2..7 {
            let g = complete(n);
            for (v, score) in degree_centralities(&g) {
                assert!((score - 1.0).abs() < f64::EPSILON, "{v} in K{n}: {score}");
            }
        }
    }

    #[test]
    fn single_vertex_scores_zero() {
        let mut g = WeightedGraph::undirected();
        g.add_node("A");
        assert!(degree_centrality(&g, "A").abs() < f64::EPSILON);
    }

    #[test]
    fn absent_vertex_scores_zero() {
        let g = complete(3);
        assert!(degree_centrality(&g, "NOPE").abs() < f64::EPSILON);
    }

    #[test]
    fn star_leaf_and_hub() {
        let mut g = WeightedGraph::undirected();
        for leaf in ["B", "C", "D", "E"] {
            g.add_edge("A", leaf, 1);
        }
        assert!((degree_centrality(&g, "A") - 1.0).abs() < f64::EPSILON);
        assert!((degree_centrality(&g, "B") - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn mutual_directed_edges_are_capped() {
        let mut g = WeightedGraph::directed();
        g.add_edge("A", "B", 1);
        g.add_edge("B", "A", 1);
        assert!((degree_centrality(&g, "A") - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn in_degree_counts_distinct_actors() {
        let mut g = WeightedGraph::directed();
        g.add_edge("ANN", "DORA", 1);
        g.add_edge("ANN", "DORA", 1);
        g.add_edge("BOB", "DORA", 1);
        g.add_edge("BOB", "DAN", 1);
        // n = 4, DORA has two distinct in-neighbours.
        let score = in_degree_centrality(&g, "DORA").unwrap();
        assert!((score - 2.0 / 3.0).abs() < 1e-12);
        assert!(in_degree_centrality(&g, "ANN").unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn in_degree_rejects_undirected_graph() {
        let g = complete(3);
        assert!(in_degree_centrality(&g, "V0").is_err());
    }
}
