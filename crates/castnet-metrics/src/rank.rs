//! Top-N influence rankings.
//!
//! Rankings sort by descending score and break ties by vertex name so the
//! same graph always produces the same list. The degree-based rankers check
//! orientation: director rankings read the actor → director graph, actor
//! rankings the actor ↔ actor graph. Betweenness and closeness rankers work
//! on either.

use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use tracing::instrument;

use crate::error::{MetricsError, Orientation};
use crate::graph::build::WeightedGraph;
use crate::metrics::{
    CentralityConfig, ClosenessSampling, betweenness::betweenness_centralities,
    closeness::{closeness_centrality, sampled_closeness},
    degree::{degree_centrality, in_degree_centrality},
};

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVertex {
    pub vertex: String,
    pub score: f64,
    /// Raw degree behind a degree-based score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<usize>,
}

fn sort_ranked(rows: &mut [RankedVertex]) {
    rows.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.vertex.cmp(&b.vertex))
    });
}

/// The `n` highest entries of `scores`.
#[must_use]
pub fn top_n(scores: &HashMap<String, f64>, n: usize) -> Vec<RankedVertex> {
    let mut rows: Vec<RankedVertex> = scores
        .iter()
        .map(|(vertex, &score)| RankedVertex {
            vertex: vertex.clone(),
            score,
            degree: None,
        })
        .collect();
    sort_ranked(&mut rows);
    rows.truncate(n);
    rows
}

/// Directors ranked by in-degree centrality (distinct actors who worked
/// with them, over `n - 1`). Vertices nobody points at are not directors
/// and are left out.
///
/// # Errors
///
/// Returns [`MetricsError::WrongOrientation`] if `graph` is undirected.
pub fn top_directors_by_in_degree(
    graph: &WeightedGraph,
    n: usize,
) -> Result<Vec<RankedVertex>, MetricsError> {
    MetricsError::require(
        "director in-degree ranking",
        Orientation::Directed,
        graph.is_directed(),
    )?;

    let mut rows = graph
        .vertices()
        .map(|v| (v, graph.in_degree(v)))
        .filter(|&(_, in_degree)| in_degree > 0)
        .map(|(v, in_degree)| {
            Ok(RankedVertex {
                vertex: v.to_string(),
                score: in_degree_centrality(graph, v)?,
                degree: Some(in_degree),
            })
        })
        .collect::<Result<Vec<_>, MetricsError>>()?;
    sort_ranked(&mut rows);
    rows.truncate(n);
    Ok(rows)
}

/// Actors ranked by degree centrality on the co-appearance graph.
///
/// # Errors
///
/// Returns [`MetricsError::WrongOrientation`] if `graph` is directed.
pub fn top_actors_by_degree(
    graph: &WeightedGraph,
    n: usize,
) -> Result<Vec<RankedVertex>, MetricsError> {
    MetricsError::require(
        "actor degree ranking",
        Orientation::Undirected,
        graph.is_directed(),
    )?;

    let mut rows: Vec<RankedVertex> = graph
        .vertices()
        .map(|v| RankedVertex {
            vertex: v.to_string(),
            score: degree_centrality(graph, v),
            degree: Some(graph.degree(v)),
        })
        .collect();
    sort_ranked(&mut rows);
    rows.truncate(n);
    Ok(rows)
}

/// Vertices ranked by betweenness centrality.
#[must_use]
#[instrument(skip(graph, config, rng))]
pub fn top_by_betweenness<R: Rng + ?Sized>(
    graph: &WeightedGraph,
    n: usize,
    config: &CentralityConfig,
    rng: &mut R,
) -> Vec<RankedVertex> {
    top_n(&betweenness_centralities(graph, None, config, rng), n)
}

/// Vertices ranked by closeness centrality. With `sampling`, only a
/// uniform sample of vertices is scored and ranked.
#[must_use]
#[instrument(skip(graph, sampling, rng))]
pub fn top_by_closeness<R: Rng + ?Sized>(
    graph: &WeightedGraph,
    n: usize,
    sampling: Option<&ClosenessSampling>,
    rng: &mut R,
) -> Vec<RankedVertex> {
    let scores = match sampling {
        Some(s) => sampled_closeness(graph, s, rng),
        None => closeness_centrality(graph, None),
    };
    top_n(&scores, n)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_directed_graph, build_undirected_graph};
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn top_n_sorts_and_breaks_ties_by_name() {
        let scores = HashMap::from([
            ("C".to_string(), 0.5),
            ("A".to_string(), 0.5),
            ("B".to_string(), 0.9),
            ("D".to_string(), 0.1),
        ]);
        let top: Vec<String> = top_n(&scores, 3).into_iter().map(|r| r.vertex).collect();
        assert_eq!(top, ["B", "A", "C"]);
    }

    #[test]
    fn top_n_larger_than_input() {
        let scores = HashMap::from([("A".to_string(), 1.0)]);
        assert_eq!(top_n(&scores, 10).len(), 1);
    }

    #[test]
    fn directors_ranked_by_distinct_actors() {
        let casts = vec![vec!["ANN", "BOB", "CY"], vec!["ANN"], vec!["DEE"]];
        let directors = vec![vec!["DORA"], vec!["DAN"], vec!["DAN"]];
        let g = build_directed_graph(&casts, &directors);

        let top = top_directors_by_in_degree(&g, 10).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].vertex, "DORA");
        assert_eq!(top[0].degree, Some(3));
        assert_eq!(top[1].vertex, "DAN");
        assert_eq!(top[1].degree, Some(2));
        // n = 6
        assert!((top[0].score - 3.0 / 5.0).abs() < 1e-12);
        for row in &top {
            let expected = in_degree_centrality(&g, &row.vertex).unwrap();
            assert!((row.score - expected).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn director_ranking_rejects_undirected_graph() {
        let g = build_undirected_graph(&[vec!["A", "B"]]);
        assert!(top_directors_by_in_degree(&g, 5).is_err());
    }

    #[test]
    fn actors_ranked_by_degree() {
        let g = build_undirected_graph(&[
            vec!["ANN", "BOB"],
            vec!["BOB", "CY"],
            vec!["BOB", "DEE"],
        ]);
        let top = top_actors_by_degree(&g, 1).unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].vertex, "BOB");
        assert_eq!(top[0].degree, Some(3));
        assert!((top[0].score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn actor_ranking_rejects_directed_graph() {
        let g = build_directed_graph(&[vec!["A"]], &[vec!["D"]]);
        assert!(top_actors_by_degree(&g, 5).is_err());
    }

    #[test]
    fn betweenness_ranking_puts_bridge_first() {
        let g = build_undirected_graph(&[vec!["ANN", "BOB"], vec!["BOB", "CY"]]);
        let mut rng = StdRng::seed_from_u64(2);
        let top = top_by_betweenness(&g, 3, &CentralityConfig::default(), &mut rng);
        assert_eq!(top[0].vertex, "BOB");
        assert_eq!(top.len(), 3);
    }

    #[test]
    fn closeness_ranking_puts_center_first() {
        let g = build_undirected_graph(&[vec!["ANN", "BOB"], vec!["BOB", "CY"]]);
        let mut rng = StdRng::seed_from_u64(2);
        let top = top_by_closeness(&g, 1, None, &mut rng);
        assert_eq!(top[0].vertex, "BOB");

        let sampled = top_by_closeness(&g, 1, Some(&ClosenessSampling::default()), &mut rng);
        assert_eq!(sampled, top);
    }
}
