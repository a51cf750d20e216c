//! Distribution statistics for collaboration graphs.
//!
//! # Statistics Provided
//!
//! - [`DegreeDistribution`]: mean, extremes, spread and histogram of vertex
//!   degrees, plus hub counts. A coefficient of variation above 1.0 is the
//!   usual hint of a heavy-tailed (scale-free) network.
//! - [`ComponentDistribution`]: how a partition (weak components or SCCs)
//!   splits the graph: size histogram, giant component, singletons.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::graph::build::WeightedGraph;

// ---------------------------------------------------------------------------
// DegreeDistribution
// ---------------------------------------------------------------------------

/// Summary of the degree sequence of a graph.
///
/// Degrees follow [`WeightedGraph::degree`]: in + out for directed graphs,
/// adjacency length for undirected ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DegreeDistribution {
    pub node_count: usize,
    pub mean: f64,
    pub min: usize,
    pub max: usize,
    /// Population standard deviation.
    pub std_dev: f64,
    /// `std_dev / mean`; zero when the mean is zero.
    pub coefficient_of_variation: f64,
    /// Degree → number of vertices with that degree.
    pub histogram: BTreeMap<usize, usize>,
    /// Vertices with degree strictly above twice the mean.
    pub high_degree_count: usize,
    /// Vertices with degree at most half the mean.
    pub low_degree_count: usize,
}

impl DegreeDistribution {
    /// Compute the distribution over every vertex of `graph`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_graph(graph: &WeightedGraph) -> Self {
        let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();
        let n = degrees.len();

        if n == 0 {
            return Self {
                node_count: 0,
                mean: 0.0,
                min: 0,
                max: 0,
                std_dev: 0.0,
                coefficient_of_variation: 0.0,
                histogram: BTreeMap::new(),
                high_degree_count: 0,
                low_degree_count: 0,
            };
        }

        let mean = degrees.iter().sum::<usize>() as f64 / n as f64;
        let variance = degrees
            .iter()
            .map(|&d| {
                let diff = d as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / n as f64;
        let std_dev = variance.sqrt();

        let mut histogram = BTreeMap::new();
        for &d in &degrees {
            *histogram.entry(d).or_insert(0) += 1;
        }

        Self {
            node_count: n,
            mean,
            min: degrees.iter().copied().min().unwrap_or(0),
            max: degrees.iter().copied().max().unwrap_or(0),
            std_dev,
            coefficient_of_variation: if mean > 0.0 { std_dev / mean } else { 0.0 },
            histogram,
            high_degree_count: degrees.iter().filter(|&&d| d as f64 > mean * 2.0).count(),
            low_degree_count: degrees.iter().filter(|&&d| d as f64 <= mean / 2.0).count(),
        }
    }

    /// `true` when the coefficient of variation exceeds 1.0.
    #[must_use]
    pub fn is_heterogeneous(&self) -> bool {
        self.coefficient_of_variation > 1.0
    }
}

// ---------------------------------------------------------------------------
// ComponentDistribution
// ---------------------------------------------------------------------------

/// Size profile of a vertex partition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDistribution {
    pub component_count: usize,
    /// Component size → number of components of that size.
    pub size_histogram: BTreeMap<usize, usize>,
    /// Size of the largest component (0 when there are none).
    pub giant_size: usize,
    /// `giant_size / node_count`; zero for an empty graph.
    pub giant_fraction: f64,
    /// Number of single-vertex components.
    pub singleton_count: usize,
}

impl ComponentDistribution {
    /// Profile `components`, a partition of a graph with `node_count`
    /// vertices.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_components(components: &[Vec<String>], node_count: usize) -> Self {
        let mut size_histogram = BTreeMap::new();
        for c in components {
            *size_histogram.entry(c.len()).or_insert(0) += 1;
        }

        let giant_size = components.iter().map(Vec::len).max().unwrap_or(0);
        let giant_fraction = if node_count == 0 {
            0.0
        } else {
            giant_size as f64 / node_count as f64
        };

        Self {
            component_count: components.len(),
            singleton_count: size_histogram.get(&1).copied().unwrap_or(0),
            size_histogram,
            giant_size,
            giant_fraction,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
