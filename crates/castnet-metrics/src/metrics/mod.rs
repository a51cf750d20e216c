//! Centrality metrics for collaboration graphs.
//!
//! # Overview
//!
//! Each metric answers a different question about a person's influence:
//!
//! - **Degree centrality** (`degree`): How many distinct collaborators does
//!   this person have, relative to everyone else in the graph?
//! - **Betweenness centrality** (`betweenness`): How often does this person
//!   sit on the cheapest path between two others (a bridge between groups)?
//! - **Closeness centrality** (`closeness`): How near is this person to
//!   everyone they can reach?
//!
//! Betweenness and closeness use Dijkstra over the collaboration weights.
//! Both bound their cost on large graphs by sampling, driven by an
//! injected [`rand::Rng`].
//!
//! # Usage
//!
//! ```rust
//! use castnet_metrics::graph::build_undirected_graph;
//! use castnet_metrics::metrics::{CentralityConfig, betweenness, closeness, degree};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let actors = build_undirected_graph(&[vec!["ANN", "BOB"], vec!["BOB", "CY"]]);
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! assert!((degree::degree_centrality(&actors, "BOB") - 1.0).abs() < 1e-12);
//! let bc = betweenness::betweenness_centrality(&actors, "BOB", &CentralityConfig::default(), &mut rng);
//! assert!((bc - 1.0).abs() < 1e-12);
//! let cc = closeness::closeness_of(&actors, "BOB");
//! assert!((cc - 1.0).abs() < 1e-12);
//! ```

pub mod betweenness;
pub mod closeness;
pub mod degree;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Source sampling policy for betweenness centrality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralityConfig {
    /// Graphs with fewer vertices than this use every vertex as a source.
    /// Default: 500.
    pub sample_threshold: usize,
    /// Number of sources drawn once the threshold is reached.
    /// Default: 500.
    pub sample_size: usize,
}

impl Default for CentralityConfig {
    fn default() -> Self {
        Self {
            sample_threshold: 500,
            sample_size: 500,
        }
    }
}

/// Vertex sampling policy for closeness over large graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosenessSampling {
    /// Score at most this many vertices. Default: 200.
    pub max_nodes: usize,
}

impl Default for ClosenessSampling {
    fn default() -> Self {
        Self { max_nodes: 200 }
    }
}
