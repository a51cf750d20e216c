//! Collaboration graph module.
//!
//! # Overview
//!
//! This module owns the [`WeightedGraph`] data structure and the structural
//! queries that run on it. The graph is built once by one of the builders
//! and every query is a read-only function of it.
//!
//! ## Pipeline
//!
//! ```text
//! per-title cast lists + director lists
//!        ↓  build::build_directed_graph / build::build_undirected_graph
//! WeightedGraph
//!        ├─ traverse::weak_components / strongly_connected_components
//!        ├─ mst::minimum_spanning_tree
//!        ├─ stats::DegreeDistribution / ComponentDistribution
//!        └─ crate::metrics (degree, betweenness, closeness)
//! ```
//!
//! ## Typical Usage
//!
//! ```rust
//! use castnet_metrics::graph::{build_undirected_graph, mst, traverse};
//!
//! let casts = vec![vec!["ANN", "BOB"], vec!["BOB", "CY"]];
//! let actors = build_undirected_graph(&casts);
//!
//! let components = traverse::weak_components(&actors);
//! assert_eq!(components, vec![vec!["ANN", "BOB", "CY"]]);
//!
//! let tree = mst::minimum_spanning_tree(&actors, "ANN")?;
//! assert_eq!(tree.total_cost, 2);
//! # Ok::<(), castnet_metrics::MetricsError>(())
//! ```

pub mod build;
pub mod mst;
pub mod stats;
pub mod traverse;

// Re-export primary types at module level for convenience.
pub use build::{WeightedGraph, build_directed_graph, build_undirected_graph};
pub use mst::{SpanningTree, TreeEdge, minimum_spanning_tree};
pub use stats::{ComponentDistribution, DegreeDistribution};
pub use traverse::{component_of, strongly_connected_components, transpose, weak_components};
