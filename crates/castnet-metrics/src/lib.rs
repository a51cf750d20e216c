#![forbid(unsafe_code)]
//! castnet-metrics library.
//!
//! Structural and influence metrics over actor/director collaboration
//! graphs: weak and strong components, a component-scoped minimum spanning
//! tree, and degree, betweenness and closeness centrality.
//!
//! # Conventions
//!
//! - **Errors**: Precondition violations return [`MetricsError`]. Missing
//!   vertices and degenerate graphs are not errors; they yield empty or
//!   zero results.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//! - **Randomness**: Sampling functions take an injected `rand::Rng` so
//!   callers control seeding.

pub mod error;
pub mod graph;
pub mod metrics;
pub mod rank;

pub use error::MetricsError;
pub use graph::{WeightedGraph, build_directed_graph, build_undirected_graph};
