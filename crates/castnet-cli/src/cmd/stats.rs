//! `castnet stats`: graph sizes and structural distributions.

use std::path::PathBuf;

use castnet_metrics::WeightedGraph;
use castnet_metrics::graph::{
    ComponentDistribution, DegreeDistribution, strongly_connected_components, weak_components,
};
use clap::Args;
use serde::Serialize;
use tracing::instrument;

use crate::catalog::load_catalog;
use crate::cmd::{Graphs, emit_json};

/// Arguments for `castnet stats`.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Title catalog (CSV with `director` and `cast` columns).
    pub catalog: PathBuf,
}

/// Counts and distributions for one graph.
#[derive(Debug, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub degrees: DegreeDistribution,
    pub heterogeneous_degrees: bool,
    pub weak_components: ComponentDistribution,
    pub strong_components: ComponentDistribution,
}

impl GraphSummary {
    #[must_use]
    pub fn of(graph: &WeightedGraph) -> Self {
        let nodes = graph.node_count();
        let degrees = DegreeDistribution::from_graph(graph);
        Self {
            nodes,
            edges: graph.edge_count(),
            heterogeneous_degrees: degrees.is_heterogeneous(),
            degrees,
            weak_components: ComponentDistribution::from_components(
                &weak_components(graph),
                nodes,
            ),
            strong_components: ComponentDistribution::from_components(
                &strongly_connected_components(graph),
                nodes,
            ),
        }
    }
}

/// Report payload for `castnet stats`.
#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub titles: usize,
    pub director_graph: GraphSummary,
    pub actor_graph: GraphSummary,
}

impl StatsReport {
    #[must_use]
    pub fn of(graphs: &Graphs) -> Self {
        Self {
            titles: graphs.titles,
            director_graph: GraphSummary::of(&graphs.directed),
            actor_graph: GraphSummary::of(&graphs.undirected),
        }
    }
}

/// Execute `castnet stats`.
#[instrument(skip(args), fields(catalog = %args.catalog.display()))]
pub fn run_stats(args: &StatsArgs) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let graphs = Graphs::build(&catalog);
    emit_json(&StatsReport::of(&graphs))
}
