//! `castnet analyze`: structure, spanning tree and influence rankings.

use std::path::PathBuf;

use castnet_metrics::WeightedGraph;
use castnet_metrics::graph::{
    TreeEdge, component_of, minimum_spanning_tree, strongly_connected_components,
    weak_components,
};
use castnet_metrics::rank::{
    RankedVertex, top_actors_by_degree, top_by_betweenness, top_by_closeness,
    top_directors_by_in_degree,
};
use clap::Args;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::catalog::load_catalog;
use crate::cmd::stats::StatsReport;
use crate::cmd::{Graphs, emit_json};
use crate::config::AnalysisConfig;

/// Arguments for `castnet analyze`.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Title catalog (CSV with `director` and `cast` columns).
    pub catalog: PathBuf,

    /// List the members of every strong component of the director graph
    /// and every weak component of the actor graph.
    #[arg(long)]
    pub components: bool,
}

#[derive(Debug, Serialize)]
pub struct MstSummary {
    pub start: String,
    pub component_size: usize,
    pub edge_count: usize,
    pub total_cost: u64,
    /// Tree edges in the order they were added.
    pub edges: Vec<TreeEdge>,
}

/// The director rankings cover every vertex of the actor → director
/// graph except for in-degree, which only ranks vertices someone points at.
#[derive(Debug, Serialize)]
pub struct Rankings {
    pub directors_by_in_degree: Vec<RankedVertex>,
    pub directors_by_betweenness: Vec<RankedVertex>,
    pub directors_by_closeness: Vec<RankedVertex>,
    pub actors_by_degree: Vec<RankedVertex>,
    pub actors_by_betweenness: Vec<RankedVertex>,
    pub actors_by_closeness: Vec<RankedVertex>,
}

/// Component membership, in discovery order.
#[derive(Debug, Serialize)]
pub struct ComponentListing {
    pub director_sccs: Vec<Vec<String>>,
    pub actor_components: Vec<Vec<String>>,
}

impl ComponentListing {
    #[must_use]
    pub fn of(graphs: &Graphs) -> Self {
        Self {
            director_sccs: strongly_connected_components(&graphs.directed),
            actor_components: weak_components(&graphs.undirected),
        }
    }
}

/// Report payload for `castnet analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeReport {
    #[serde(flatten)]
    pub stats: StatsReport,
    /// Absent when the actor graph is empty.
    pub mst: Option<MstSummary>,
    pub rankings: Rankings,
    /// Present with `--components`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<ComponentListing>,
}

/// First vertex of the largest weak component; the earliest component
/// wins a size tie.
fn default_mst_start(graph: &WeightedGraph) -> Option<String> {
    weak_components(graph)
        .into_iter()
        .fold(None::<Vec<String>>, |best, c| match best {
            Some(b) if b.len() >= c.len() => Some(b),
            _ => Some(c),
        })
        .and_then(|c| c.into_iter().next())
}

fn spanning_summary(
    graph: &WeightedGraph,
    configured: Option<&str>,
) -> anyhow::Result<Option<MstSummary>> {
    let Some(start) = configured
        .map(str::to_string)
        .or_else(|| default_mst_start(graph))
    else {
        return Ok(None);
    };

    if !graph.contains(&start) {
        warn!(start = %start, "MST start vertex not in actor graph");
    }

    let tree = minimum_spanning_tree(graph, &start)?;
    Ok(Some(MstSummary {
        component_size: component_of(graph, &start).len(),
        edge_count: tree.edges.len(),
        total_cost: tree.total_cost,
        edges: tree.edges,
        start,
    }))
}

/// Build the full analysis report, with component listings when
/// `list_components` is set.
///
/// # Errors
///
/// Propagates orientation errors from the metric layer.
pub fn analyze(
    graphs: &Graphs,
    config: &AnalysisConfig,
    list_components: bool,
) -> anyhow::Result<AnalyzeReport> {
    let mut rng = config
        .centrality
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let top = config.ranking.top_n;
    let betweenness = config.centrality.betweenness();
    let closeness = config.ranking.closeness();

    let rankings = Rankings {
        directors_by_in_degree: top_directors_by_in_degree(&graphs.directed, top)?,
        directors_by_betweenness: top_by_betweenness(
            &graphs.directed,
            top,
            &betweenness,
            &mut rng,
        ),
        directors_by_closeness: top_by_closeness(
            &graphs.directed,
            top,
            Some(&closeness),
            &mut rng,
        ),
        actors_by_degree: top_actors_by_degree(&graphs.undirected, top)?,
        actors_by_betweenness: top_by_betweenness(
            &graphs.undirected,
            top,
            &betweenness,
            &mut rng,
        ),
        actors_by_closeness: top_by_closeness(
            &graphs.undirected,
            top,
            Some(&closeness),
            &mut rng,
        ),
    };

    Ok(AnalyzeReport {
        stats: StatsReport::of(graphs),
        mst: spanning_summary(&graphs.undirected, config.mst.start.as_deref())?,
        rankings,
        components: list_components.then(|| ComponentListing::of(graphs)),
    })
}

/// Execute `castnet analyze`.
#[instrument(skip(args, config), fields(catalog = %args.catalog.display()))]
pub fn run_analyze(args: &AnalyzeArgs, config: &AnalysisConfig) -> anyhow::Result<()> {
    let catalog = load_catalog(&args.catalog)?;
    let graphs = Graphs::build(&catalog);
    info!(
        directed_nodes = graphs.directed.node_count(),
        actor_nodes = graphs.undirected.node_count(),
        "graphs built"
    );

    emit_json(&analyze(&graphs, config, args.components)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::parse_catalog;
    use crate::config::Overrides;

    fn graphs() -> Graphs {
        let csv = "\
director,cast
DORA,\"ann, bob\"
\"DORA, DAN\",\"bob, cy\"
DAN,\"zed, zoe\"
";
        let catalog = parse_catalog(csv.as_bytes()).expect("parse");
        Graphs::build(&catalog)
    }

    fn seeded() -> AnalysisConfig {
        AnalysisConfig::default().with_overrides(Overrides {
            seed: Some(3),
            ..Overrides::default()
        })
    }

    #[test]
    fn default_start_is_first_vertex_of_largest_component() {
        let g = graphs();
        assert_eq!(default_mst_start(&g.undirected).as_deref(), Some("ANN"));
        assert_eq!(default_mst_start(&WeightedGraph::undirected()), None);
    }

    #[test]
    fn report_covers_rankings_and_mst() {
        let report = analyze(&graphs(), &seeded(), false).expect("analyze");

        let mst = report.mst.expect("mst");
        assert_eq!(mst.start, "ANN");
        assert_eq!(mst.component_size, 3);
        assert_eq!(mst.edge_count, 2);
        assert_eq!(mst.total_cost, 2);
        let edges: Vec<(&str, &str)> = mst
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(edges, [("ANN", "BOB"), ("BOB", "CY")]);

        let r = &report.rankings;
        // DAN: BOB, CY, ZED, ZOE; DORA: ANN, BOB, CY.
        assert_eq!(r.directors_by_in_degree[0].vertex, "DAN");
        assert_eq!(r.directors_by_in_degree[0].degree, Some(4));
        assert_eq!(r.actors_by_degree[0].vertex, "BOB");
        assert_eq!(r.actors_by_betweenness[0].vertex, "BOB");
        // Closeness scales by n - 1 over reach, so the two-person
        // component outranks the three-person one: ZED = 1 * 4/1.
        assert_eq!(r.actors_by_closeness[0].vertex, "ZED");
        assert_eq!(r.actors_by_closeness.len(), 5);
        assert!(report.components.is_none());
    }

    #[test]
    fn director_graph_rankings_cover_every_vertex() {
        let report = analyze(&graphs(), &seeded(), false).expect("analyze");
        let r = &report.rankings;

        // Every path in the actor → director graph has one edge, so nobody
        // lies between two others.
        assert_eq!(r.directors_by_betweenness.len(), 7);
        assert!(r.directors_by_betweenness.iter().all(|v| v.score.abs() < f64::EPSILON));
        assert_eq!(r.directors_by_betweenness[0].vertex, "ANN");

        // ANN reaches only DORA at distance 1: 1 * 6/1. Directors reach
        // nobody and score 0.
        let closeness = &r.directors_by_closeness;
        assert_eq!(closeness.len(), 7);
        assert_eq!(closeness[0].vertex, "ANN");
        assert!((closeness[0].score - 6.0).abs() < 1e-12);
        let dan = closeness.iter().find(|v| v.vertex == "DAN").expect("DAN");
        assert!(dan.score.abs() < f64::EPSILON);
    }

    #[test]
    fn component_listing_is_opt_in() {
        let report = analyze(&graphs(), &seeded(), true).expect("analyze");
        let listing = report.components.expect("components");

        assert_eq!(listing.director_sccs.len(), 7);
        assert!(listing.director_sccs.iter().all(|c| c.len() == 1));
        let mut actors = listing.actor_components;
        actors.sort_by_key(Vec::len);
        assert_eq!(actors.len(), 2);
        assert_eq!(actors[0], ["ZED", "ZOE"]);
        assert_eq!(actors[1].len(), 3);
    }

    #[test]
    fn configured_start_is_used() {
        let config = seeded().with_overrides(Overrides {
            mst_start: Some("ZOE".to_string()),
            ..Overrides::default()
        });
        let mst = analyze(&graphs(), &config, false).expect("analyze").mst.expect("mst");
        assert_eq!(mst.component_size, 2);
        assert_eq!(mst.total_cost, 1);
    }

    #[test]
    fn unknown_start_gives_empty_tree() {
        let config = seeded().with_overrides(Overrides {
            mst_start: Some("NOBODY".to_string()),
            ..Overrides::default()
        });
        let mst = analyze(&graphs(), &config, false).expect("analyze").mst.expect("mst");
        assert_eq!(mst.component_size, 0);
        assert_eq!(mst.edge_count, 0);
        assert_eq!(mst.total_cost, 0);
    }

    #[test]
    fn top_limits_ranking_length() {
        let config = seeded().with_overrides(Overrides {
            top: Some(1),
            ..Overrides::default()
        });
        let report = analyze(&graphs(), &config, false).expect("analyze");
        assert_eq!(report.rankings.actors_by_degree.len(), 1);
        assert_eq!(report.rankings.directors_by_in_degree.len(), 1);
        assert_eq!(report.rankings.directors_by_betweenness.len(), 1);
        assert_eq!(report.rankings.directors_by_closeness.len(), 1);
    }
}
