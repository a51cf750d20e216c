use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod catalog;
mod cmd;
mod config;

use config::{Overrides, load_config};

#[derive(Parser, Debug)]
#[command(
    name = "castnet",
    author,
    version,
    about = "castnet: actor/director collaboration graph analysis",
    long_about = None
)]
struct Cli {
    /// TOML analysis configuration.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for centrality sampling (overrides `centrality.seed`).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Length of each ranking (overrides `ranking.top_n`).
    #[arg(long, global = true)]
    top: Option<usize>,

    /// Start vertex for the spanning tree (overrides `mst.start`).
    #[arg(long, global = true)]
    mst_start: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            seed: self.seed,
            top: self.top,
            mst_start: self.mst_start.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        about = "Full analysis of a title catalog",
        long_about = "Build the actor → director and actor ↔ actor graphs, then report counts, \
                      component distributions, a minimum spanning tree and top-N influence rankings.",
        after_help = "EXAMPLES:\n    # Analyze with a fixed sampling seed\n    castnet --seed 7 analyze titles.csv\n\n    # Top 5 only, MST from a chosen actor\n    castnet --top 5 --mst-start \"AL PACINO\" analyze titles.csv\n\n    # Include component membership\n    castnet analyze --components titles.csv"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        about = "Graph sizes and distributions",
        long_about = "Report vertex and edge counts, degree distributions and component \
                      distributions for both graphs.",
        after_help = "EXAMPLES:\n    castnet stats titles.csv"
    )]
    Stats(cmd::stats::StatsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("CASTNET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "castnet=debug,info"
        } else {
            "castnet=info,warn"
        })
    });

    let format = env::var("CASTNET_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?.with_overrides(cli.overrides());
    debug!(?config, "configuration resolved");

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, &config),
        Commands::Stats(ref args) => cmd::stats::run_stats(args),
    }
}
