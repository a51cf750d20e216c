pub mod analyze;
pub mod stats;

use std::io::{self, Write};

use anyhow::Context;
use castnet_metrics::{WeightedGraph, build_directed_graph, build_undirected_graph};
use serde::Serialize;

use crate::catalog::Catalog;

/// Both collaboration graphs built from one catalog.
#[derive(Debug)]
pub struct Graphs {
    pub titles: usize,
    /// Actor → director.
    pub directed: WeightedGraph,
    /// Actor ↔ actor co-appearance.
    pub undirected: WeightedGraph,
}

impl Graphs {
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        Self {
            titles: catalog.len(),
            directed: build_directed_graph(&catalog.casts, &catalog.directors),
            undirected: build_undirected_graph(&catalog.casts),
        }
    }
}

/// Write `value` to stdout as pretty JSON followed by a newline.
pub fn emit_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).context("Failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}
