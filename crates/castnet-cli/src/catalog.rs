//! Title catalog ingestion.
//!
//! A catalog is a CSV file with a header row. Only the `director` and
//! `cast` columns are read; both hold comma-separated names (quoted, as CSV
//! requires) and may be empty. Other columns are ignored.
//!
//! ```text
//! title,director,cast
//! Heat,Michael Mann,"Al Pacino, Robert De Niro"
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{debug, info, warn};

const REQUIRED_COLUMNS: [&str; 2] = ["director", "cast"];

#[derive(Debug, Deserialize)]
struct TitleRecord {
    #[serde(default)]
    director: Option<String>,
    #[serde(default)]
    cast: Option<String>,
}

/// Per-title name lists, index-aligned: `casts[i]` and `directors[i]`
/// describe the same title.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub casts: Vec<Vec<String>>,
    pub directors: Vec<Vec<String>>,
}

impl Catalog {
    #[must_use]
    pub fn len(&self) -> usize {
        self.casts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.casts.is_empty()
    }
}

/// Trim and upper-case a person name.
fn normalize_name(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Split a comma-separated field into normalized names, dropping empty
/// entries.
fn split_names(field: Option<&str>) -> Vec<String> {
    field
        .unwrap_or_default()
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(normalize_name)
        .collect()
}

/// Parse a CSV catalog. Titles without a director or without cast are
/// skipped.
///
/// # Errors
///
/// Returns an error if the header lacks a `director` or `cast` column, or
/// a row is not valid CSV (including a row whose field count differs from
/// the header's).
pub fn parse_catalog<R: Read>(input: R) -> Result<Catalog> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers().context("catalog has no header row")?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            bail!("catalog header is missing the `{column}` column");
        }
    }

    let mut catalog = Catalog::default();
    let mut total = 0usize;
    for (row, record) in reader.deserialize::<TitleRecord>().enumerate() {
        // Header is line 1.
        let record = record.with_context(|| format!("invalid title record on line {}", row + 2))?;
        total += 1;

        let directors = split_names(record.director.as_deref());
        let cast = split_names(record.cast.as_deref());
        if directors.is_empty() || cast.is_empty() {
            continue;
        }
        catalog.directors.push(directors);
        catalog.casts.push(cast);
    }

    debug!(total, kept = catalog.len(), "catalog parsed");
    Ok(catalog)
}

/// Read and parse the catalog at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let file =
        File::open(path).with_context(|| format!("Failed to read catalog {}", path.display()))?;
    let catalog = parse_catalog(file)
        .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
    if catalog.is_empty() {
        warn!(path = %path.display(), "catalog has no usable titles");
    } else {
        info!(titles = catalog.len(), path = %path.display(), "catalog loaded");
    }
    Ok(catalog)
}
