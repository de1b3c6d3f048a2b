//! Catalog ingestion from the static gallery data file.
//!
//! Gallery data files are edited by hand and commonly carry `//` comment
//! lines, which plain JSON rejects. Those lines are dropped before parsing.
//! Text that is not a gallery document makes the whole catalog unavailable;
//! inside a valid document each entry is decoded on its own, so one broken
//! record never hides the rest.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use folio_model::{Catalog, CatalogEntry, GalleryDocument};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{CatalogError, LoadFailure, Result};

/// Remove every line whose first non-blank characters are `//`.
pub fn strip_comment_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse catalog text, accepting `{ "artworks": [...] }` or a bare array.
///
/// Mistyped fields degrade to defaults while decoding. Records that are not
/// entries at all (a bare number, a nested list) are skipped with a warning.
pub fn parse_catalog(text: &str) -> std::result::Result<Catalog, LoadFailure> {
    let cleaned = strip_comment_lines(text);
    let document: GalleryDocument<Value> = serde_json::from_str(&cleaned)?;

    let catalog: Catalog = document
        .into_records()
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| decode_entry(index, record))
        .collect();

    report_duplicate_ids(&catalog);
    Ok(catalog)
}

fn decode_entry(index: usize, record: Value) -> Option<CatalogEntry> {
    let id = record.get("id").map(Value::to_string);
    match serde_json::from_value(record) {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!(index, id = ?id, error = %err, "skipping unreadable catalog entry");
            None
        }
    }
}

/// Load and parse a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let origin = path.display().to_string();

    let catalog = fs::read_to_string(path)
        .map_err(LoadFailure::from)
        .and_then(|text| parse_catalog(&text))
        .map_err(|cause| CatalogError::CatalogUnavailable {
            origin: origin.clone(),
            cause,
        })?;

    info!(origin = %origin, entries = catalog.len(), "catalog loaded");
    Ok(catalog)
}

/// Outcome of a load attempt as seen by a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadStatus {
    /// The catalog loaded with this many entries.
    Loaded { entries: usize },
    /// Loading failed; the catalog is empty.
    Failed { reason: String },
}

/// A catalog paired with the status of the load that produced it.
///
/// A failed load still yields a usable, empty catalog so rendering can
/// continue and show the failure message.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    /// Loaded entries, or an empty catalog on failure.
    pub catalog: Catalog,
    /// Outcome shown to the page.
    pub status: LoadStatus,
}

impl CatalogLoad {
    /// Whether the load succeeded.
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, LoadStatus::Loaded { .. })
    }

    fn from_result(result: Result<Catalog>) -> Self {
        match result {
            Ok(catalog) => Self {
                status: LoadStatus::Loaded {
                    entries: catalog.len(),
                },
                catalog,
            },
            Err(err) => {
                warn!(error = %err, "catalog load failed; continuing with an empty catalog");
                Self {
                    catalog: Catalog::empty(),
                    status: LoadStatus::Failed {
                        reason: err.to_string(),
                    },
                }
            }
        }
    }
}

/// Load a catalog file, degrading to an empty catalog on failure.
pub fn load_or_empty(path: impl AsRef<Path>) -> CatalogLoad {
    CatalogLoad::from_result(load_catalog(path))
}

/// Parse in-memory catalog text, degrading to an empty catalog on failure.
pub fn parse_or_empty(origin: &str, text: &str) -> CatalogLoad {
    let result = parse_catalog(text).map_err(|cause| {
        CatalogError::CatalogUnavailable {
            origin: origin.to_string(),
            cause,
        }
    });
    CatalogLoad::from_result(result)
}

fn report_duplicate_ids(catalog: &Catalog) {
    let mut seen = HashSet::with_capacity(catalog.len());
    for entry in catalog {
        if !seen.insert(entry.id.as_str()) {
            warn!(id = %entry.id, "duplicate artwork id; lookups use the first entry");
        }
    }
}
