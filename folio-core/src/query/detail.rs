//! Detail-page lookup: resolve a focal id and its related artworks.

use folio_model::{Catalog, CatalogEntry, EntryId};
use serde::Serialize;

use super::related::{RelatedArtworkRanker, ScoredCandidate};
use crate::error::{CatalogError, Result};

/// Everything the detail page renders for one artwork.
#[derive(Debug, Clone, Serialize)]
pub struct ArtworkDetail<'a> {
    /// The focal artwork.
    pub entry: &'a CatalogEntry,
    /// Related artworks, most relevant first.
    pub related: Vec<ScoredCandidate<'a>>,
}

/// Resolve `id` against `catalog` with up to `limit` related entries.
///
/// An unknown id is reported as [`CatalogError::EntryNotFound`] instead of
/// ranking against nothing.
pub fn lookup_detail<'a>(
    catalog: &'a Catalog,
    id: &str,
    limit: usize,
) -> Result<ArtworkDetail<'a>> {
    let entry = catalog
        .find(id.trim())
        .ok_or_else(|| CatalogError::EntryNotFound(EntryId::new(id.trim())))?;

    Ok(ArtworkDetail {
        entry,
        related: RelatedArtworkRanker::default()
            .with_limit(limit)
            .rank_scored(entry, catalog),
    })
}
