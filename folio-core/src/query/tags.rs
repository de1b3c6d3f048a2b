//! Tag vocabulary derived from the catalog.
//!
//! Older records keep their tags in the space separated `category` field,
//! newer ones use a `tags` list. Both sources are merged wherever tags are
//! read.

use std::collections::{BTreeSet, HashSet};

use folio_model::{Catalog, CatalogEntry, TagOption};
use tracing::debug;

use super::text::{collate, normalize_tag};

/// Raw tag spellings of one entry: category tokens followed by list tags.
pub fn raw_tags(entry: &CatalogEntry) -> impl Iterator<Item = &str> {
    entry
        .category_tokens()
        .chain(entry.tags.iter().map(String::as_str))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
}

/// Lower-cased tag set of one entry, used for matching and overlap scoring.
pub fn entry_tag_set(entry: &CatalogEntry) -> BTreeSet<String> {
    raw_tags(entry).filter_map(normalize_tag).collect()
}

/// Builds the filter vocabulary offered by the tag picker.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagExtractor;

impl TagExtractor {
    /// Create an extractor.
    pub fn new() -> Self {
        Self
    }

    /// Every distinct source spelling in the catalog, sorted case-insensitively.
    ///
    /// Deduplication is by exact spelling, so `Ink` and `ink` both appear as
    /// labels while sharing the matching value `ink`.
    pub fn extract(&self, catalog: &Catalog) -> Vec<TagOption> {
        let mut seen = HashSet::new();
        let mut options: Vec<TagOption> = catalog
            .iter()
            .flat_map(raw_tags)
            .filter(|tag| seen.insert(*tag))
            .map(TagOption::new)
            .collect();

        options.sort_by(|a, b| collate(&a.label, &b.label));
        debug!(tags = options.len(), "extracted tag vocabulary");
        options
    }
}

/// Narrow a vocabulary to labels containing `query`, ignoring case.
///
/// A blank query keeps every option. Vocabulary order is preserved.
pub fn search_tags<'a>(options: &'a [TagOption], query: &str) -> Vec<&'a TagOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|option| needle.is_empty() || option.label.to_lowercase().contains(&needle))
        .collect()
}
