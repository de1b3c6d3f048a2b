//! Medium and tag filtering over a catalog.
//!
//! The two facets deliberately match differently:
//!
//! - **medium** is broad: a substring of the legacy `category` string, or an
//!   exact (case-insensitive) `medium` value or list tag.
//! - **tags** are precise: every selected tag must equal one of the entry's
//!   merged tags.
//!
//! Legacy records describe their medium inconsistently, which is what the
//! loose medium rule absorbs. Keep the asymmetry unless product asks for a
//! change; it is visible in which artworks the gallery shows.

use std::collections::BTreeSet;

use folio_model::{CatalogEntry, MediumFilter};
use tracing::debug;

use super::tags::entry_tag_set;
use super::text::normalize_tag;

/// Normalise selected tags into the lower-cased set the filter expects.
pub fn normalize_required_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| normalize_tag(tag.as_ref()))
        .collect()
}

/// Loose medium match used by the gallery's medium buttons.
pub fn matches_medium(entry: &CatalogEntry, medium: &MediumFilter) -> bool {
    let token = match medium {
        MediumFilter::All => return true,
        MediumFilter::Only(token) => token.trim().to_lowercase(),
    };

    let in_category = entry
        .category
        .as_deref()
        .is_some_and(|category| category.to_lowercase().contains(&token));
    let is_medium = entry
        .medium
        .as_deref()
        .is_some_and(|value| value.trim().to_lowercase() == token);
    let is_tag = entry
        .tags
        .iter()
        .any(|tag| tag.trim().to_lowercase() == token);

    in_category || is_medium || is_tag
}

/// Every required tag must be present in the entry's merged tag set.
///
/// `required` is expected to be normalised with [`normalize_required_tags`].
pub fn matches_tags(entry: &CatalogEntry, required: &BTreeSet<String>) -> bool {
    if required.is_empty() {
        return true;
    }
    let present = entry_tag_set(entry);
    required.iter().all(|tag| present.contains(tag))
}

/// Applies medium and tag constraints, preserving catalog order.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogFilter;

impl CatalogFilter {
    /// Create a filter.
    pub fn new() -> Self {
        Self
    }

    /// Entries satisfying both the medium and the tag constraint.
    pub fn apply<'a, I>(
        &self,
        entries: I,
        medium: &MediumFilter,
        required: &BTreeSet<String>,
    ) -> Vec<&'a CatalogEntry>
    where
        I: IntoIterator<Item = &'a CatalogEntry>,
    {
        let matched: Vec<&CatalogEntry> = entries
            .into_iter()
            .filter(|entry| matches_medium(entry, medium))
            .filter(|entry| matches_tags(entry, required))
            .collect();

        debug!(
            medium = %medium,
            tags = required.len(),
            matched = matched.len(),
            "applied catalog filter"
        );
        matched
    }
}
