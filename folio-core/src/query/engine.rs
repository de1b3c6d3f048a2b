//! Gallery filter state and the query it drives.
//!
//! One [`GalleryQueryEngine`] belongs to one gallery view. The view mutates
//! its [`FilterState`] through the setters and asks for
//! [`current_results`](GalleryQueryEngine::current_results) whenever it
//! re-renders; nothing is cached between calls.

use std::collections::BTreeSet;

use folio_model::{Catalog, CatalogEntry, GallerySort, MediumFilter};
use serde::Serialize;
use tracing::debug;

use super::dates::DateResolver;
use super::filtering::{CatalogFilter, normalize_required_tags};
use super::sorting::CatalogSorter;
use super::text::normalize_tag;

/// Current gallery selections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    /// Medium facet; `all` when unset.
    #[serde(serialize_with = "serialize_medium")]
    pub medium: MediumFilter,
    /// Lower-cased selected tags; all must match.
    pub tags: BTreeSet<String>,
    /// Result order.
    pub sort: GallerySort,
}

fn serialize_medium<S>(medium: &MediumFilter, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(medium.as_str())
}

/// Answers "what does the gallery show right now".
#[derive(Debug, Clone, Default)]
pub struct GalleryQueryEngine {
    state: FilterState,
    filter: CatalogFilter,
    sorter: CatalogSorter,
}

impl GalleryQueryEngine {
    /// Engine with the default selections.
    pub fn new() -> Self {
        Self::with_state(FilterState::default())
    }

    /// Engine starting from `state`.
    pub fn with_state(state: FilterState) -> Self {
        Self {
            state,
            filter: CatalogFilter::new(),
            sorter: CatalogSorter::new(DateResolver::new()),
        }
    }

    /// Current selections.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Select a medium; blank or `all` clears it.
    pub fn set_medium(&mut self, value: &str) {
        self.state.medium = MediumFilter::parse(value);
    }

    /// Replace the selected tags. Blank tags are ignored.
    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.tags = normalize_required_tags(tags);
    }

    /// Flip one tag's selection; returns whether it is now selected.
    pub fn toggle_tag(&mut self, tag: &str) -> bool {
        let Some(tag) = normalize_tag(tag) else {
            return false;
        };
        if self.state.tags.remove(&tag) {
            false
        } else {
            self.state.tags.insert(tag);
            true
        }
    }

    /// Deselect every tag.
    pub fn clear_tags(&mut self) {
        self.state.tags.clear();
    }

    /// Select the sort order.
    pub fn set_sort(&mut self, sort: GallerySort) {
        self.state.sort = sort;
    }

    /// Restore `all` / no tags / `newest`.
    pub fn reset(&mut self) {
        self.state = FilterState::default();
    }

    /// Filter then sort `catalog` with the current state.
    pub fn current_results<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CatalogEntry> {
        let matched = self
            .filter
            .apply(catalog, &self.state.medium, &self.state.tags);
        let results = self.sorter.sort(&matched, self.state.sort);
        debug!(
            medium = %self.state.medium,
            tags = ?self.state.tags,
            sort = %self.state.sort,
            shown = results.len(),
            total = catalog.len(),
            "recomputed gallery results"
        );
        results
    }
}
