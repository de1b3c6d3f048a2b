//! Fluent construction of gallery filter state.

use folio_model::{GallerySort, MediumFilter};

use super::engine::{FilterState, GalleryQueryEngine};
use super::filtering::normalize_required_tags;
use super::text::normalize_tag;

/// Fluent API for building gallery filter state
#[derive(Debug, Clone, Default)]
pub struct GalleryQueryBuilder {
    state: FilterState,
}

impl GalleryQueryBuilder {
    /// Create a new builder with default selections
    pub fn new() -> Self {
        Self::default()
    }

    // === Filter methods ===

    /// Filter by medium; `all` or blank clears the medium filter
    pub fn medium(mut self, medium: &str) -> Self {
        self.state.medium = MediumFilter::parse(medium);
        self
    }

    /// Require a tag
    pub fn tag(mut self, tag: &str) -> Self {
        if let Some(tag) = normalize_tag(tag) {
            self.state.tags.insert(tag);
        }
        self
    }

    /// Replace the required tags
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state.tags = normalize_required_tags(tags);
        self
    }

    // === Sort methods ===

    /// Set the sort order
    pub fn sort_by(mut self, sort: GallerySort) -> Self {
        self.state.sort = sort;
        self
    }

    /// Convenience for the title A-Z order
    pub fn alphabetical(self) -> Self {
        self.sort_by(GallerySort::TitleAsc)
    }

    /// Build the filter state
    pub fn build(self) -> FilterState {
        self.state
    }

    /// Build an engine owning the filter state
    pub fn into_engine(self) -> GalleryQueryEngine {
        GalleryQueryEngine::with_state(self.state)
    }
}
