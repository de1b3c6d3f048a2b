//! Intentional query surface consumed by page controllers and the CLI.

pub use super::builder::GalleryQueryBuilder;
pub use super::dates::DateResolver;
pub use super::detail::{ArtworkDetail, lookup_detail};
pub use super::engine::{FilterState, GalleryQueryEngine};
pub use super::featured::{DEFAULT_FEATURED_LIMIT, featured};
pub use super::filtering::CatalogFilter;
pub use super::related::{
    CURATED_SCORE, DEFAULT_RELATED_LIMIT, RelatedArtworkRanker,
    RelationOrigin, ScoredCandidate,
};
pub use super::sorting::CatalogSorter;
pub use super::tags::{TagExtractor, search_tags};
pub use folio_model::{GallerySort, MediumFilter, TagOption};
