//! Catalog queries: everything the gallery, detail and home pages ask of a
//! loaded catalog.

pub mod builder;
pub mod dates;
pub mod detail;
pub mod engine;
pub mod featured;
pub mod filtering;
pub mod prelude;
pub mod related;
pub mod sorting;
pub mod tags;
pub mod text;

pub use builder::GalleryQueryBuilder;
pub use dates::DateResolver;
pub use detail::{ArtworkDetail, lookup_detail};
pub use engine::{FilterState, GalleryQueryEngine};
pub use featured::featured;
pub use filtering::CatalogFilter;
pub use related::{RelatedArtworkRanker, RelationOrigin, ScoredCandidate};
pub use sorting::CatalogSorter;
pub use tags::{TagExtractor, search_tags};
