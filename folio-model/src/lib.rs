//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod entry;
pub mod filter_types;
pub mod ids;
#[cfg(feature = "serde")]
mod lenient;

pub use catalog::Catalog;
#[cfg(feature = "serde")]
pub use catalog::GalleryDocument;
pub use entry::CatalogEntry;
pub use filter_types::{GallerySort, MediumFilter, TagOption};
pub use ids::EntryId;
