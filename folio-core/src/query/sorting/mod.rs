//! Sorting for gallery results
//!
//! This module provides:
//! - Core traits for sortable entities
//! - Field marker types for compile-time safe sorting
//! - Sort key extraction and comparison
//! - Strategy pattern for composable sorting
//! - [`CatalogSorter`], which maps a [`GallerySort`] onto a strategy

pub mod fields;
pub mod keys;
pub mod strategy;
pub mod traits;
pub mod utils;

#[cfg(test)]
mod tests;

pub use fields::*;
pub use keys::*;
pub use strategy::*;
pub use traits::*;

use folio_model::{CatalogEntry, GallerySort};
use tracing::debug;

use crate::query::dates::DateResolver;

/// Orders catalog entries by one of the gallery sort keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct CatalogSorter {
    dates: DateResolver,
}

impl CatalogSorter {
    /// Create a sorter resolving dates with `dates`.
    pub fn new(dates: DateResolver) -> Self {
        Self { dates }
    }

    /// Strategy implementing `key` for borrowed entries.
    pub fn strategy_for<'a>(
        &self,
        key: GallerySort,
    ) -> Box<dyn SortStrategy<&'a CatalogEntry> + 'a> {
        type Entry<'e> = &'e CatalogEntry;
        let created = CreatedField::new(self.dates);
        match key {
            GallerySort::Newest => {
                Box::new(FieldSort::<Entry<'a>, _>::new(created, true))
            }
            GallerySort::Oldest => {
                Box::new(FieldSort::<Entry<'a>, _>::new(created, false))
            }
            GallerySort::TitleAsc => {
                Box::new(FieldSort::<Entry<'a>, _>::new(TitleField, false))
            }
            GallerySort::TitleDesc => {
                Box::new(FieldSort::<Entry<'a>, _>::new(TitleField, true))
            }
            GallerySort::Authored => Box::new(Unsorted),
        }
    }

    /// Return a freshly ordered copy of `entries`; the input is untouched.
    pub fn sort<'a>(
        &self,
        entries: &[&'a CatalogEntry],
        key: GallerySort,
    ) -> Vec<&'a CatalogEntry> {
        let mut sorted = entries.to_vec();
        let strategy = self.strategy_for(key);
        strategy.sort(&mut sorted);
        debug!(
            sort = %key,
            strategy = strategy.describe(),
            entries = sorted.len(),
            "sorted catalog entries"
        );
        sorted
    }
}
