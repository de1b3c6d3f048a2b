//! Field marker types for compile-time safe sorting
//!
//! These small types represent the fields the gallery can sort by. Each
//! implements [`SortFieldMarker`] to specify its key type.

use folio_model::CatalogEntry;

use super::keys::{DateKey, TitleKey};
use super::traits::{SortFieldMarker, SortableBy};
use crate::query::dates::DateResolver;

/// Sort by title (alphabetical)
#[derive(Copy, Clone, Debug, Default)]
pub struct TitleField;

impl SortFieldMarker for TitleField {
    type Key = TitleKey;
    const ID: &'static str = "title";
}

/// Sort by resolved creation date
#[derive(Copy, Clone, Debug, Default)]
pub struct CreatedField {
    /// Resolver used to extract the key.
    pub dates: DateResolver,
}

impl CreatedField {
    /// Create the field marker.
    pub fn new(dates: DateResolver) -> Self {
        Self { dates }
    }
}

impl SortFieldMarker for CreatedField {
    type Key = DateKey;
    const ID: &'static str = "created";
}

impl SortableBy<TitleField> for CatalogEntry {
    fn extract_key(&self, _field: &TitleField) -> TitleKey {
        TitleKey::new(self.title.as_str())
    }
}

impl SortableBy<CreatedField> for CatalogEntry {
    fn extract_key(&self, field: &CreatedField) -> DateKey {
        DateKey::new(field.dates.resolve(self))
    }
}
