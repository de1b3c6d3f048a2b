//! Home-page featured works: the newest few artworks.

use folio_model::{Catalog, CatalogEntry, GallerySort};

use super::dates::DateResolver;
use super::sorting::CatalogSorter;

/// Number of cards in the featured row.
pub const DEFAULT_FEATURED_LIMIT: usize = 3;

/// The `limit` newest entries; equal dates keep catalog order.
pub fn featured(catalog: &Catalog, limit: usize) -> Vec<&CatalogEntry> {
    let entries: Vec<&CatalogEntry> = catalog.iter().collect();
    let mut newest = CatalogSorter::new(DateResolver::new()).sort(&entries, GallerySort::Newest);
    newest.truncate(limit);
    newest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_newest_entries() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("1", "a").with_year("2019"),
            CatalogEntry::new("2", "b").with_created_date("4/2/2024"),
            CatalogEntry::new("3", "c"),
            CatalogEntry::new("4", "d").with_year("2022"),
        ]);

        let ids: Vec<_> = featured(&catalog, DEFAULT_FEATURED_LIMIT)
            .into_iter()
            .map(|entry| entry.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "4", "1"]);
    }

    #[test]
    fn small_catalogs_return_everything() {
        let catalog = Catalog::new(vec![CatalogEntry::new("1", "a")]);
        assert_eq!(featured(&catalog, 5).len(), 1);
        assert!(featured(&Catalog::empty(), 3).is_empty());
    }
}
