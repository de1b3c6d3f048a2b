//! Tests for sorting strategy implementations

#[cfg(test)]
mod tests {
    use crate::query::dates::DateResolver;
    use crate::query::sorting::{
        CatalogSorter, CreatedField, FieldSort, SortStrategy, TitleField, Unsorted,
    };
    use folio_model::{CatalogEntry, GallerySort};

    fn create_test_entry(id: &str, title: &str, date: Option<&str>) -> CatalogEntry {
        let entry = CatalogEntry::new(id, title);
        match date {
            Some(date) => entry.with_created_date(date),
            None => entry,
        }
    }

    fn titles(entries: &[&CatalogEntry]) -> Vec<String> {
        entries.iter().map(|entry| entry.title.clone()).collect()
    }

    #[test]
    fn test_field_sort_by_title() {
        let entries = [
            create_test_entry("3", "Charlie", None),
            create_test_entry("1", "alice", None),
            create_test_entry("2", "Bob", None),
        ];
        let mut refs: Vec<&CatalogEntry> = entries.iter().collect();

        let sort = FieldSort::<&CatalogEntry, _>::new(TitleField, false);
        sort.sort(&mut refs);

        assert_eq!(titles(&refs), vec!["alice", "Bob", "Charlie"]);
    }

    #[test]
    fn test_field_sort_reverse() {
        let entries = [
            create_test_entry("1", "Alpha", None),
            create_test_entry("2", "Beta", None),
            create_test_entry("3", "Gamma", None),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();

        let sorted = CatalogSorter::default().sort(&refs, GallerySort::TitleDesc);
        assert_eq!(titles(&sorted), vec!["Gamma", "Beta", "Alpha"]);
        // Non-mutating
        assert_eq!(titles(&refs), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn test_owned_entries_sort_by_date() {
        let mut entries = vec![
            create_test_entry("1", "Old", Some("2001")),
            create_test_entry("2", "New", Some("3/4/2024")),
            create_test_entry("3", "Mid", Some("2015-06-01")),
        ];

        let sort = FieldSort::<CatalogEntry, _>::new(CreatedField::new(DateResolver), false);
        sort.sort(&mut entries);

        let order: Vec<_> = entries.iter().map(|entry| entry.title.as_str()).collect();
        assert_eq!(order, vec!["Old", "Mid", "New"]);
    }

    #[test]
    fn test_newest_puts_undated_last() {
        let entries = [
            create_test_entry("1", "Undated", None),
            create_test_entry("2", "2020", Some("2020")),
            create_test_entry("3", "2023", Some("1/1/2023")),
            create_test_entry("4", "Garbage", Some("not a date")),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();

        let sorted = CatalogSorter::default().sort(&refs, GallerySort::Newest);
        assert_eq!(titles(&sorted), vec!["2023", "2020", "Undated", "Garbage"]);
    }

    #[test]
    fn test_newest_then_oldest_reverses_distinct_dates() {
        let entries = [
            create_test_entry("1", "b", Some("2019")),
            create_test_entry("2", "a", Some("6/1/2021")),
            create_test_entry("3", "c", Some("2020-02-02")),
            create_test_entry("4", "d", None),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();
        let sorter = CatalogSorter::default();

        let newest = sorter.sort(&refs, GallerySort::Newest);
        let oldest = sorter.sort(&newest, GallerySort::Oldest);

        let mut reversed = newest.clone();
        reversed.reverse();
        assert_eq!(titles(&oldest), titles(&reversed));
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let entries = [
            create_test_entry("1", "first", Some("2022")),
            create_test_entry("2", "second", Some("1/1/2022")),
            create_test_entry("3", "third", Some("2022")),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();
        let sorter = CatalogSorter::default();

        assert_eq!(
            titles(&sorter.sort(&refs, GallerySort::Newest)),
            vec!["first", "second", "third"]
        );
        assert_eq!(
            titles(&sorter.sort(&refs, GallerySort::Oldest)),
            vec!["first", "second", "third"]
        );
    }

    #[test]
    fn test_accented_titles_sort_with_base_letters() {
        let entries = [
            create_test_entry("1", "Zebra", None),
            create_test_entry("2", "Éclair", None),
            create_test_entry("3", "apple", None),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();
        let sorter = CatalogSorter::default();

        assert_eq!(
            titles(&sorter.sort(&refs, GallerySort::TitleAsc)),
            vec!["apple", "Éclair", "Zebra"]
        );
        assert_eq!(
            titles(&sorter.sort(&refs, GallerySort::TitleDesc)),
            vec!["Zebra", "Éclair", "apple"]
        );
    }

    #[test]
    fn test_missing_titles_sort_as_empty() {
        let entries = [
            create_test_entry("1", "Zed", None),
            create_test_entry("2", "", None),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();

        let sorted = CatalogSorter::default().sort(&refs, GallerySort::TitleAsc);
        assert_eq!(titles(&sorted), vec!["", "Zed"]);
    }

    #[test]
    fn test_unknown_key_is_identity() {
        let entries = [
            create_test_entry("1", "b", Some("2001")),
            create_test_entry("2", "a", Some("2024")),
        ];
        let refs: Vec<&CatalogEntry> = entries.iter().collect();

        let sorted = CatalogSorter::default().sort(&refs, GallerySort::parse("most-liked"));
        assert_eq!(titles(&sorted), vec!["b", "a"]);

        let mut untouched = refs.clone();
        Unsorted.sort(untouched.as_mut_slice());
        assert_eq!(titles(&untouched), vec!["b", "a"]);
    }
}
