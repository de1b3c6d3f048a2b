//! End-to-end coverage for catalog loading and the gallery/detail queries.

use std::fs;

use folio_core::query::prelude::*;
use folio_core::source::{load_catalog, load_or_empty};
use folio_core::{CatalogError, LoadStatus};
use folio_model::{Catalog, CatalogEntry};
use tempfile::tempdir;

const GALLERY_DATA: &str = r#"
// Gallery data. Newest pieces go first.
{
  "artworks": [
    {
      "id": 1,
      "title": "Harbor at Dusk",
      "category": "painting landscape",
      "medium": "Oil",
      "tags": ["Harbor", "evening"],
      "createdDate": "6/14/2023",
      "relatedTo": ["3"]
    },
    // sketchbook scans
    {
      "id": "2",
      "title": "figure study",
      "category": "sketch",
      "tags": ["Figure"],
      "yearCreated": 2022
    },
    {
      "id": "3",
      "title": "Blue Harbor",
      "medium": "Digital",
      "tags": ["harbor"],
      "yearCreated": "2023"
    },
    {
      "id": "4",
      "title": "Untitled",
      "tags": []
    }
  ]
}
"#;

fn titles(entries: &[&CatalogEntry]) -> Vec<String> {
    entries.iter().map(|entry| entry.title.clone()).collect()
}

fn gallery() -> Catalog {
    folio_core::source::parse_catalog(GALLERY_DATA).expect("gallery data should parse")
}

#[test]
fn loads_commented_catalog_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gallery-data.json");
    fs::write(&path, GALLERY_DATA).expect("write catalog");

    let catalog = load_catalog(&path).expect("load catalog");
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.entries()[0].id, "1");
    assert_eq!(catalog.entries()[1].year_created.as_deref(), Some("2022"));

    let load = load_or_empty(&path);
    assert_eq!(load.status, LoadStatus::Loaded { entries: 4 });
}

#[test]
fn broken_catalog_degrades_to_empty_with_status() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("gallery-data.json");
    fs::write(&path, "{ \"artworks\": [ { \"id\": \"1\" ").expect("write catalog");

    assert!(matches!(
        load_catalog(&path),
        Err(CatalogError::CatalogUnavailable { .. })
    ));

    let load = load_or_empty(&path);
    assert!(!load.is_loaded());
    assert!(load.catalog.is_empty());

    let engine = GalleryQueryEngine::new();
    assert!(engine.current_results(&load.catalog).is_empty());
    assert!(TagExtractor::new().extract(&load.catalog).is_empty());
}

#[test]
fn gallery_defaults_to_newest_with_undated_last() {
    let catalog = gallery();
    let shown = GalleryQueryEngine::new().current_results(&catalog);
    assert_eq!(
        titles(&shown),
        vec!["Harbor at Dusk", "Blue Harbor", "figure study", "Untitled"]
    );
}

#[test]
fn medium_tag_and_sort_compose() {
    let catalog = gallery();
    let mut engine = GalleryQueryBuilder::new()
        .tag("HARBOR")
        .sort_by(GallerySort::TitleAsc)
        .into_engine();

    assert_eq!(
        titles(&engine.current_results(&catalog)),
        vec!["Blue Harbor", "Harbor at Dusk"]
    );

    engine.set_medium("painting");
    assert_eq!(titles(&engine.current_results(&catalog)), vec!["Harbor at Dusk"]);

    engine.set_medium("all");
    engine.clear_tags();
    engine.set_sort(GallerySort::parse("title-desc"));
    assert_eq!(
        titles(&engine.current_results(&catalog)),
        vec!["Untitled", "Harbor at Dusk", "figure study", "Blue Harbor"]
    );
}

#[test]
fn vocabulary_and_search() {
    let catalog = gallery();
    let options = TagExtractor::new().extract(&catalog);
    let labels: Vec<_> = options.iter().map(|option| option.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["evening", "Figure", "harbor", "Harbor", "landscape", "painting", "sketch"]
    );

    let found: Vec<_> = search_tags(&options, "harb")
        .into_iter()
        .map(|option| option.value.as_str())
        .collect();
    assert_eq!(found, vec!["harbor", "harbor"]);
}

#[test]
fn detail_page_prefers_curated_relations() {
    let catalog = gallery();
    let detail = lookup_detail(&catalog, "1", DEFAULT_RELATED_LIMIT).expect("known id");

    let related: Vec<_> = detail
        .related
        .iter()
        .map(|candidate| (candidate.entry.id.as_str(), candidate.score, candidate.origin))
        .collect();
    // The sketch only earns the adjacent-year point.
    assert_eq!(
        related,
        vec![
            ("3", CURATED_SCORE, RelationOrigin::Curated),
            ("2", 1, RelationOrigin::Computed),
        ]
    );

    let json = serde_json::to_value(&detail).expect("serialize detail");
    assert_eq!(json["entry"]["title"], "Harbor at Dusk");
    assert_eq!(json["related"][0]["origin"], "curated");

    assert!(matches!(
        lookup_detail(&catalog, "99", DEFAULT_RELATED_LIMIT),
        Err(CatalogError::EntryNotFound(_))
    ));
}

#[test]
fn computed_relations_for_the_sketch() {
    let catalog = gallery();
    let sketch = catalog.find("2").expect("sketch exists");

    let ranked = RelatedArtworkRanker::default().rank_scored(sketch, &catalog);
    let scored: Vec<_> = ranked
        .iter()
        .map(|candidate| (candidate.entry.id.as_str(), candidate.score))
        .collect();
    // Adjacent year only; the newer date wins the tie.
    assert_eq!(scored, vec![("1", 1), ("3", 1)]);
}

#[test]
fn featured_row_shows_newest_three() {
    let catalog = gallery();
    let ids: Vec<_> = featured(&catalog, DEFAULT_FEATURED_LIMIT)
        .into_iter()
        .map(|entry| entry.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3", "2"]);
}
