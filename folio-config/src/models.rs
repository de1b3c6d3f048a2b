//! Configuration model read from `folio.toml`.

use std::path::PathBuf;

use folio_core::query::prelude::{DEFAULT_FEATURED_LIMIT, DEFAULT_RELATED_LIMIT};
use folio_model::GallerySort;
use serde::{Deserialize, Serialize};

/// Location of the catalog file relative to the site root.
pub const DEFAULT_CATALOG_PATH: &str = "resources/data/gallery-data.json";

/// Source that produced the gallery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults; no file was read.
    #[default]
    Default,
    /// Path taken from `FOLIO_CONFIG`.
    EnvPath(PathBuf),
    /// Path passed explicitly (`--config`).
    File(PathBuf),
}

/// Gallery settings read from `folio.toml`.
///
/// Every key is optional; missing keys fall back to the values the site has
/// always used.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Catalog document to load. `FOLIO_CATALOG_PATH` overrides it.
    pub catalog_path: PathBuf,
    /// Number of related artworks on the detail page.
    pub related_limit: usize,
    /// Number of cards in the home-page featured row.
    pub featured_limit: usize,
    /// Sort applied when the gallery first renders.
    pub default_sort: GallerySort,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            related_limit: DEFAULT_RELATED_LIMIT,
            featured_limit: DEFAULT_FEATURED_LIMIT,
            default_sort: GallerySort::Newest,
        }
    }
}

impl GalleryConfig {
    /// Parse `folio.toml` contents.
    pub fn parse_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = GalleryConfig::parse_toml("related_limit = 5\n").unwrap();
        assert_eq!(config.related_limit, 5);
        assert_eq!(config.featured_limit, 3);
        assert_eq!(config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(config.default_sort, GallerySort::Newest);
    }

    #[test]
    fn sort_keys_use_gallery_spelling() {
        let config = GalleryConfig::parse_toml("default_sort = \"title-asc\"\n").unwrap();
        assert_eq!(config.default_sort, GallerySort::TitleAsc);

        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains("default_sort = \"title-asc\""));
    }
}
