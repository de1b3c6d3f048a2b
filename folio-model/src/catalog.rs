use crate::entry::CatalogEntry;

/// Ordered artwork collection in authoring order.
///
/// A catalog is read-only once loaded; queries hand back fresh vectors and
/// never reorder the catalog itself.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by id. The first authored entry wins on duplicates.
    pub fn find(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn into_entries(self) -> Vec<CatalogEntry> {
        self.entries
    }
}

impl From<Vec<CatalogEntry>> for Catalog {
    fn from(entries: Vec<CatalogEntry>) -> Self {
        Self::new(entries)
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// On-disk shape of a gallery data file.
///
/// The site has always written `{ "artworks": [...] }`; a bare array is
/// accepted as well. Loaders that decode entries one at a time read the
/// document with raw JSON values as `T`.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum GalleryDocument<T = CatalogEntry> {
    Wrapped { artworks: Vec<T> },
    Bare(Vec<T>),
}

#[cfg(feature = "serde")]
impl<T> GalleryDocument<T> {
    /// The document's records in authoring order.
    pub fn into_records(self) -> Vec<T> {
        match self {
            GalleryDocument::Wrapped { artworks } => artworks,
            GalleryDocument::Bare(records) => records,
        }
    }
}

#[cfg(feature = "serde")]
impl From<GalleryDocument> for Catalog {
    fn from(document: GalleryDocument) -> Self {
        Catalog::new(document.into_records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_prefers_first_duplicate() {
        let catalog = Catalog::new(vec![
            CatalogEntry::new("1", "First"),
            CatalogEntry::new("1", "Second"),
        ]);

        assert_eq!(catalog.find("1").map(|e| e.title.as_str()), Some("First"));
        assert!(catalog.find("2").is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn both_document_shapes_decode() {
        let wrapped: GalleryDocument =
            serde_json::from_str(r#"{ "artworks": [{ "id": "a" }] }"#).unwrap();
        let bare: GalleryDocument =
            serde_json::from_str(r#"[{ "id": "a" }, { "id": "b" }]"#).unwrap();

        assert_eq!(Catalog::from(wrapped).len(), 1);
        assert_eq!(Catalog::from(bare).len(), 2);
    }
}
