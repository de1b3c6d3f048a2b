use crate::ids::EntryId;

/// One artwork record as authored in the catalog file.
///
/// Only `id` is structurally meaningful. Every other field may be missing and
/// degrades to an empty value, which keeps a single sloppy record from
/// hiding the rest of the gallery.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CatalogEntry {
    #[cfg_attr(feature = "serde", serde(default))]
    pub id: EntryId,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::lenient::optional_text")
    )]
    pub title: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "crate::lenient::optional_text")
    )]
    pub description: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub image_path: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub thumbnail_url: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub full_image_url: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::scalar_list",
            skip_serializing_if = "Vec::is_empty"
        )
    )]
    pub tags: Vec<String>,
    /// Legacy space separated tag tokens.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub category: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub medium: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub year_created: Option<String>,
    /// Takes precedence over `year_created` when both are present.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub created_date: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::optional_scalar",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub dimensions: Option<String>,
    /// Curated related entries; always ranked ahead of computed matches.
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "crate::lenient::id_list",
            skip_serializing_if = "Vec::is_empty"
        )
    )]
    pub related_to: Vec<EntryId>,
}

impl CatalogEntry {
    pub fn new(id: impl Into<EntryId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year_created = Some(year.into());
        self
    }

    pub fn with_created_date(mut self, date: impl Into<String>) -> Self {
        self.created_date = Some(date.into());
        self
    }

    pub fn with_related<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EntryId>,
    {
        self.related_to = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Legacy category tokens split on whitespace, case preserved.
    pub fn category_tokens(&self) -> impl Iterator<Item = &str> {
        self.category
            .as_deref()
            .into_iter()
            .flat_map(str::split_whitespace)
    }

    /// First image reference available, in display preference order.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_path
            .as_deref()
            .or(self.full_image_url.as_deref())
            .or(self.thumbnail_url.as_deref())
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_degrade_to_defaults() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{ "id": "a1" }"#).unwrap();

        assert_eq!(entry.id, "a1");
        assert!(entry.title.is_empty());
        assert!(entry.tags.is_empty());
        assert!(entry.related_to.is_empty());
        assert_eq!(entry.created_date, None);
    }

    #[test]
    fn numeric_ids_and_years_are_read_as_text() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{ "id": 7, "yearCreated": 2021, "relatedTo": [3, "x9"], "tags": null }"#,
        )
        .unwrap();

        assert_eq!(entry.id, "7");
        assert_eq!(entry.year_created.as_deref(), Some("2021"));
        assert_eq!(
            entry.related_to,
            vec![EntryId::new("3"), EntryId::new("x9")]
        );
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn mistyped_fields_degrade_instead_of_failing() {
        let entry: CatalogEntry = serde_json::from_str(
            r#"{
                "id": null,
                "title": ["not", "a", "title"],
                "tags": "sketch  ink",
                "medium": 5,
                "category": { "nested": true },
                "relatedTo": [null, "", 4, ["x"]],
                "createdDate": false
            }"#,
        )
        .unwrap();

        assert!(entry.id.is_empty());
        assert!(entry.title.is_empty());
        assert_eq!(entry.tags, vec!["sketch", "ink"]);
        assert_eq!(entry.medium.as_deref(), Some("5"));
        assert_eq!(entry.category, None);
        assert_eq!(entry.related_to, vec![EntryId::new("4")]);
        assert_eq!(entry.created_date, None);
    }

    #[test]
    fn tag_lists_keep_only_scalar_items() {
        let entry: CatalogEntry =
            serde_json::from_str(r#"{ "id": "1", "tags": [null, "ink", 2024, {}] }"#)
                .unwrap();
        assert_eq!(entry.tags, vec!["ink", "2024"]);
    }

    #[test]
    fn category_tokens_split_on_any_whitespace() {
        let entry =
            CatalogEntry::new("1", "t").with_category("digital  sketch\tink");
        let tokens: Vec<_> = entry.category_tokens().collect();
        assert_eq!(tokens, vec!["digital", "sketch", "ink"]);
    }
}
