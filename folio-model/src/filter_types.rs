use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Coarse medium facet selected in the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum MediumFilter {
    #[default]
    All,
    /// A specific medium token, stored as typed by the caller.
    Only(String),
}

impl MediumFilter {
    pub const ALL: &'static str = "all";

    /// Interpret a UI filter value. Blank input and `all` select everything.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(Self::ALL) {
            MediumFilter::All
        } else {
            MediumFilter::Only(trimmed.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, MediumFilter::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            MediumFilter::All => Self::ALL,
            MediumFilter::Only(token) => token,
        }
    }
}

impl FromStr for MediumFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for MediumFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for MediumFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery ordering selected by the sort dropdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String", into = "String"))]
pub enum GallerySort {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
    /// Catalog authoring order. Any unrecognised key lands here.
    Authored,
}

impl GallerySort {
    pub fn all() -> &'static [GallerySort] {
        use GallerySort::*;
        &[Newest, Oldest, TitleAsc, TitleDesc, Authored]
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "newest" => GallerySort::Newest,
            "oldest" => GallerySort::Oldest,
            "title-asc" => GallerySort::TitleAsc,
            "title-desc" => GallerySort::TitleDesc,
            _ => GallerySort::Authored,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GallerySort::Newest => "newest",
            GallerySort::Oldest => "oldest",
            GallerySort::TitleAsc => "title-asc",
            GallerySort::TitleDesc => "title-desc",
            GallerySort::Authored => "authored",
        }
    }
}

impl FromStr for GallerySort {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for GallerySort {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<GallerySort> for String {
    fn from(value: GallerySort) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for GallerySort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the tag vocabulary offered to the filter UI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagOption {
    /// Source spelling, used as the checkbox label.
    pub label: String,
    /// Lower-cased form used for matching.
    pub value: String,
}

impl TagOption {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let value = label.to_lowercase();
        Self { label, value }
    }
}
