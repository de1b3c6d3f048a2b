use std::borrow::Borrow;
use std::fmt;

/// Opaque artwork identifier.
///
/// Catalogs authored by hand mix quoted and bare numeric ids, so both forms
/// deserialize into the same textual id.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntryId(String);

impl EntryId {
    pub fn new(value: impl Into<String>) -> Self {
        EntryId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        EntryId(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        EntryId(value)
    }
}

impl PartialEq<str> for EntryId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EntryId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <crate::lenient::Loose as serde::Deserialize>::deserialize(deserializer)
            .map(|value| EntryId(value.into_text().unwrap_or_default()))
    }
}
