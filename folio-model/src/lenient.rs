//! Tolerant decoding for hand-edited catalog files.
//!
//! A field holding the wrong JSON type degrades to its default instead of
//! failing the entry, and with it the whole catalog.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::ids::EntryId;

/// Any JSON value, read back as text where that makes sense.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum Loose {
    Text(String),
    Integer(i64),
    Float(f64),
    List(Vec<Loose>),
    Other(IgnoredAny),
}

impl Loose {
    /// Scalars as text; lists, objects, booleans and null yield `None`.
    pub(crate) fn into_text(self) -> Option<String> {
        match self {
            Loose::Text(text) => Some(text),
            Loose::Integer(value) => Some(value.to_string()),
            Loose::Float(value) if value.fract() == 0.0 => {
                Some(format!("{value:.0}"))
            }
            Loose::Float(value) => Some(value.to_string()),
            Loose::List(_) | Loose::Other(_) => None,
        }
    }

    /// Lists keep their scalar items; a string is split on whitespace the
    /// way the legacy `category` field is.
    pub(crate) fn into_list(self) -> Vec<String> {
        match self {
            Loose::List(items) => {
                items.into_iter().filter_map(Loose::into_text).collect()
            }
            Loose::Text(text) => {
                text.split_whitespace().map(str::to_string).collect()
            }
            scalar @ (Loose::Integer(_) | Loose::Float(_)) => {
                scalar.into_text().into_iter().collect()
            }
            Loose::Other(_) => Vec::new(),
        }
    }
}

pub(crate) fn optional_scalar<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)
        .map(|value| value.and_then(Loose::into_text))
}

pub(crate) fn scalar_list<'de, D>(
    deserializer: D,
) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Loose>::deserialize(deserializer)
        .map(|value| value.map(Loose::into_list).unwrap_or_default())
}

/// Curated relation ids; blank and non-scalar items are dropped.
pub(crate) fn id_list<'de, D>(
    deserializer: D,
) -> Result<Vec<EntryId>, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_list(deserializer).map(|ids| {
        ids.into_iter()
            .filter(|id| !id.trim().is_empty())
            .map(EntryId::from)
            .collect()
    })
}

pub(crate) fn optional_text<'de, D>(
    deserializer: D,
) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional_scalar(deserializer).map(Option::unwrap_or_default)
}
