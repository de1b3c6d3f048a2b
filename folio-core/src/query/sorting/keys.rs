//! Sort key types for comparing catalog entries
//!
//! These wrap the values extracted from entries. Missing data never reaches
//! a key: titles default to empty and dates to the epoch before wrapping.

use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::query::text::collate;

/// Display title compared with case-insensitive collation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TitleKey(String);

impl TitleKey {
    /// Wrap a title.
    pub fn new(value: impl Into<String>) -> Self {
        TitleKey(value.into())
    }
}

impl Ord for TitleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        collate(&self.0, &other.0)
    }
}

impl PartialOrd for TitleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Resolved creation instant
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub struct DateKey(NaiveDateTime);

impl DateKey {
    /// Wrap a resolved instant.
    pub fn new(value: NaiveDateTime) -> Self {
        DateKey(value)
    }

    /// The wrapped instant.
    pub fn instant(&self) -> NaiveDateTime {
        self.0
    }
}
