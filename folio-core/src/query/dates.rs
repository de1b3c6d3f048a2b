//! Date resolution for catalog entries.
//!
//! Entries carry dates in whatever shape the author typed: a bare year, a
//! US-style `month/day/year`, an ISO date, or nothing at all. Every shape is
//! resolved to a local wall-clock instant so entries can be compared, and
//! anything unreadable resolves to the Unix epoch so it sorts as oldest.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, Utc};
use folio_model::CatalogEntry;
use once_cell::sync::Lazy;
use regex::Regex;

static BARE_YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})$").expect("bare year regex should compile")
});
static MONTH_DAY_YEAR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})[/-](\d{1,2})[/-](\d{4})$")
        .expect("month/day/year regex should compile")
});
static YEAR_MONTH_DAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})[/-](\d{1,2})[/-](\d{1,2})$")
        .expect("year/month/day regex should compile")
});

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const NAMED_MONTH_FORMATS: &[&str] = &["%B %d, %Y", "%B %d %Y", "%d %B %Y"];

/// The instant assigned to undated or unreadable entries.
pub fn epoch() -> NaiveDateTime {
    DateTime::<Utc>::UNIX_EPOCH.naive_utc()
}

/// Resolves authored date fields into comparable instants.
///
/// `created_date` is preferred over `year_created`. Resolution never fails:
/// parse failures degrade to [`epoch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DateResolver;

impl DateResolver {
    /// Create a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Resolve an entry to the instant used for date ordering.
    pub fn resolve(&self, entry: &CatalogEntry) -> NaiveDateTime {
        self.try_resolve(entry).unwrap_or_else(epoch)
    }

    /// Like [`resolve`](Self::resolve) but reports undated entries as `None`.
    pub fn try_resolve(&self, entry: &CatalogEntry) -> Option<NaiveDateTime> {
        authored_date(entry).and_then(parse_date_text)
    }

    /// Calendar year used for proximity scoring.
    ///
    /// `year_created` is read as an integer first; otherwise the year of a
    /// readable `created_date` is used.
    pub fn year(&self, entry: &CatalogEntry) -> Option<i32> {
        entry
            .year_created
            .as_deref()
            .and_then(|year| year.trim().parse::<i32>().ok())
            .or_else(|| {
                entry
                    .created_date
                    .as_deref()
                    .and_then(parse_date_text)
                    .map(|instant| instant.year())
            })
    }
}

fn authored_date(entry: &CatalogEntry) -> Option<&str> {
    [entry.created_date.as_deref(), entry.year_created.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Parse one authored date string into a local instant at midnight.
pub fn parse_date_text(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Some(caps) = BARE_YEAR_PATTERN.captures(text) {
        let year = caps[1].parse().ok()?;
        return midnight(NaiveDate::from_ymd_opt(year, 1, 1)?);
    }

    if let Some(caps) = MONTH_DAY_YEAR_PATTERN.captures(text) {
        let (month, day, year) =
            (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?);
        return midnight(NaiveDate::from_ymd_opt(year, month, day)?);
    }

    if let Some(caps) = YEAR_MONTH_DAY_PATTERN.captures(text) {
        let (year, month, day) =
            (caps[1].parse().ok()?, caps[2].parse().ok()?, caps[3].parse().ok()?);
        return midnight(NaiveDate::from_ymd_opt(year, month, day)?);
    }

    if let Ok(stamped) = DateTime::parse_from_rfc3339(text) {
        return Some(stamped.with_timezone(&Local).naive_local());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NAMED_MONTH_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(midnight)
        })
}

fn midnight(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
}
