//! Related-artwork ranking for the detail page.
//!
//! Curated relations listed in an entry's `relatedTo` come first. The rest of
//! the catalog is scored by shared tags and creation-year proximity, and
//! candidates with no relevance at all are dropped rather than used as
//! padding.

use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDateTime;
use folio_model::{Catalog, CatalogEntry};
use serde::Serialize;
use tracing::{debug, warn};

use super::dates::DateResolver;
use super::tags::entry_tag_set;

/// Score assigned to curated relations.
pub const CURATED_SCORE: u32 = 10;

/// Number of related artworks shown on the detail page.
pub const DEFAULT_RELATED_LIMIT: usize = 3;

const SHARED_TAG_POINTS: u32 = 2;
const ANY_SHARED_TAG_BONUS: u32 = 1;
const SAME_YEAR_POINTS: u32 = 2;
const ADJACENT_YEAR_POINTS: u32 = 1;

/// Where a candidate's relevance came from. Curated orders before computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationOrigin {
    /// Listed in the focal entry's `relatedTo`.
    Curated,
    /// Scored from shared tags and year proximity.
    Computed,
}

/// A related entry with its relevance score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate<'a> {
    /// The related artwork.
    pub entry: &'a CatalogEntry,
    /// Relevance; curated relations score [`CURATED_SCORE`].
    pub score: u32,
    /// Whether the relation was curated or computed.
    pub origin: RelationOrigin,
    #[serde(skip)]
    instant: NaiveDateTime,
}

/// Ranks the catalog by relevance to a focal entry.
#[derive(Debug, Clone, Copy)]
pub struct RelatedArtworkRanker {
    dates: DateResolver,
    limit: usize,
}

impl Default for RelatedArtworkRanker {
    fn default() -> Self {
        Self::new(DateResolver)
    }
}

impl RelatedArtworkRanker {
    /// Ranker returning up to [`DEFAULT_RELATED_LIMIT`] entries.
    pub fn new(dates: DateResolver) -> Self {
        Self {
            dates,
            limit: DEFAULT_RELATED_LIMIT,
        }
    }

    /// Change the number of entries returned.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Maximum number of entries returned.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Up to `limit` related entries, most relevant first.
    pub fn rank<'a>(
        &self,
        focal: &CatalogEntry,
        catalog: &'a Catalog,
    ) -> Vec<&'a CatalogEntry> {
        self.rank_scored(focal, catalog)
            .into_iter()
            .map(|candidate| candidate.entry)
            .collect()
    }

    /// Like [`rank`](Self::rank) but keeps scores and origins.
    pub fn rank_scored<'a>(
        &self,
        focal: &CatalogEntry,
        catalog: &'a Catalog,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut candidates = self.curated(focal, catalog);
        let seeded: HashSet<&str> = candidates
            .iter()
            .map(|candidate| candidate.entry)
            .map(|entry| entry.id.as_str())
            .collect();

        let focal_tags = entry_tag_set(focal);
        let focal_year = self.dates.year(focal);

        for entry in catalog {
            if entry.id == focal.id || seeded.contains(entry.id.as_str()) {
                continue;
            }
            let score = self.score_against(&focal_tags, focal_year, entry);
            if score > 0 {
                candidates.push(self.candidate(entry, score, RelationOrigin::Computed));
            }
        }

        let scored = candidates.len();
        candidates.sort_by(|a, b| {
            a.origin
                .cmp(&b.origin)
                .then_with(|| b.score.cmp(&a.score))
                .then_with(|| b.instant.cmp(&a.instant))
        });
        candidates.truncate(self.limit);

        debug!(
            focal = %focal.id,
            scored,
            returned = candidates.len(),
            "ranked related artworks"
        );
        candidates
    }

    /// Computed relevance of `candidate` to `focal`, ignoring curation.
    pub fn score(&self, focal: &CatalogEntry, candidate: &CatalogEntry) -> u32 {
        self.score_against(&entry_tag_set(focal), self.dates.year(focal), candidate)
    }

    fn score_against(
        &self,
        focal_tags: &BTreeSet<String>,
        focal_year: Option<i32>,
        candidate: &CatalogEntry,
    ) -> u32 {
        let shared = entry_tag_set(candidate)
            .iter()
            .filter(|tag| focal_tags.contains(*tag))
            .count() as u32;

        let mut score = shared * SHARED_TAG_POINTS;
        if shared > 0 {
            score += ANY_SHARED_TAG_BONUS;
        }

        if let (Some(focal_year), Some(year)) = (focal_year, self.dates.year(candidate)) {
            match (focal_year - year).abs() {
                0 => score += SAME_YEAR_POINTS,
                1 => score += ADJACENT_YEAR_POINTS,
                _ => {}
            }
        }
        score
    }

    fn curated<'a>(
        &self,
        focal: &CatalogEntry,
        catalog: &'a Catalog,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut seen = HashSet::new();
        let mut curated = Vec::new();
        for id in &focal.related_to {
            if *id == focal.id || !seen.insert(id.as_str()) {
                continue;
            }
            match catalog.find(id.as_str()) {
                Some(entry) => {
                    curated.push(self.candidate(entry, CURATED_SCORE, RelationOrigin::Curated))
                }
                None => warn!(focal = %focal.id, related = %id, "curated relation not in catalog"),
            }
        }
        curated
    }

    fn candidate<'a>(
        &self,
        entry: &'a CatalogEntry,
        score: u32,
        origin: RelationOrigin,
    ) -> ScoredCandidate<'a> {
        ScoredCandidate {
            entry,
            score,
            origin,
            instant: self.dates.resolve(entry),
        }
    }
}
