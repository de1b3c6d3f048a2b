//! Small text helpers shared by tag matching and title collation.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Trim and lower-case a tag token; blank tokens yield `None`.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Locale-style ordering for display strings.
///
/// Strings are compared in three levels on their canonical decomposition:
///
/// 1. base letters, ignoring accents and case (`Éclair` sorts between
///    `apple` and `Zebra`),
/// 2. accents, unaccented first (`resume` before `résumé`),
/// 3. case, lower-case first (`apple` before `Apple`).
///
/// Strings equal on all three levels fall back to their raw text so the
/// ordering stays total.
pub fn collate(a: &str, b: &str) -> Ordering {
    let a = Decomposed::new(a);
    let b = Decomposed::new(b);

    a.primary()
        .cmp(b.primary())
        .then_with(|| a.accents.cmp(&b.accents))
        .then_with(|| compare_case(&a.bases, &b.bases))
        .then_with(|| a.raw.cmp(b.raw))
}

struct Decomposed<'a> {
    raw: &'a str,
    /// Base characters of the NFD form.
    bases: Vec<char>,
    /// Combining marks attached to each base character.
    accents: Vec<Vec<char>>,
}

impl<'a> Decomposed<'a> {
    fn new(raw: &'a str) -> Self {
        let mut bases = Vec::with_capacity(raw.len());
        let mut accents: Vec<Vec<char>> = Vec::with_capacity(raw.len());
        for c in raw.nfd() {
            if is_combining_mark(c) {
                match accents.last_mut() {
                    Some(marks) => marks.push(c),
                    None => accents.push(vec![c]),
                }
            } else {
                bases.push(c);
                accents.push(Vec::new());
            }
        }
        Self {
            raw,
            bases,
            accents,
        }
    }

    fn primary(&self) -> impl Iterator<Item = char> + '_ {
        self.bases.iter().flat_map(|c| c.to_lowercase())
    }
}

fn compare_case(a: &[char], b: &[char]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| y.is_lowercase().cmp(&x.is_lowercase()))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
