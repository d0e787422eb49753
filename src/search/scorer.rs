// ABOUTME: Heuristic relevance scoring of tool entries against a query, and the
// ABOUTME: search and category-listing functions built on it.

use tracing::debug;

use crate::catalog::{Category, Registry, ToolEntry};

/// Result limit used when the caller does not give one.
pub const DEFAULT_LIMIT: usize = 10;

/// Queries shorter than this (in characters, after trimming) match nothing.
pub const MIN_QUERY_CHARS: usize = 2;

const EXACT_NAME: u32 = 100;
const NAME_PREFIX: u32 = 50;
const NAME_CONTAINS: u32 = 30;
const WORD_PREFIX: u32 = 25;
const KEYWORD_EXACT: u32 = 40;
const KEYWORD_PREFIX: u32 = 20;
const KEYWORD_CONTAINS: u32 = 10;
const CATEGORY_CONTAINS: u32 = 5;

/// An entry together with its score for some query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub entry: &'a ToolEntry,
    pub score: u32,
}

/// Trim and lowercase a raw query. Returns `None` when it is too short to search.
pub fn normalize_query(query: &str) -> Option<String> {
    let normalized = query.trim().to_lowercase();
    if normalized.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(normalized)
}

/// Score one entry against an already normalized query.
///
/// Name rules: exact, else prefix, else substring. Each name word starting
/// with the query adds on top. Each keyword contributes its best match only.
pub fn score(entry: &ToolEntry, query: &str) -> u32 {
    let name = entry.name.to_lowercase();

    let name_points = if name == query {
        EXACT_NAME
    } else if name.starts_with(query) {
        NAME_PREFIX
    } else if name.contains(query) {
        NAME_CONTAINS
    } else {
        0
    };

    let word_points = name
        .split_whitespace()
        .filter(|w| w.starts_with(query))
        .map(|_| WORD_PREFIX);

    let keyword_points = entry.keywords.iter().map(|keyword| {
        let keyword = keyword.to_lowercase();
        if keyword == query {
            KEYWORD_EXACT
        } else if keyword.starts_with(query) {
            KEYWORD_PREFIX
        } else if keyword.contains(query) {
            KEYWORD_CONTAINS
        } else {
            0
        }
    });

    let category_points = if entry.category.as_str().to_lowercase().contains(query) {
        CATEGORY_CONTAINS
    } else {
        0
    };

    saturating_total(
        std::iter::once(name_points)
            .chain(word_points)
            .chain(keyword_points)
            .chain(std::iter::once(category_points)),
    )
}

/// Sum of `points`, clamped at `u32::MAX`.
pub(crate) fn saturating_total(points: impl IntoIterator<Item = u32>) -> u32 {
    points.into_iter().fold(0, u32::saturating_add)
}

/// Score candidates, drop non-matches, sort by descending score, truncate.
///
/// The sort is stable, so equal scores keep candidate order.
pub(crate) fn rank<'a>(
    candidates: impl Iterator<Item = &'a ToolEntry>,
    query: &str,
    limit: usize,
) -> Vec<SearchHit<'a>> {
    let Some(query) = normalize_query(query) else {
        return Vec::new();
    };
    if limit == 0 {
        return Vec::new();
    }

    let mut hits: Vec<SearchHit<'a>> = candidates
        .map(|entry| SearchHit {
            entry,
            score: score(entry, &query),
        })
        .filter(|hit| hit.score > 0)
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    let matched = hits.len();
    hits.truncate(limit);

    debug!(query = %query, matched, returned = hits.len(), "Search ranked");
    hits
}

/// Search a registry, most relevant first, at most `limit` entries.
pub fn search<'a>(registry: &'a Registry, query: &str, limit: usize) -> Vec<&'a ToolEntry> {
    search_scored(registry, query, limit)
        .into_iter()
        .map(|hit| hit.entry)
        .collect()
}

/// Like [`search`], keeping each entry's score.
pub fn search_scored<'a>(registry: &'a Registry, query: &str, limit: usize) -> Vec<SearchHit<'a>> {
    rank(registry.iter(), query, limit)
}

/// All entries of one category, in registry order.
pub fn entries_by_category(registry: &Registry, category: Category) -> Vec<&ToolEntry> {
    registry
        .iter()
        .filter(|e| e.category == category)
        .collect()
}
