//! Two-tier ranked filtering of candidates against a type-ahead query.
//!
//! Candidates whose key starts with the query rank strictly before those
//! that merely contain it; order within a tier is the candidates' original
//! order. Matching is ASCII-case-insensitive. The result cap is applied to
//! the already-ranked sequence, never before ranking.
//!
//! # Public API
//! - [`filter_ranked`]: generic ranked filter over any candidate type
//! - [`MatchTier`]: the two match classes, ordered prefix-first
//!
//! The tier enum leaves room for a richer weighted variant (acronym or
//! contiguous-run bonuses) as extra tiers, as long as prefix-before-substring
//! and within-tier stability hold.

/// Match quality, ordered best-first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    Prefix,
    Substring,
}

/// Classify `key` against an already case-folded `query`.
fn tier_of(key: &str, query: &str) -> Option<MatchTier> {
    let key = key.to_lowercase();
    if key.starts_with(query) {
        Some(MatchTier::Prefix)
    } else if key.contains(query) {
        Some(MatchTier::Substring)
    } else {
        None
    }
}

/// Filter and rank `candidates` by comparing `query` with `key(candidate)`.
///
/// An empty query returns the candidates unchanged up to `limit`. A `limit`
/// of zero means uncapped.
pub fn filter_ranked<'a, T, K>(
    candidates: &'a [T],
    query: &str,
    key: K,
    limit: usize,
) -> Vec<&'a T>
where
    K: Fn(&T) -> String,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        let mut all: Vec<&T> = candidates.iter().collect();
        if limit > 0 {
            all.truncate(limit);
        }
        return all;
    }

    let mut prefix_hits = Vec::new();
    let mut substring_hits = Vec::new();
    for candidate in candidates {
        match tier_of(&key(candidate), &query) {
            Some(MatchTier::Prefix) => prefix_hits.push(candidate),
            Some(MatchTier::Substring) => substring_hits.push(candidate),
            None => {}
        }
    }
    log::debug!(
        "query '{query}': {} prefix + {} substring of {} candidate(s)",
        prefix_hits.len(),
        substring_hits.len(),
        candidates.len()
    );

    let mut hits = prefix_hits;
    hits.append(&mut substring_hits);
    if limit > 0 {
        hits.truncate(limit);
    }
    hits
}
