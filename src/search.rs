// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! The search pipeline: filter, score, order.
//!
//! Everything culminates here. [`search_scored_at`] is the pure core - a
//! function of `(corpus, query, now)` with no I/O, no shared state, and no
//! failure path. Fetching the corpus (and any retry policy around that) is
//! the caller's problem; by the time this module runs, the snapshot is in
//! memory.
//!
//! Matching is plain substring containment over one concatenated haystack
//! per article. No tokenization, no stemming, no fuzzy matching - for a
//! corpus of a few hundred articles the simple thing is also the fast thing.
//!
//! # Tie-breaking
//!
//! Equal sort keys keep their corpus order, via Rust's stable sorts. The
//! original behavior relied on incidental store result order; pinning ties
//! to corpus order makes results deterministic for the same snapshot.

use crate::contracts;
use crate::scoring::ScoreWeights;
use crate::types::{Article, ScoredArticle, SearchQuery, SortMode, Timestamp};
use crate::utils::normalize;
use std::cmp::Reverse;
use std::time::{SystemTime, UNIX_EPOCH};

/// Build the haystack an article is matched against: normalized `title`,
/// `content`, `excerpt`, and tags, space separated.
///
/// Markup in `content` is searched as-is. Empty fields are skipped so the
/// separator never doubles up.
pub fn haystack(article: &Article) -> String {
    let mut parts = vec![
        normalize(&article.title),
        normalize(&article.content),
        normalize(&article.excerpt),
    ];
    parts.extend(article.tags.iter().map(|tag| normalize(tag)));
    parts.retain(|part| !part.is_empty());
    parts.join(" ")
}

/// Search a corpus, returning scored results in query order.
///
/// This is the core entry point. The relevance score is computed for every
/// retained article regardless of `sort_mode`, so callers can always show
/// it. A query that normalizes to the empty string returns no results.
///
/// `now` is epoch seconds, used only for the recency bonus.
pub fn search_scored_at(
    corpus: &[Article],
    query: &SearchQuery,
    now: Timestamp,
) -> Vec<ScoredArticle> {
    let q = normalize(&query.text);
    if q.is_empty() {
        return Vec::new();
    }

    let weights = ScoreWeights::default();
    let category = query.category_filter.as_deref();

    let mut results: Vec<ScoredArticle> = corpus
        .iter()
        .filter(|article| category.is_none_or(|c| article.category == c))
        .filter(|article| haystack(article).contains(&q))
        .map(|article| ScoredArticle {
            score: weights.score(article, &q, now),
            article: article.clone(),
        })
        .collect();

    order_results(&mut results, query.sort_mode);

    contracts::check_results_ordered(&results, query.sort_mode);
    contracts::check_category_filter(&results, category);

    results
}

/// Search a corpus at an explicit timestamp, returning articles only.
pub fn search_at(corpus: &[Article], query: &SearchQuery, now: Timestamp) -> Vec<Article> {
    search_scored_at(corpus, query, now)
        .into_iter()
        .map(|scored| scored.article)
        .collect()
}

/// Search a corpus using the system clock for the recency bonus.
pub fn search(corpus: &[Article], query: &SearchQuery) -> Vec<Article> {
    search_at(corpus, query, unix_now())
}

/// Current time in epoch seconds, as used by [`search`].
///
/// A clock set before the epoch reads as 0, which only disables recency
/// bonuses - it can't make ranking fail.
pub fn unix_now() -> Timestamp {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() as Timestamp)
}

/// Stable sort in place according to the query's sort mode.
fn order_results(results: &mut [ScoredArticle], sort_mode: SortMode) {
    match sort_mode {
        SortMode::Relevance => results.sort_by(|a, b| b.score.cmp(&a.score)),
        SortMode::Date => results.sort_by_key(|r| Reverse(r.article.created_at_epoch())),
        SortMode::Views => results.sort_by_key(|r| Reverse(r.article.view_count())),
    }
}
