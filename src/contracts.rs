// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for ranking invariants.
//!
//! These checks are zero-cost in release builds (`debug_assert!`) and catch
//! ordering or filtering regressions early during development. Each one
//! mirrors a documented property of the search pipeline:
//!
//! | Contract                  | Property                                   |
//! |---------------------------|--------------------------------------------|
//! | weight hierarchy (const)  | exact > partial title > tag > excerpt > recency |
//! | `check_results_ordered`   | results non-increasing in the sort key     |
//! | `check_category_filter`   | every result matches the category filter   |

use crate::scoring::{
    EXACT_TITLE_SCORE, EXCERPT_MATCH_SCORE, RECENT_MONTH_BONUS, RECENT_WEEK_BONUS,
    TAG_MATCH_SCORE, TITLE_MATCH_SCORE,
};
use crate::types::{ScoredArticle, SortMode};

// Compile-time assertion that the default weight hierarchy holds.
// If this fails, the crate won't build.
const _: () = {
    assert!(EXACT_TITLE_SCORE > TITLE_MATCH_SCORE);
    assert!(TITLE_MATCH_SCORE > TAG_MATCH_SCORE);
    // INVARIANT: tag_beats_excerpt
    assert!(TAG_MATCH_SCORE > EXCERPT_MATCH_SCORE);
    // INVARIANT: any field match beats pure recency
    assert!(EXCERPT_MATCH_SCORE > RECENT_WEEK_BONUS);
    assert!(RECENT_WEEK_BONUS > RECENT_MONTH_BONUS);
};

/// Check that results are non-increasing in the active sort key.
///
/// # Panics (debug builds only)
/// Panics if an adjacent pair is out of order.
#[inline]
pub fn check_results_ordered(results: &[ScoredArticle], sort_mode: SortMode) {
    debug_assert!(
        results.windows(2).all(|pair| match sort_mode {
            SortMode::Relevance => pair[0].score >= pair[1].score,
            SortMode::Date =>
                pair[0].article.created_at_epoch() >= pair[1].article.created_at_epoch(),
            SortMode::Views => pair[0].article.view_count() >= pair[1].article.view_count(),
        }),
        "search results out of order for sort mode '{}'",
        sort_mode
    );
}

/// Check that every result matches the category filter, if one was set.
///
/// # Panics (debug builds only)
/// Panics if a result from another category leaked through.
#[inline]
pub fn check_category_filter(results: &[ScoredArticle], category: Option<&str>) {
    if let Some(category) = category {
        debug_assert!(
            results.iter().all(|r| r.article.category == category),
            "search result leaked past category filter '{}'",
            category
        );
    }
}
