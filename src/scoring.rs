// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how retained articles get their relevance numbers.
//!
//! The score is an additive integer heuristic. Field weights dominate in a
//! fixed hierarchy - an exact title match beats any partial title match,
//! which beats any single tag match, which beats an excerpt match, which
//! beats pure recency. The hierarchy is pinned by compile-time assertions in
//! [`crate::contracts`].
//!
//! # Weights
//!
//! | Rule                        | Points |
//! |-----------------------------|--------|
//! | Title equals query          | +100   |
//! | Title contains query        | +50    |
//! | Tag contains query (each)   | +30    |
//! | Excerpt contains query      | +20    |
//! | Published < 7 days ago      | +10    |
//! | Published < 30 days ago     | +5     |
//!
//! Exact and partial title are mutually exclusive; tag points are additive
//! per matching tag; articles without a timestamp get no recency bonus.

use crate::types::{Article, Timestamp};
use crate::utils::normalize;
use serde::{Deserialize, Serialize};

/// Points for a title that equals the query exactly.
pub const EXACT_TITLE_SCORE: u32 = 100;
/// Points for a title that contains the query.
pub const TITLE_MATCH_SCORE: u32 = 50;
/// Points per tag that contains the query.
pub const TAG_MATCH_SCORE: u32 = 30;
/// Points for an excerpt that contains the query.
pub const EXCERPT_MATCH_SCORE: u32 = 20;
/// Bonus for articles published within the last week.
pub const RECENT_WEEK_BONUS: u32 = 10;
/// Bonus for articles published within the last month (but not the last week).
pub const RECENT_MONTH_BONUS: u32 = 5;

const SECONDS_PER_DAY: i64 = 86_400;
/// Age cutoff for the week bonus, in seconds.
pub const RECENT_WEEK_SECS: i64 = 7 * SECONDS_PER_DAY;
/// Age cutoff for the month bonus, in seconds.
pub const RECENT_MONTH_SECS: i64 = 30 * SECONDS_PER_DAY;

/// The scoring rule that fired for a [`ScoreBreakdown`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreRule {
    ExactTitle,
    TitleContains,
    TagContains,
    ExcerptContains,
    RecentWeek,
    RecentMonth,
}

impl ScoreRule {
    /// Kebab-case name, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreRule::ExactTitle => "exact-title",
            ScoreRule::TitleContains => "title-contains",
            ScoreRule::TagContains => "tag-contains",
            ScoreRule::ExcerptContains => "excerpt-contains",
            ScoreRule::RecentWeek => "recent-week",
            ScoreRule::RecentMonth => "recent-month",
        }
    }
}

/// One fired rule and the points it awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub rule: ScoreRule,
    pub points: u32,
}

/// Per-rule breakdown of a relevance score, for "why this matched" UIs.
///
/// Entries appear in rule-evaluation order (title, tags, excerpt, recency)
/// and their points always sum to the article's relevance score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub entries: Vec<ScoreEntry>,
}

impl ScoreBreakdown {
    /// Sum of all awarded points.
    pub fn total(&self) -> u32 {
        self.entries.iter().map(|e| e.points).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Scoring weights, as one overridable bundle.
///
/// The defaults are the documented production weights. Overriding them is
/// supported for experimentation, but the hierarchy assertions in
/// [`crate::contracts`] only cover the defaults - custom weights that
/// reorder the hierarchy will silently change ranking semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreWeights {
    pub exact_title: u32,
    pub title_contains: u32,
    pub tag_contains: u32,
    pub excerpt_contains: u32,
    pub recent_week: u32,
    pub recent_month: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            exact_title: EXACT_TITLE_SCORE,
            title_contains: TITLE_MATCH_SCORE,
            tag_contains: TAG_MATCH_SCORE,
            excerpt_contains: EXCERPT_MATCH_SCORE,
            recent_week: RECENT_WEEK_BONUS,
            recent_month: RECENT_MONTH_BONUS,
        }
    }
}

impl ScoreWeights {
    /// Score an article against a normalized query.
    ///
    /// `query` must already be normalized (see [`crate::utils::normalize`]);
    /// the search layer guarantees this. `now` is epoch seconds.
    pub fn score(&self, article: &Article, query: &str, now: Timestamp) -> u32 {
        let mut total = 0u32;
        self.apply_rules(article, query, now, |_, points| total += points);
        total
    }

    /// Score an article, recording which rule awarded which points.
    pub fn explain(&self, article: &Article, query: &str, now: Timestamp) -> ScoreBreakdown {
        let mut entries = Vec::new();
        self.apply_rules(article, query, now, |rule, points| {
            entries.push(ScoreEntry { rule, points });
        });
        ScoreBreakdown { entries }
    }

    /// Single source of truth for rule evaluation.
    ///
    /// `score` and `explain` both fold over this, so the breakdown always
    /// sums to the score.
    fn apply_rules(
        &self,
        article: &Article,
        query: &str,
        now: Timestamp,
        mut award: impl FnMut(ScoreRule, u32),
    ) {
        let title = normalize(&article.title);
        if title == query {
            award(ScoreRule::ExactTitle, self.exact_title);
        } else if title.contains(query) {
            award(ScoreRule::TitleContains, self.title_contains);
        }

        // Additive per matching tag, by design of the original heuristic.
        for tag in &article.tags {
            if normalize(tag).contains(query) {
                award(ScoreRule::TagContains, self.tag_contains);
            }
        }

        if !article.excerpt.is_empty() && normalize(&article.excerpt).contains(query) {
            award(ScoreRule::ExcerptContains, self.excerpt_contains);
        }

        match recency_bucket(article.created_at, now) {
            Some(RecencyBucket::Week) => award(ScoreRule::RecentWeek, self.recent_week),
            Some(RecencyBucket::Month) => award(ScoreRule::RecentMonth, self.recent_month),
            None => {}
        }
    }
}

enum RecencyBucket {
    Week,
    Month,
}

fn recency_bucket(created_at: Option<Timestamp>, now: Timestamp) -> Option<RecencyBucket> {
    let created = created_at?;
    let age = now - created;
    // A timestamp slightly in the future (clock skew between client and
    // store) counts as fresh rather than stale.
    if age < RECENT_WEEK_SECS {
        Some(RecencyBucket::Week)
    } else if age < RECENT_MONTH_SECS {
        Some(RecencyBucket::Month)
    } else {
        None
    }
}

/// Score an article with the default weights.
///
/// `query` must already be normalized; `now` is epoch seconds.
pub fn relevance_score(article: &Article, query: &str, now: Timestamp) -> u32 {
    ScoreWeights::default().score(article, query, now)
}

/// Explain an article's score with the default weights.
pub fn explain_score(article: &Article, query: &str, now: Timestamp) -> ScoreBreakdown {
    ScoreWeights::default().explain(article, query, now)
}

/// Recency bonus for a creation timestamp, with the default weights.
pub fn recency_bonus(created_at: Option<Timestamp>, now: Timestamp) -> u32 {
    match recency_bucket(created_at, now) {
        Some(RecencyBucket::Week) => RECENT_WEEK_BONUS,
        Some(RecencyBucket::Month) => RECENT_MONTH_BONUS,
        None => 0,
    }
}
