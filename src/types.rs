// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a search call.
//!
//! These types define what goes into the ranker (articles and a query) and
//! what comes out (scored results). Articles are read-only snapshots: the
//! ranker never mutates them, and nothing here has a lifecycle beyond a
//! single `search` call.
//!
//! # Field defaulting (the stuff that breaks if you ignore it)
//!
//! Article snapshots come from loosely-typed document stores, so every field
//! that can be absent has a serde default and a documented fallback:
//!
//! - `excerpt`, `content`, `tags`, `category`: default to empty.
//! - `created_at`: absent means "no recency bonus" when scoring and
//!   "timestamp 0" (oldest) when sorting by date.
//! - `views`: absent means 0.
//! - `published`: absent means `true` (historical snapshots predate the
//!   draft workflow).
//!
//! Ranking must tolerate all of these without raising; the defaults are
//! applied here, at the type boundary, so the scoring and ordering code can
//! stay branch-free about missing data.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Seconds-since-epoch timestamp, as stored in article snapshots.
pub type Timestamp = i64;

/// A single article record from the document store.
///
/// This is what users search over and what search results point back to.
/// The `content` field may carry markup; matching runs over it as-is, while
/// display code goes through [`crate::markup::display_excerpt`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Opaque identifier, unique within a corpus snapshot.
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Short summary. May be empty; display falls back to truncated content.
    #[serde(default)]
    pub excerpt: String,
    /// Tags/labels for categorization, in authored order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Category identifier for client-side filtering (e.g. "ai", "crypto").
    #[serde(default)]
    pub category: String,
    /// Publication timestamp in seconds since epoch.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    /// View counter maintained by the store.
    #[serde(default)]
    pub views: Option<u64>,
    /// Draft articles stay out of every store snapshot.
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl Article {
    /// View count with the missing-field default applied.
    #[inline]
    pub fn view_count(&self) -> u64 {
        self.views.unwrap_or(0)
    }

    /// Creation timestamp for ordering: missing sorts as 0 (oldest).
    #[inline]
    pub fn created_at_epoch(&self) -> Timestamp {
        self.created_at.unwrap_or(0)
    }
}

/// How search results get ordered.
///
/// **Gotcha**: all three modes use a stable sort, so equal keys keep their
/// corpus order. Don't "optimize" to an unstable sort - result determinism
/// for tied scores is part of the contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending relevance score (the default).
    #[default]
    Relevance,
    /// Descending `created_at`; missing timestamps sort oldest.
    Date,
    /// Descending view count; missing counts sort as 0.
    Views,
}

impl SortMode {
    /// Lowercase string representation, matching the serde rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Date => "date",
            SortMode::Views => "views",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for unrecognized sort mode names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSortModeError {
    input: String,
}

impl fmt::Display for ParseSortModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort mode '{}' (expected relevance, date, or views)",
            self.input
        )
    }
}

impl std::error::Error for ParseSortModeError {}

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortMode::Relevance),
            "date" => Ok(SortMode::Date),
            "views" => Ok(SortMode::Views),
            other => Err(ParseSortModeError {
                input: other.to_string(),
            }),
        }
    }
}

/// A free-text query with optional category restriction and sort mode.
///
/// The `text` is used case-insensitively with surrounding whitespace
/// trimmed; a query that normalizes to the empty string matches nothing
/// (deliberate no-match policy, not an error).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub text: String,
    /// When set, only articles whose `category` equals this are considered.
    #[serde(default)]
    pub category_filter: Option<String>,
    #[serde(default)]
    pub sort_mode: SortMode,
}

impl SearchQuery {
    /// A relevance-sorted query with no category restriction.
    pub fn new(text: impl Into<String>) -> Self {
        SearchQuery {
            text: text.into(),
            category_filter: None,
            sort_mode: SortMode::Relevance,
        }
    }

    /// Restrict results to one category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category_filter = Some(category.into());
        self
    }

    /// Select the result ordering.
    pub fn with_sort(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }
}

/// An article paired with its computed relevance score.
///
/// The score is always computed for every retained article, regardless of
/// sort mode, so callers can display it (or feed it to
/// [`crate::scoring::explain_score`]) without re-ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredArticle {
    pub article: Article,
    pub score: u32,
}
