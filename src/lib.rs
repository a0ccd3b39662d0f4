// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! Client-side relevance search and ranking for article collections.
//!
//! This crate ranks a small in-memory corpus of articles against a free-text
//! query: substring matching over concatenated fields, an additive integer
//! relevance score (title > tag > excerpt > recency), and a selectable sort
//! mode. It is the search half of a content site whose articles live in a
//! hosted document store; the store itself sits behind the [`DocumentStore`]
//! trait.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  types.rs   │────▶│  scoring.rs  │────▶│  search.rs  │
//! │ (Article,   │     │ (weights,    │     │ (filter,    │
//! │ SearchQuery)│     │  explain)    │     │ score, sort)│
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐                         ┌─────────────┐
//! │  store.rs   │  snapshots in           │ contracts.rs│
//! │ (Document-  │ ────────────────▶       │ (debug-mode │
//! │  Store)     │                         │  invariants)│
//! └─────────────┘                         └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use newsrank::{search_at, Article, SearchQuery, SortMode};
//!
//! let corpus = vec![Article {
//!     id: "a1".into(),
//!     title: "AI Chips".into(),
//!     content: String::new(),
//!     excerpt: String::new(),
//!     tags: vec!["hardware".into()],
//!     category: "ai".into(),
//!     created_at: None,
//!     views: None,
//!     published: true,
//! }];
//!
//! let query = SearchQuery::new("ai chips").with_sort(SortMode::Relevance);
//! let results = search_at(&corpus, &query, 1_750_000_000);
//! assert_eq!(results[0].id, "a1");
//! ```
//!
//! Ranking is pure and synchronous: no I/O, no locking, no failure path.
//! Concurrent searches are independent; stale-result handling on retype is
//! a caller concern.

// Module declarations
pub mod contracts;
mod markup;
mod recent;
mod scoring;
mod search;
mod store;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use markup::{display_excerpt, strip_markup};
pub use recent::{RecentSearches, MAX_RECENT};
pub use scoring::{
    explain_score, recency_bonus, relevance_score, ScoreBreakdown, ScoreEntry, ScoreRule,
    ScoreWeights, EXACT_TITLE_SCORE, EXCERPT_MATCH_SCORE, RECENT_MONTH_BONUS, RECENT_WEEK_BONUS,
    TAG_MATCH_SCORE, TITLE_MATCH_SCORE,
};
pub use search::{haystack, search, search_at, search_scored_at, unix_now};
pub use store::{DocumentStore, MemoryStore, StoreError};
pub use types::{
    Article, ParseSortModeError, ScoredArticle, SearchQuery, SortMode, Timestamp,
};
pub use utils::normalize;
