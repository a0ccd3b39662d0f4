// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! The document store seam.
//!
//! [`DocumentStore`] abstracts "give me the published articles" so the
//! ranker doesn't care whether snapshots come from a remote document
//! database, a JSON file, or a test fixture. The fetch is a single
//! best-effort call: when it fails, callers surface the error and show an
//! empty result set - the ranker is never invoked on a failed fetch.

use crate::types::Article;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Error type for store access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing service cannot be reached.
    Unavailable { reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable { reason } => {
                write!(f, "document store unavailable: {}", reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}

/// Abstract provider of published-article snapshots.
///
/// Implementations return point-in-time snapshots; the caller owns the
/// returned articles and may search them any number of times. Draft
/// (`published: false`) articles never appear in any snapshot.
pub trait DocumentStore {
    /// Current snapshot of published articles, optionally restricted to one
    /// category.
    fn published_articles(&self, category: Option<&str>) -> Result<Vec<Article>, StoreError>;

    /// Top `k` published articles by view count, descending.
    ///
    /// This is the trending-topics companion query; it is not part of the
    /// relevance ranking. Ties keep snapshot order.
    fn top_by_views(&self, k: usize) -> Result<Vec<Article>, StoreError> {
        let mut articles = self.published_articles(None)?;
        articles.sort_by_key(|a| std::cmp::Reverse(a.view_count()));
        articles.truncate(k);
        Ok(articles)
    }
}

/// Wire format of a snapshot file: either a bare array of articles or an
/// object with an `articles` field, as exported by the admin console.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotPayload {
    Bare(Vec<Article>),
    Wrapped { articles: Vec<Article> },
}

impl SnapshotPayload {
    fn into_articles(self) -> Vec<Article> {
        match self {
            SnapshotPayload::Bare(articles) => articles,
            SnapshotPayload::Wrapped { articles } => articles,
        }
    }
}

/// An in-memory [`DocumentStore`] over a fixed snapshot.
///
/// This is the stand-in for the hosted document database: the CLI loads a
/// JSON snapshot into one of these, and tests construct them directly.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    articles: Vec<Article>,
}

impl MemoryStore {
    /// Store a snapshot as-is. Unpublished articles are kept internally but
    /// never surfaced.
    pub fn new(articles: Vec<Article>) -> Self {
        MemoryStore { articles }
    }

    /// Parse a snapshot from JSON bytes.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let payload: SnapshotPayload = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(MemoryStore::new(payload.into_articles()))
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = fs::File::open(path)?;
        MemoryStore::from_reader(io::BufReader::new(file))
    }

    /// Number of articles in the snapshot, drafts included.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn published_articles(&self, category: Option<&str>) -> Result<Vec<Article>, StoreError> {
        Ok(self
            .articles
            .iter()
            .filter(|a| a.published)
            .filter(|a| category.is_none_or(|c| a.category == c))
            .cloned()
            .collect())
    }
}
