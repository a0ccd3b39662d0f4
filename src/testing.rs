// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders so every test constructs articles
//! the same way: all optional fields empty/absent unless the test sets them.

#![doc(hidden)]

use crate::store::{DocumentStore, StoreError};
use crate::types::Article;

/// Create a minimal published article: only `id` and `title` set.
///
/// This is the canonical builder used across all tests. Keeping the excerpt
/// and tags empty matters - scoring tests assert exact point totals.
pub fn make_article(id: &str, title: &str) -> Article {
    Article {
        id: id.to_string(),
        title: title.to_string(),
        content: String::new(),
        excerpt: String::new(),
        tags: vec![],
        category: String::new(),
        created_at: None,
        views: None,
        published: true,
    }
}

/// Create an article in a category.
pub fn make_article_with_category(id: &str, title: &str, category: &str) -> Article {
    Article {
        category: category.to_string(),
        ..make_article(id, title)
    }
}

/// Create an article with tags.
pub fn make_article_with_tags(id: &str, title: &str, tags: &[&str]) -> Article {
    Article {
        tags: tags.iter().map(|t| (*t).to_string()).collect(),
        ..make_article(id, title)
    }
}

/// A [`DocumentStore`] that always fails, for error-surfacing tests.
#[derive(Debug, Default)]
pub struct FailingStore;

impl DocumentStore for FailingStore {
    fn published_articles(&self, _category: Option<&str>) -> Result<Vec<Article>, StoreError> {
        Err(StoreError::Unavailable {
            reason: "simulated outage".to_string(),
        })
    }
}
