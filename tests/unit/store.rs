//! MemoryStore snapshots and the DocumentStore seam.

use super::common::{make_article, make_article_with_category};
use newsrank::testing::FailingStore;
use newsrank::{search_at, DocumentStore, MemoryStore, SearchQuery, StoreError};
use std::fs;

#[test]
fn loads_a_snapshot_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("articles.json");
    fs::write(
        &path,
        r#"[
            {"id": "a1", "title": "AI Chips", "category": "ai", "views": 10},
            {"id": "a2", "title": "Draft Piece", "published": false}
        ]"#,
    )
    .unwrap();

    let store = MemoryStore::load(&path).unwrap();
    assert_eq!(store.len(), 2);

    let published = store.published_articles(None).unwrap();
    assert_eq!(published.len(), 1);
    assert_eq!(published[0].id, "a1");
}

#[test]
fn missing_snapshot_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = MemoryStore::load(dir.path().join("nope.json")).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}

#[test]
fn works_as_a_trait_object() {
    let store: Box<dyn DocumentStore> = Box::new(MemoryStore::new(vec![
        make_article_with_category("a1", "One", "ai"),
        make_article_with_category("a2", "Two", "ai"),
    ]));

    let corpus = store.published_articles(Some("ai")).unwrap();
    assert_eq!(corpus.len(), 2);
}

#[test]
fn unavailable_store_surfaces_the_error_without_invoking_search() {
    // The caller pattern: fetch first, search only on success.
    let store = FailingStore;

    match store.published_articles(None) {
        Err(StoreError::Unavailable { reason }) => {
            assert!(!reason.is_empty());
        }
        Ok(_) => panic!("failing store returned a snapshot"),
    }
}

#[test]
fn fetch_then_search_pipeline() {
    let store = MemoryStore::new(vec![
        make_article("a1", "Rust 2.0 Speculation"),
        make_article("a2", "Go Generics Retrospective"),
    ]);

    let corpus = store.published_articles(None).unwrap();
    let results = search_at(&corpus, &SearchQuery::new("rust"), 1_750_000_000);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "a1");
}

#[test]
fn top_by_views_skips_drafts() {
    let mut popular_draft = make_article("draft", "Viral Draft");
    popular_draft.views = Some(1_000_000);
    popular_draft.published = false;
    let mut live = make_article("live", "Modest Article");
    live.views = Some(10);

    let store = MemoryStore::new(vec![popular_draft, live]);
    let top = store.top_by_views(5).unwrap();

    assert_eq!(top.len(), 1);
    assert_eq!(top[0].id, "live");
}
