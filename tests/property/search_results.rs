//! Invariants of the search result sequence.

use super::common::{make_article, NOW};
use newsrank::{haystack, search_at, search_scored_at, Article, SearchQuery, SortMode};
use proptest::prelude::*;

fn corpus_strategy() -> impl Strategy<Value = Vec<Article>> {
    let word = proptest::string::string_regex("[a-z]{2,6}").unwrap().boxed();
    let title = proptest::collection::vec(word.clone(), 1..4).prop_map(|w| w.join(" "));
    let category = proptest::sample::select(vec!["ai", "crypto", "robotics", ""]);
    let entry = (
        title,
        category,
        proptest::collection::vec(word, 0..3),
        proptest::option::of(1_600_000_000i64..1_760_000_000),
        proptest::option::of(0u64..100_000),
    );

    proptest::collection::vec(entry, 0..10).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (title, category, tags, created_at, views))| Article {
                category: category.to_string(),
                tags,
                created_at,
                views,
                ..make_article(&format!("a{}", i), &title)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn blank_query_invariant(corpus in corpus_strategy()) {
        let query = SearchQuery { text: "   ".to_string(), ..SearchQuery::default() };
        prop_assert!(search_at(&corpus, &query, NOW).is_empty());
    }

    #[test]
    fn category_filter_invariant(corpus in corpus_strategy(), needle in "[a-z]{1,3}") {
        let query = SearchQuery::new(needle).with_category("ai");
        for article in search_at(&corpus, &query, NOW) {
            prop_assert_eq!(article.category.as_str(), "ai");
        }
    }

    #[test]
    fn substring_match_invariant(corpus in corpus_strategy(), needle in "[a-z]{1,3}") {
        for article in search_at(&corpus, &SearchQuery::new(needle.clone()), NOW) {
            prop_assert!(haystack(&article).contains(&needle));
        }
    }

    #[test]
    fn relevance_ordering_invariant(corpus in corpus_strategy(), needle in "[a-z]{1,3}") {
        let results = search_scored_at(&corpus, &SearchQuery::new(needle), NOW);
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn date_ordering_invariant(corpus in corpus_strategy(), needle in "[a-z]{1,3}") {
        let query = SearchQuery::new(needle).with_sort(SortMode::Date);
        let results = search_at(&corpus, &query, NOW);
        for pair in results.windows(2) {
            prop_assert!(pair[0].created_at.unwrap_or(0) >= pair[1].created_at.unwrap_or(0));
        }
    }

    #[test]
    fn views_ordering_invariant(corpus in corpus_strategy(), needle in "[a-z]{1,3}") {
        let query = SearchQuery::new(needle).with_sort(SortMode::Views);
        let results = search_at(&corpus, &query, NOW);
        for pair in results.windows(2) {
            prop_assert!(pair[0].views.unwrap_or(0) >= pair[1].views.unwrap_or(0));
        }
    }

    #[test]
    fn results_are_a_subset_of_the_corpus(corpus in corpus_strategy(), needle in "[a-z]{1,3}") {
        let results = search_at(&corpus, &SearchQuery::new(needle), NOW);
        for article in &results {
            prop_assert!(corpus.iter().any(|c| c.id == article.id));
        }
        prop_assert!(results.len() <= corpus.len());
    }

    #[test]
    fn sort_mode_changes_order_not_membership(corpus in corpus_strategy(), needle in "[a-z]{1,3}") {
        let by_relevance = search_at(&corpus, &SearchQuery::new(needle.clone()), NOW);
        let by_views = search_at(
            &corpus,
            &SearchQuery::new(needle).with_sort(SortMode::Views),
            NOW,
        );

        let mut relevance_ids: Vec<_> = by_relevance.iter().map(|a| a.id.clone()).collect();
        let mut views_ids: Vec<_> = by_views.iter().map(|a| a.id.clone()).collect();
        relevance_ids.sort();
        views_ids.sort();
        prop_assert_eq!(relevance_ids, views_ids);
    }
}
