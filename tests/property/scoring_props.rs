//! Properties of the relevance score itself.

use super::common::{make_article, NOW};
use newsrank::{
    explain_score, recency_bonus, relevance_score, Article, EXACT_TITLE_SCORE,
    EXCERPT_MATCH_SCORE, RECENT_MONTH_BONUS, RECENT_WEEK_BONUS, TAG_MATCH_SCORE,
};
use proptest::prelude::*;

fn article_strategy() -> impl Strategy<Value = Article> {
    let word = proptest::string::string_regex("[a-z]{2,8}").unwrap().boxed();
    let words = |n| proptest::collection::vec(word.clone(), 1..n);
    (
        words(5),
        words(8),
        proptest::collection::vec(proptest::string::string_regex("[a-z]{2,8}").unwrap(), 0..4),
        proptest::option::of(0i64..3_000_000_000),
    )
        .prop_map(|(title, excerpt, tags, created_at)| Article {
            excerpt: excerpt.join(" "),
            tags,
            created_at,
            ..make_article("p1", &title.join(" "))
        })
}

proptest! {
    #[test]
    fn breakdown_always_sums_to_score(article in article_strategy(), query in "[a-z]{1,4}") {
        let score = relevance_score(&article, &query, NOW);
        let breakdown = explain_score(&article, &query, NOW);
        prop_assert_eq!(breakdown.total(), score);
    }

    #[test]
    fn score_is_bounded_by_rule_maxima(article in article_strategy(), query in "[a-z]{1,4}") {
        let score = relevance_score(&article, &query, NOW);
        let max_possible = EXACT_TITLE_SCORE
            + article.tags.len() as u32 * TAG_MATCH_SCORE
            + EXCERPT_MATCH_SCORE
            + RECENT_WEEK_BONUS;
        prop_assert!(score <= max_possible);
    }

    #[test]
    fn non_matching_article_scores_only_recency(created_at in proptest::option::of(0i64..3_000_000_000)) {
        let article = Article {
            created_at,
            ..make_article("p1", "totally unrelated")
        };
        // Query can't appear in any field.
        let score = relevance_score(&article, "zzzzqqqq", NOW);
        prop_assert_eq!(score, recency_bonus(created_at, NOW));
    }

    #[test]
    fn recency_bonus_is_monotone_in_freshness(age_a in 0i64..400, age_b in 0i64..400) {
        let (newer, older) = if age_a <= age_b { (age_a, age_b) } else { (age_b, age_a) };
        let newer_bonus = recency_bonus(Some(NOW - newer * 86_400), NOW);
        let older_bonus = recency_bonus(Some(NOW - older * 86_400), NOW);
        prop_assert!(newer_bonus >= older_bonus);
    }

    #[test]
    fn recency_bonus_takes_known_values(created_at in proptest::option::of(0i64..3_000_000_000)) {
        let bonus = recency_bonus(created_at, NOW);
        prop_assert!(bonus == 0 || bonus == RECENT_MONTH_BONUS || bonus == RECENT_WEEK_BONUS);
    }
}
