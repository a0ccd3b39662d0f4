// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::error::Error;

use newsrank::{
    display_excerpt, explain_score, normalize, search_scored_at, unix_now, DocumentStore,
    MemoryStore, RecentSearches, ScoredArticle, SearchQuery, SortMode, Timestamp,
};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            articles,
            category,
            sort,
            limit,
            explain,
            recent_file,
        } => run_search(
            &query,
            &articles,
            category.as_deref(),
            &sort,
            limit,
            explain,
            recent_file.as_deref(),
        ),
        Commands::Trending { articles, count } => run_trending(&articles, count),
        Commands::Recent { recent_file } => run_recent(&recent_file),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// ANSI styling, enabled only when stdout is a TTY.
struct Style {
    bold: &'static str,
    dim: &'static str,
    cyan: &'static str,
    reset: &'static str,
}

impl Style {
    fn detect() -> Self {
        if atty::is(atty::Stream::Stdout) {
            Style {
                bold: "\x1b[1m",
                dim: "\x1b[2m",
                cyan: "\x1b[36m",
                reset: "\x1b[0m",
            }
        } else {
            Style {
                bold: "",
                dim: "",
                cyan: "",
                reset: "",
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn run_search(
    query_text: &str,
    articles_path: &str,
    category: Option<&str>,
    sort: &str,
    limit: Option<usize>,
    explain: bool,
    recent_file: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let sort_mode: SortMode = sort.parse()?;

    let store = MemoryStore::load(articles_path)?;
    let corpus = store.published_articles(category)?;

    let mut query = SearchQuery::new(query_text).with_sort(sort_mode);
    if let Some(category) = category {
        // The store already filtered; setting it on the query keeps the
        // invariant checks honest.
        query = query.with_category(category);
    }

    let now = unix_now();
    let mut results = search_scored_at(&corpus, &query, now);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if let Some(path) = recent_file {
        let mut recent = RecentSearches::load(path)?;
        recent.record(query_text);
        recent.save(path)?;
    }

    let style = Style::detect();
    if results.is_empty() {
        println!("no results for '{}'", query_text.trim());
        return Ok(());
    }

    println!(
        "{} result(s) for '{}' sorted by {}",
        results.len(),
        query_text.trim(),
        sort_mode
    );
    for (rank, scored) in results.iter().enumerate() {
        print_result(&style, rank + 1, scored);
        if explain {
            print_breakdown(&style, scored, &normalize(query_text), now);
        }
    }

    Ok(())
}

fn print_result(style: &Style, rank: usize, scored: &ScoredArticle) {
    let article = &scored.article;
    println!(
        "{:>3}. {}{}{} {}[{}]{}",
        rank, style.bold, article.title, style.reset, style.cyan, scored.score, style.reset
    );

    let excerpt = display_excerpt(article, 80);
    if !excerpt.is_empty() {
        println!("     {}{}{}", style.dim, excerpt, style.reset);
    }

    let mut meta = Vec::new();
    if !article.category.is_empty() {
        meta.push(article.category.clone());
    }
    if article.view_count() > 0 {
        meta.push(format!("{} views", article.view_count()));
    }
    if !article.tags.is_empty() {
        meta.push(article.tags.join(", "));
    }
    if !meta.is_empty() {
        println!("     {}{}{}", style.dim, meta.join(" · "), style.reset);
    }
}

fn print_breakdown(style: &Style, scored: &ScoredArticle, query: &str, now: Timestamp) {
    let breakdown = explain_score(&scored.article, query, now);
    for entry in &breakdown.entries {
        println!(
            "     {}{:>16} +{}{}",
            style.dim,
            entry.rule.as_str(),
            entry.points,
            style.reset
        );
    }
}

fn run_trending(articles_path: &str, count: usize) -> Result<(), Box<dyn Error>> {
    let store = MemoryStore::load(articles_path)?;
    let top = store.top_by_views(count)?;

    let style = Style::detect();
    if top.is_empty() {
        println!("no published articles in snapshot");
        return Ok(());
    }

    for (rank, article) in top.iter().enumerate() {
        println!(
            "{:>3}. {}{}{} {}({} views){}",
            rank + 1,
            style.bold,
            article.title,
            style.reset,
            style.dim,
            article.view_count(),
            style.reset
        );
    }

    Ok(())
}

fn run_recent(recent_path: &str) -> Result<(), Box<dyn Error>> {
    let recent = RecentSearches::load(recent_path)?;

    if recent.is_empty() {
        println!("no recent searches");
        return Ok(());
    }

    for query in recent.iter() {
        println!("{}", query);
    }

    Ok(())
}
