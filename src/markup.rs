// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! Markup stripping and the excerpt display fallback.
//!
//! Article bodies arrive as rich-text/HTML. Matching runs over them as-is
//! (see [`crate::search::haystack`]), but anything user-facing goes through
//! [`display_excerpt`], which prefers the stored excerpt and falls back to
//! a stripped, truncated slice of the body.

use crate::types::Article;

/// Strip tags and decode the handful of entities that show up in article
/// bodies.
///
/// This is a display helper, not a sanitizer: it removes `<...>` spans and
/// maps `&amp;`, `&lt;`, `&gt;`, `&quot;`, `&#39;` and `&nbsp;` to their
/// characters. Unterminated tags are dropped to the end of input. Runs of
/// whitespace left behind by block tags collapse to single spaces.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '<' => {
                for inner in chars.by_ref() {
                    if inner == '>' {
                        break;
                    }
                }
                // Tags separate words ("</p><p>" must not glue sentences).
                out.push(' ');
            }
            '&' => {
                let mut entity = String::new();
                while let Some(&next) = chars.peek() {
                    if next == ';' || entity.len() > 6 {
                        break;
                    }
                    entity.push(next);
                    chars.next();
                }
                match decode_entity(&entity) {
                    Some(decoded) if chars.peek() == Some(&';') => {
                        chars.next();
                        out.push_str(decoded);
                    }
                    // Not a recognized entity: keep the raw text.
                    _ => {
                        out.push('&');
                        out.push_str(&entity);
                    }
                }
            }
            _ => out.push(c),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn decode_entity(name: &str) -> Option<&'static str> {
    match name {
        "amp" => Some("&"),
        "lt" => Some("<"),
        "gt" => Some(">"),
        "quot" => Some("\""),
        "#39" | "apos" => Some("'"),
        "nbsp" => Some(" "),
        _ => None,
    }
}

/// The excerpt to display for an article.
///
/// Returns the stored `excerpt` when present; otherwise strips markup from
/// `content` and truncates to at most `max_chars` characters (not bytes -
/// truncation must never split a multi-byte character), appending an
/// ellipsis when anything was cut.
pub fn display_excerpt(article: &Article, max_chars: usize) -> String {
    if !article.excerpt.is_empty() {
        return article.excerpt.clone();
    }

    let stripped = strip_markup(&article.content);
    truncate_chars(&stripped, max_chars)
}

/// Truncate to `max_chars` characters on a char boundary, appending `…`
/// when the input was longer.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            let mut truncated = text[..byte_idx].trim_end().to_string();
            truncated.push('…');
            truncated
        }
        None => text.to_string(),
    }
}
