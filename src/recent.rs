// Copyright 2026-present TrendingTech Daily
// SPDX-License-Identifier: Apache-2.0

//! Recent-searches list: the small client-side history shown under the
//! search box.
//!
//! This is deliberately separate from the ranking contract - it's a capped,
//! persisted list of past query strings, nothing more. Entries are
//! most-recent-first, deduplicated on the normalized query, and blank
//! queries are never recorded.

use crate::utils::normalize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Maximum number of entries kept.
pub const MAX_RECENT: usize = 5;

/// A capped, most-recent-first list of past search queries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches {
    entries: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        RecentSearches::default()
    }

    /// Record a query, moving it to the front.
    ///
    /// The query is stored as typed (trimmed), but deduplication compares
    /// normalized forms, so "AI Chips" replaces an earlier "ai chips".
    /// Queries that normalize to the empty string are ignored.
    pub fn record(&mut self, query: &str) {
        let key = normalize(query);
        if key.is_empty() {
            return;
        }

        self.entries.retain(|existing| normalize(existing) != key);
        self.entries.insert(0, query.trim().to_string());
        self.entries.truncate(MAX_RECENT);
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a persisted list from JSON bytes.
    ///
    /// Oversized or un-normalized persisted data (e.g. written by an older
    /// client) is re-capped on load.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<Self> {
        let mut recent: RecentSearches = serde_json::from_reader(reader)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        recent.entries.truncate(MAX_RECENT);
        Ok(recent)
    }

    /// Write the list as JSON.
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        serde_json::to_writer(writer, self).map_err(io::Error::from)
    }

    /// Load from a JSON file; a missing file is an empty list.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        match fs::File::open(path) {
            Ok(file) => RecentSearches::from_reader(io::BufReader::new(file)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(RecentSearches::new()),
            Err(e) => Err(e),
        }
    }

    /// Save to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        self.write(&mut file)
    }
}
