//! Free-text to identifier resolution.
//!
//! Turning what a user typed ("blinding lights weeknd") into catalog
//! identifiers is a best-effort text problem, kept apart from the numeric
//! engine behind the [`TextResolver`] trait. [`FuzzyIndex`] is the built-in
//! implementation: fuzzy matching over `"title - artist"` strings.
//!
//! # Example
//!
//! ```
//! use sonance::prelude::*;
//! use sonance::search::{FuzzyIndex, TextResolver};
//!
//! let catalog = Catalog::new(
//!     vec!["energy".to_string()],
//!     vec![
//!         Item::new("t1", vec![0.7]).with_title("Blinding Lights").with_artist("The Weeknd"),
//!         Item::new("t2", vec![0.5]).with_title("Rolling in the Deep").with_artist("Adele"),
//!     ],
//! ).unwrap();
//!
//! let index = FuzzyIndex::build(&catalog);
//! let hits = index.search("blinding lights", 5, 70.0);
//! assert_eq!(hits[0].id, "t1");
//!
//! let ids = index.resolve_text("Blinding Lights by The Weeknd; rolling in the deep adele");
//! assert_eq!(ids, vec!["t1", "t2"]);
//! ```

mod fuzzy;

pub use fuzzy::{partial_ratio, ratio, token_set_ratio, weighted_ratio};

use crate::catalog::Catalog;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Turns free text into catalog identifiers.
pub trait TextResolver {
    /// Identifiers the text refers to, best guess first, without repeats.
    /// Unresolvable text yields an empty list.
    fn resolve_text(&self, query: &str) -> Vec<String>;
}

/// Search limits used by [`FuzzyIndex`] when acting as a [`TextResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum matches returned by a search
    pub limit: usize,
    /// Minimum score (0-100) for a match to count
    pub score_cutoff: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            score_cutoff: 70.0,
        }
    }
}

/// One fuzzy search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    /// `"title - artist"` string that matched
    pub display: String,
    /// Item identifier
    pub id: String,
    /// Match score in [0, 100]
    pub score: f32,
}

#[derive(Debug, Clone)]
struct Entry {
    display: String,
    normalized: String,
    id: String,
}

/// Fuzzy title/artist index over a catalog.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    entries: Vec<Entry>,
    config: SearchConfig,
}

impl FuzzyIndex {
    /// Indexes every catalog item by its display name.
    #[must_use]
    pub fn build(catalog: &Catalog) -> Self {
        let entries = catalog
            .items()
            .iter()
            .map(|item| {
                let display = item.display_name();
                Entry {
                    normalized: fuzzy::normalize(&display),
                    display,
                    id: item.id.clone(),
                }
            })
            .collect();
        Self {
            entries,
            config: SearchConfig::default(),
        }
    }

    /// Replaces the search limits used by [`TextResolver::resolve_text`].
    #[must_use]
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// The active search limits.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of indexed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best matches for `query`, highest score first (ties keep catalog
    /// order), at most `limit`, none below `score_cutoff`.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize, score_cutoff: f32) -> Vec<SearchMatch> {
        let query = fuzzy::normalize(query);
        if query.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut hits: Vec<(usize, f32)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, fuzzy::weighted_ratio_normalized(&query, &entry.normalized)))
            .filter(|&(_, score)| score >= score_cutoff)
            .collect();

        hits.sort_by(|a, b| b.1.total_cmp(&a.1));

        hits.into_iter()
            .take(limit)
            .map(|(i, score)| SearchMatch {
                display: self.entries[i].display.clone(),
                id: self.entries[i].id.clone(),
                score,
            })
            .collect()
    }
}

impl TextResolver for FuzzyIndex {
    /// Splits the query on `;` and newlines and keeps the best match per
    /// fragment.
    fn resolve_text(&self, query: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        query
            .split(|c: char| c == ';' || c == '\n')
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .filter_map(|fragment| {
                self.search(fragment, 1, self.config.score_cutoff)
                    .into_iter()
                    .next()
            })
            .filter(|hit| seen.insert(hit.id.clone()))
            .map(|hit| hit.id)
            .collect()
    }
}
