// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy search index.
//!
//! Building the index normalizes every searchable value once (case folding,
//! diacritics, whitespace) and records its length norm, so a keystroke only
//! pays for matching. URLs are indexed as their host and path words, without
//! scheme or punctuation. The index is immutable after `build`; the cache in
//! [`cache`] decides when a new one is needed.
//!
//! # Matching
//!
//! The query is split into terms (see [`parse_query`]). An entry is a hit
//! iff **every** term matches at least one field. A term matches a field
//! value when some substring of the value is within `floor(threshold × len)`
//! edits of the term, wherever it sits in the value.
//!
//! # Invariants
//!
//! 1. **HITS_IN_SNAPSHOT**: every `SearchHit::position` indexes the entries the
//!    index was built from
//! 2. **HITS_BOUNDED**: `search` returns at most `limit` hits
//! 3. **HITS_SORTED**: hits are ordered by non-decreasing score
//!    (see [`compare_hits`])

pub mod cache;

pub use cache::IndexCache;

use crate::config::SearchOptions;
use crate::fuzzy::TermMatcher;
use crate::scoring::ranking::compare_hits;
use crate::scoring::{field_factor, field_norm, SearchField};
use crate::types::CatalogEntry;
use crate::utils::{normalize, parse_query, url_search_text};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One ranked result: a position in the snapshot and its relevance.
///
/// `score` is `None` for entries that came from filtering alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit {
    pub position: usize,
    pub score: Option<f64>,
}

#[derive(Debug, Clone)]
struct IndexedValue {
    text: String,
    norm: f64,
}

impl IndexedValue {
    fn new(raw: &str) -> Option<Self> {
        Self::from_text(normalize(raw))
    }

    fn from_text(text: String) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        Some(Self {
            norm: field_norm(&text),
            text,
        })
    }
}

#[derive(Debug, Clone)]
struct IndexedEntry {
    fields: [Vec<IndexedValue>; SearchField::COUNT],
}

impl IndexedEntry {
    fn new(entry: &CatalogEntry) -> Self {
        let one = |raw: &str| -> Vec<IndexedValue> { IndexedValue::new(raw).into_iter().collect() };
        let many = |raw: &[String]| -> Vec<IndexedValue> {
            raw.iter().filter_map(|v| IndexedValue::new(v)).collect()
        };
        Self {
            fields: [
                one(&entry.name),
                one(entry.description.as_deref().unwrap_or("")),
                many(&entry.category_names),
                IndexedValue::from_text(url_search_text(&entry.url)).into_iter().collect(),
                many(&entry.regions),
            ],
        }
    }
}

/// Weighted multi-field fuzzy index over one snapshot.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    entries: Vec<IndexedEntry>,
    names: Vec<String>,
    weights: [f64; SearchField::COUNT],
    threshold: f64,
    min_match_char_length: usize,
}

impl SearchIndex {
    /// Index `entries` in order. Hit positions refer to this order.
    pub fn build(entries: &[CatalogEntry], options: &SearchOptions) -> Self {
        let indexed: Vec<IndexedEntry> = {
            #[cfg(feature = "parallel")]
            {
                entries.par_iter().map(IndexedEntry::new).collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                entries.iter().map(IndexedEntry::new).collect()
            }
        };
        debug!(entries = indexed.len(), "built search index");

        Self {
            entries: indexed,
            names: entries.iter().map(|e| e.name.to_lowercase()).collect(),
            weights: options.weights.normalized(),
            threshold: options.threshold,
            min_match_char_length: options.min_match_char_length,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked hits for `query`, best first, at most `limit` of them.
    ///
    /// An empty query, or one whose every term is shorter than the minimum
    /// match length, returns no hits.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let terms = parse_query(query, self.min_match_char_length);
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }
        let matchers: Vec<TermMatcher> = terms
            .iter()
            .map(|t| TermMatcher::new(t, self.threshold, self.min_match_char_length))
            .collect();

        let score = |(position, entry): (usize, &IndexedEntry)| {
            self.score_entry(entry, &matchers).map(|s| SearchHit {
                position,
                score: Some(s),
            })
        };

        let mut hits: Vec<SearchHit> = {
            #[cfg(feature = "parallel")]
            {
                self.entries.par_iter().enumerate().filter_map(score).collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                self.entries.iter().enumerate().filter_map(score).collect()
            }
        };

        hits.sort_by(|a, b| compare_hits(a, b, |i| self.names[i].as_str()));
        hits.truncate(limit);
        debug!(query = %query, terms = terms.len(), hits = hits.len(), "fuzzy search");
        hits
    }

    /// Product of field factors over all terms, or `None` if a term matched nowhere.
    fn score_entry(&self, entry: &IndexedEntry, matchers: &[TermMatcher]) -> Option<f64> {
        let mut total = 1.0;
        for matcher in matchers {
            let mut matched = false;
            for field in SearchField::ALL {
                let weight = self.weights[field.index()];
                let best = entry.fields[field.index()]
                    .iter()
                    .filter_map(|value| {
                        matcher
                            .find(&value.text)
                            .map(|m| field_factor(m.score, weight, value.norm))
                    })
                    .min_by(|a, b| a.total_cmp(b));
                if let Some(factor) = best {
                    total *= factor;
                    matched = true;
                }
            }
            if !matched {
                return None;
            }
        }
        Some(total)
    }
}
