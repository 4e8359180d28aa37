// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Live search: the query, the active filters, and what they produce.
//!
//! | query     | filters | results                                              |
//! |-----------|---------|------------------------------------------------------|
//! | empty     | none    | nothing                                              |
//! | empty     | ≥1      | filtered entries, snapshot order                     |
//! | non-empty | none    | fuzzy hits, ranked, capped at the limit              |
//! | non-empty | ≥1      | fuzzy hits that also pass the filters, ranked order  |
//!
//! The raw query updates on every keystroke. Results are computed from a
//! deferred copy that only moves on [`SearchCoordinator::settle`], so the
//! caller decides when the expensive part runs and can show a pending
//! indicator in between. Filter changes apply immediately.

use crate::config::SearchOptions;
use crate::deferred::Deferred;
use crate::error::OptionsError;
use crate::filter::{filter_entries, ParsedFilters};
use crate::index::{IndexCache, SearchHit};
use crate::snapshot::{CatalogStore, Snapshot};
use crate::suggest::{suggest_filters, SUGGESTION_LIMIT};
use crate::types::{ActiveFilters, CatalogEntry, EntryId, FacetChoice, FacetFilter};
use std::sync::Arc;
use tracing::trace;

/// Results of one evaluation, tied to the snapshot they index into.
#[derive(Debug, Clone)]
pub struct SearchResults {
    snapshot: Arc<Snapshot>,
    hits: Vec<SearchHit>,
}

impl SearchResults {
    pub fn empty(snapshot: Arc<Snapshot>) -> Self {
        Self {
            snapshot,
            hits: Vec::new(),
        }
    }

    pub fn hits(&self) -> &[SearchHit] {
        &self.hits
    }

    pub fn snapshot(&self) -> &Arc<Snapshot> {
        &self.snapshot
    }

    /// Matching entries in result order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> + '_ {
        let entries = self.snapshot.entries();
        self.hits.iter().filter_map(move |h| entries.get(h.position))
    }

    pub fn ids(&self) -> Vec<&EntryId> {
        self.entries().map(|e| &e.id).collect()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

/// Evaluate `query` and `filters` against `snapshot`.
///
/// Pure apart from the index cache: an index is only built when the query
/// is non-empty and the cache has nothing for this snapshot.
pub fn evaluate(
    snapshot: &Arc<Snapshot>,
    cache: &IndexCache,
    options: &SearchOptions,
    query: &str,
    filters: &ActiveFilters,
) -> SearchResults {
    let query = query.trim();
    let parsed = ParsedFilters::from(filters);

    if snapshot.is_empty() || (query.is_empty() && parsed.is_empty()) {
        return SearchResults::empty(Arc::clone(snapshot));
    }

    let hits = if query.is_empty() {
        filter_entries(snapshot.entries(), &parsed)
            .into_iter()
            .map(|position| SearchHit {
                position,
                score: None,
            })
            .collect()
    } else {
        let index = cache.get_or_build(snapshot, options);
        let mut hits = index.search(query, options.limit);
        if !parsed.is_empty() {
            let entries = snapshot.entries();
            hits.retain(|h| entries.get(h.position).is_some_and(|e| parsed.accepts(e)));
        }
        hits
    };

    SearchResults {
        snapshot: Arc::clone(snapshot),
        hits,
    }
}

#[derive(Debug)]
struct Memo {
    revision: u64,
    query: String,
    filters: ActiveFilters,
    results: SearchResults,
}

/// Single-threaded search state for one search box.
#[derive(Debug)]
pub struct SearchCoordinator {
    store: Arc<CatalogStore>,
    options: SearchOptions,
    cache: IndexCache,
    query: Deferred<String>,
    filters: ActiveFilters,
    memo: Option<Memo>,
}

impl SearchCoordinator {
    pub fn new(store: Arc<CatalogStore>, options: SearchOptions) -> Result<Self, OptionsError> {
        options.validate()?;
        Ok(Self {
            store,
            options,
            cache: IndexCache::new(),
            query: Deferred::default(),
            filters: ActiveFilters::new(),
            memo: None,
        })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Record a keystroke. Cheap; results follow on the next `settle`.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query.set(text.into());
    }

    /// What the input box shows.
    pub fn raw_query(&self) -> &str {
        self.query.raw()
    }

    /// What the results are computed from.
    pub fn deferred_query(&self) -> &str {
        self.query.applied()
    }

    /// Let the deferred query catch up with the raw one.
    pub fn settle(&mut self) -> bool {
        self.query.settle()
    }

    /// True while the shown results lag the latest keystroke.
    pub fn is_pending(&self) -> bool {
        self.query.is_pending()
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    pub fn set_filters(&mut self, filters: ActiveFilters) {
        self.filters = filters;
    }

    /// Returns false if the same selection was already active.
    pub fn add_filter(&mut self, filter: FacetFilter) -> bool {
        self.filters.add(filter)
    }

    pub fn remove_filter(&mut self, filter: &FacetFilter) -> bool {
        self.filters.remove(filter)
    }

    /// Backspace in an empty search box drops the newest filter.
    pub fn remove_last_filter(&mut self) -> Option<FacetFilter> {
        if !self.query.raw().is_empty() {
            return None;
        }
        self.filters.remove_last()
    }

    /// Clear the query and every filter.
    pub fn clear_all(&mut self) {
        self.query.set(String::new());
        self.filters.clear();
    }

    /// Filter choices matching what is typed right now.
    pub fn suggestions(&self) -> Vec<FacetChoice> {
        let snapshot = self.store.current();
        suggest_filters(
            self.query.raw(),
            snapshot.vocabulary(),
            &self.filters,
            SUGGESTION_LIMIT,
        )
    }

    /// Turn a suggestion into an active filter and empty the search box.
    pub fn accept_suggestion(&mut self, choice: &FacetChoice) -> bool {
        let added = self.filters.add(choice.to_filter());
        self.query.set(String::new());
        added
    }

    /// Results for the deferred query, the active filters and the current snapshot.
    ///
    /// Repeated calls with nothing changed return the memoized results.
    pub fn results(&mut self) -> SearchResults {
        let snapshot = self.store.current();
        let query = self.query.applied();

        if let Some(memo) = &self.memo {
            if memo.revision == snapshot.revision()
                && memo.query == *query
                && memo.filters == self.filters
            {
                trace!(query = %query, "memoized results");
                return memo.results.clone();
            }
        }

        let results = evaluate(&snapshot, &self.cache, &self.options, query, &self.filters);
        self.memo = Some(Memo {
            revision: snapshot.revision(),
            query: query.clone(),
            filters: self.filters.clone(),
            results: results.clone(),
        });
        results
    }

    /// How many times the search index has been built.
    pub fn rebuild_count(&self) -> usize {
        self.cache.rebuild_count()
    }
}
