// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full query path.
//!
//! Any query string and any filter selection must produce a bounded, sorted
//! result list without panicking.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sporjeger::testing::synthetic_catalog;
use sporjeger::{
    evaluate, ActiveFilters, CatalogStore, FacetDimension, FacetFilter, IndexCache, SearchOptions,
};
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    filters: Vec<(u8, String)>,
}

static STORE: OnceLock<CatalogStore> = OnceLock::new();
static CACHE: OnceLock<IndexCache> = OnceLock::new();

fuzz_target!(|input: QueryInput| {
    let store = STORE.get_or_init(|| CatalogStore::with_entries(synthetic_catalog(200)));
    let cache = CACHE.get_or_init(IndexCache::new);
    let options = SearchOptions::default();

    let query: String = input.query.chars().take(100).collect();
    let filters: ActiveFilters = input
        .filters
        .into_iter()
        .take(6)
        .map(|(d, value)| {
            let dimension = FacetDimension::ALL[usize::from(d) % FacetDimension::ALL.len()];
            FacetFilter::bare(dimension, value)
        })
        .collect();

    let snapshot = store.current();
    let results = evaluate(&snapshot, cache, &options, &query, &filters);

    assert!(results.len() <= snapshot.len());
    if !query.trim().is_empty() {
        assert!(results.len() <= options.limit);
        for pair in results.hits().windows(2) {
            assert!(pair[0].score <= pair[1].score);
        }
    }
});
