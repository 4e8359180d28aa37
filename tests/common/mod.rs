//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sporjeger::{
    ActiveFilters, CatalogEntry, CatalogStore, FacetFilter, SearchCoordinator, SearchOptions,
    SearchResults,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Re-export canonical test utilities from sporjeger::testing
pub use sporjeger::testing::{make_entry, make_entry_in, scenario_catalog, synthetic_catalog};

// ============================================================================
// COORDINATOR HELPERS
// ============================================================================

/// Coordinator over `entries` with default options.
pub fn coordinator_for(entries: Vec<CatalogEntry>) -> SearchCoordinator {
    let store = Arc::new(CatalogStore::with_entries(entries));
    SearchCoordinator::new(store, SearchOptions::default()).unwrap()
}

/// Set and settle a query, then return the result ids.
pub fn search_ids(search: &mut SearchCoordinator, query: &str) -> Vec<String> {
    search.set_query(query);
    search.settle();
    ids(&search.results())
}

pub fn ids(results: &SearchResults) -> Vec<String> {
    results
        .ids()
        .into_iter()
        .map(|id| id.as_str().to_string())
        .collect()
}

/// Parse `["price:free", "region:NO"]` into active filters.
pub fn filters(specs: &[&str]) -> ActiveFilters {
    specs
        .iter()
        .map(|s| s.parse::<FacetFilter>().unwrap())
        .collect()
}

// ============================================================================
// FIXTURE FILES
// ============================================================================

/// Write `entries` as a bare JSON array catalog.
pub fn write_catalog(dir: &Path, name: &str, entries: &[CatalogEntry]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(entries).unwrap()).unwrap();
    path
}
