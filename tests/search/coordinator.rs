//! Coordinator state: deferral, pending signal, memoization, index reuse.

use crate::common::{coordinator_for, filters, ids, scenario_catalog, search_ids};
use sporjeger::testing::{make_entry, make_entry_in};
use sporjeger::{CacheKeyPolicy, CatalogStore, SearchCoordinator, SearchOptions};
use std::sync::Arc;

#[test]
fn test_pending_until_settled() {
    let mut search = coordinator_for(scenario_catalog());
    search.set_query("sho");
    search.set_query("shod");
    assert!(search.is_pending());
    assert_eq!(search.raw_query(), "shod");
    assert_eq!(search.deferred_query(), "");

    assert!(search.settle());
    assert!(!search.is_pending());
    assert_eq!(search.deferred_query(), "shod");
}

#[test]
fn test_results_follow_deferred_query_not_raw() {
    let mut search = coordinator_for(scenario_catalog());
    assert_eq!(search_ids(&mut search, "geolocation"), vec!["C"]);

    search.set_query("shodan");
    // Not settled: still the results for "geolocation".
    assert_eq!(ids(&search.results()), vec!["C"]);
}

#[test]
fn test_keystrokes_reuse_one_index() {
    let mut search = coordinator_for(scenario_catalog());
    for prefix in ["sh", "sho", "shod", "shoda", "shodan"] {
        search_ids(&mut search, prefix);
    }
    assert_eq!(search.rebuild_count(), 1);
}

#[test]
fn test_filter_changes_do_not_rebuild() {
    let mut search = coordinator_for(scenario_catalog());
    search_ids(&mut search, "shodan");
    search.set_filters(filters(&["price:free"]));
    assert_eq!(ids(&search.results()), vec!["B"]);
    search.set_filters(filters(&["price:paid"]));
    assert_eq!(ids(&search.results()), vec!["A"]);
    assert_eq!(search.rebuild_count(), 1);
}

#[test]
fn test_snapshot_replacement_is_picked_up() {
    let store = Arc::new(CatalogStore::with_entries(scenario_catalog()));
    let mut search = SearchCoordinator::new(Arc::clone(&store), SearchOptions::default()).unwrap();
    assert_eq!(search_ids(&mut search, "geolocation"), vec!["C"]);

    store.replace(
        vec![make_entry_in("D", "Google Maps", "geolocation", "Geolocation")],
        vec![],
    );
    assert_eq!(ids(&search.results()), vec!["D"]);
    assert_eq!(search.rebuild_count(), 2);
}

#[test]
fn test_entry_count_policy_serves_stale_index_after_same_size_refresh() {
    let store = Arc::new(CatalogStore::with_entries(vec![make_entry("1", "Shodan")]));
    let options = SearchOptions {
        cache_key: CacheKeyPolicy::EntryCount,
        ..SearchOptions::default()
    };
    let mut search = SearchCoordinator::new(Arc::clone(&store), options).unwrap();
    assert_eq!(search_ids(&mut search, "shodan"), vec!["1"]);

    // Same size, different tool: the old index still matches "shodan" at
    // position 0, which now points at "Maps".
    store.replace(vec![make_entry("2", "Maps")], vec![]);
    assert_eq!(ids(&search.results()), vec!["2"]);
    assert_eq!(search.rebuild_count(), 1);
}

#[test]
fn test_content_fingerprint_policy_rebuilds_after_same_size_refresh() {
    let store = Arc::new(CatalogStore::with_entries(vec![make_entry("1", "Shodan")]));
    let mut search = SearchCoordinator::new(Arc::clone(&store), SearchOptions::default()).unwrap();
    assert_eq!(search_ids(&mut search, "shodan"), vec!["1"]);

    store.replace(vec![make_entry("2", "Maps")], vec![]);
    assert!(ids(&search.results()).is_empty());
    assert_eq!(search.rebuild_count(), 2);
}

#[test]
fn test_filter_editing() {
    let mut search = coordinator_for(scenario_catalog());
    assert!(search.add_filter("region:NO".parse().unwrap()));
    assert!(!search.add_filter("region:NO".parse().unwrap()));
    assert!(search.add_filter("price:free".parse().unwrap()));
    assert_eq!(search.filters().len(), 2);

    assert!(search.remove_filter(&"region:NO".parse().unwrap()));
    assert_eq!(search.remove_last_filter().map(|f| f.value), Some("free".to_string()));
    assert!(search.remove_last_filter().is_none());
}
