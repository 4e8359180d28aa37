//! End-to-end catalog scenarios: query and filters through the coordinator.

use crate::common::{coordinator_for, filters, ids, make_entry, scenario_catalog, search_ids};
use sporjeger::{FacetDimension, FacetFilter};

#[test]
fn test_shodan_then_free() {
    let mut search = coordinator_for(scenario_catalog());

    assert_eq!(search_ids(&mut search, "shodan"), vec!["A", "B"]);

    search.add_filter(FacetFilter::new(FacetDimension::Price, "free", "Gratis"));
    assert_eq!(ids(&search.results()), vec!["B"]);
}

#[test]
fn test_maps_matches_only_the_maps_tool() {
    let mut search = coordinator_for(scenario_catalog());
    assert_eq!(search_ids(&mut search, "maps"), vec!["C"]);
}

#[test]
fn test_url_scheme_is_not_searchable() {
    let mut search = coordinator_for(scenario_catalog());
    assert!(search_ids(&mut search, "http").is_empty());
    assert!(search_ids(&mut search, "https").is_empty());
    assert!(search_ids(&mut search, "www").is_empty());
}

#[test]
fn test_empty_query_with_category_filter() {
    let mut search = coordinator_for(scenario_catalog());
    search.set_filters(filters(&["category:geolocation"]));
    assert_eq!(ids(&search.results()), vec!["C"]);
}

#[test]
fn test_empty_query_without_filters_shows_nothing() {
    let mut search = coordinator_for(scenario_catalog());
    assert!(search_ids(&mut search, "").is_empty());
    assert!(search_ids(&mut search, "   ").is_empty());
    assert_eq!(search.rebuild_count(), 0);
}

#[test]
fn test_filter_only_results_keep_snapshot_order() {
    let mut search = coordinator_for(scenario_catalog());
    search.set_filters(filters(&["price:free"]));
    let results = search.results();
    assert_eq!(ids(&results), vec!["B", "C"]);
    assert!(results.hits().iter().all(|h| h.score.is_none()));
}

#[test]
fn test_region_global_needs_explicit_selection() {
    let mut e = make_entry("E", "Worldwide Registry");
    e.regions = vec!["global".into()];
    let mut n = make_entry("N", "Brreg");
    n.regions = vec!["NO".into()];
    let mut search = coordinator_for(vec![e, n]);

    search.set_filters(filters(&["region:NO"]));
    assert_eq!(ids(&search.results()), vec!["N"]);

    search.set_filters(filters(&["region:NO", "region:global"]));
    assert_eq!(ids(&search.results()), vec!["E", "N"]);
}

#[test]
fn test_query_too_short_is_empty_not_error() {
    let mut search = coordinator_for(scenario_catalog());
    assert!(search_ids(&mut search, "s").is_empty());
    search.set_filters(filters(&["price:free"]));
    assert!(search_ids(&mut search, "m").is_empty());
}

#[test]
fn test_empty_snapshot_yields_nothing() {
    let mut search = coordinator_for(vec![]);
    assert!(search_ids(&mut search, "shodan").is_empty());
    search.set_filters(filters(&["price:free"]));
    assert!(search_ids(&mut search, "").is_empty());
}

#[test]
fn test_unknown_filter_value_matches_nothing() {
    let mut search = coordinator_for(scenario_catalog());
    search.set_filters(filters(&["type:satellite"]));
    assert!(ids(&search.results()).is_empty());
}
