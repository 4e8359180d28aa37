//! Background live search: convergence and the pending signal.

use crate::common::{filters, ids, scenario_catalog};
use sporjeger::{CatalogStore, LiveSearch, SearchOptions};
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(10);

#[test]
fn test_burst_of_keystrokes_converges() {
    let store = Arc::new(CatalogStore::with_entries(sporjeger::testing::synthetic_catalog(1000)));
    let mut live = LiveSearch::spawn(store, SearchOptions::default()).unwrap();

    let word = "satellite";
    for end in 1..=word.len() {
        live.set_query(&word[..end]);
    }
    assert!(live.wait_until_settled(WAIT));
    assert!(!live.is_pending());
    assert!(!live.results().unwrap().is_empty());
}

#[test]
fn test_same_answers_as_coordinator() {
    let store = Arc::new(CatalogStore::with_entries(scenario_catalog()));
    let mut live = LiveSearch::spawn(store, SearchOptions::default()).unwrap();

    live.set_query("shodan");
    assert!(live.wait_until_settled(WAIT));
    assert_eq!(ids(&live.results().unwrap()), vec!["A", "B"]);

    live.set_filters(filters(&["price:free"]));
    assert!(live.wait_until_settled(WAIT));
    assert_eq!(ids(&live.results().unwrap()), vec!["B"]);

    live.set_query("");
    live.set_filters(filters(&["category:geolocation"]));
    assert!(live.wait_until_settled(WAIT));
    assert_eq!(ids(&live.results().unwrap()), vec!["C"]);
}
