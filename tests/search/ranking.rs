//! Ranking: field weights, exactness, and deterministic tiebreaks.

use crate::common::{make_entry, make_entry_in};
use sporjeger::{SearchIndex, SearchOptions};

fn positions(index: &SearchIndex, query: &str) -> Vec<usize> {
    index.search(query, 50).iter().map(|h| h.position).collect()
}

#[test]
fn test_name_outranks_description() {
    let mut in_description = make_entry("1", "Flight Radar");
    in_description.description = Some("Track vessels and aircraft".into());
    let in_name = make_entry("2", "Vessel Finder");

    let index = SearchIndex::build(&[in_description, in_name], &SearchOptions::default());
    assert_eq!(positions(&index, "vessel"), vec![1, 0]);
}

#[test]
fn test_exact_outranks_typo() {
    let typo = make_entry("1", "Satelite Map");
    let exact = make_entry("2", "Satellite Map");
    let index = SearchIndex::build(&[typo, exact], &SearchOptions::default());
    assert_eq!(positions(&index, "satellite"), vec![1, 0]);
}

#[test]
fn test_category_name_is_searchable() {
    let tagged = make_entry_in("1", "Overpass Turbo", "geolocation", "Geolocation");
    let other = make_entry_in("2", "Hunter", "people", "People search");
    let index = SearchIndex::build(&[tagged, other], &SearchOptions::default());
    assert_eq!(positions(&index, "geolocation"), vec![0]);
}

#[test]
fn test_ties_break_by_name_then_position() {
    let entries = vec![
        make_entry("1", "Whois B"),
        make_entry("2", "Whois A"),
        make_entry("3", "Whois A"),
    ];
    let index = SearchIndex::build(&entries, &SearchOptions::default());
    assert_eq!(positions(&index, "whois"), vec![1, 2, 0]);
}

#[test]
fn test_scores_never_decrease() {
    let entries = sporjeger::testing::synthetic_catalog(300);
    let index = SearchIndex::build(&entries, &SearchOptions::default());
    for query in ["shodan", "sattelite", "whois domain", "flihgt"] {
        let hits = index.search(query, 50);
        assert!(hits.len() <= 50);
        for pair in hits.windows(2) {
            assert!(pair[0].score <= pair[1].score, "{query}: {:?}", pair);
        }
    }
}

#[test]
fn test_custom_weights_change_order() {
    let mut by_url = make_entry("1", "Lookup");
    by_url.url = "https://whois.example".into();
    let mut by_description = make_entry("2", "Lookup");
    by_description.description = Some("whois".into());

    let entries = vec![by_url, by_description];
    let default = SearchIndex::build(&entries, &SearchOptions::default());
    assert_eq!(positions(&default, "whois"), vec![1, 0]);

    let mut options = SearchOptions::default();
    options.weights.url = 10.0;
    let url_heavy = SearchIndex::build(&entries, &options);
    assert_eq!(positions(&url_heavy, "whois"), vec![0, 1]);
}
