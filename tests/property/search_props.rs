//! Search invariants: bounds, ordering, exact and near-miss matches.

use proptest::prelude::*;
use sporjeger::testing::make_entry;
use sporjeger::{CatalogEntry, CatalogStore, SearchCoordinator, SearchIndex, SearchOptions};
use std::sync::Arc;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{4,8}").unwrap()
}

fn catalog() -> impl Strategy<Value = Vec<CatalogEntry>> {
    prop::collection::vec(prop::collection::vec(word(), 1..4), 1..30).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, words)| make_entry(&i.to_string(), &words.join(" ")))
            .collect()
    })
}

/// One single-character edit of `word` at `at`: 0 substitutes, 1 deletes, 2 inserts.
fn perturb(word: &str, at: usize, kind: u8, with: char) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    let at = at % chars.len();
    match kind % 3 {
        0 => chars[at] = with,
        1 => {
            chars.remove(at);
        }
        _ => chars.insert(at, with),
    }
    chars.into_iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Hits come from the catalog, respect the limit, and are sorted by score.
    #[test]
    fn prop_hits_bounded_and_sorted(
        entries in catalog(),
        query in word(),
        limit in 1usize..60,
    ) {
        let index = SearchIndex::build(&entries, &SearchOptions::default());
        let hits = index.search(&query, limit);
        prop_assert!(hits.len() <= limit);
        for hit in &hits {
            prop_assert!(hit.position < entries.len());
            prop_assert!(hit.score.is_some());
        }
        for pair in hits.windows(2) {
            prop_assert!(pair[0].score <= pair[1].score);
        }
    }

    /// A word taken verbatim from an entry's name always finds that entry.
    #[test]
    fn prop_exact_word_always_matches(entries in catalog(), pick in any::<prop::sample::Index>()) {
        let i = pick.index(entries.len());
        let first = entries[i].name.split(' ').next().unwrap().to_string();
        let hits = SearchIndex::build(&entries, &SearchOptions::default()).search(&first, entries.len());
        prop_assert!(hits.iter().any(|h| h.position == i));
    }

    /// One edit to a word of four or more letters still finds the entry.
    #[test]
    fn prop_single_edit_still_matches(
        entries in catalog(),
        pick in any::<prop::sample::Index>(),
        at in 0usize..8,
        kind in 0u8..3,
        with in prop::char::range('a', 'z'),
    ) {
        let i = pick.index(entries.len());
        let first = entries[i].name.split(' ').next().unwrap().to_string();
        let query = perturb(&first, at, kind, with);
        let hits = SearchIndex::build(&entries, &SearchOptions::default()).search(&query, entries.len());
        prop_assert!(hits.iter().any(|h| h.position == i), "query={:?} name={:?}", query, entries[i].name);
    }

    /// The empty query is empty at the coordinator, and builds no index.
    #[test]
    fn prop_empty_query_is_empty(entries in catalog(), blanks in "[ \t]{0,3}") {
        let store = Arc::new(CatalogStore::with_entries(entries));
        let mut search = SearchCoordinator::new(store, SearchOptions::default()).unwrap();
        search.set_query(blanks);
        search.settle();
        prop_assert!(search.results().is_empty());
        prop_assert_eq!(search.rebuild_count(), 0);
    }

    /// Searching repeatedly against an unchanged snapshot builds one index.
    #[test]
    fn prop_unchanged_snapshot_builds_once(
        entries in catalog(),
        queries in prop::collection::vec(word(), 1..6),
    ) {
        let store = Arc::new(CatalogStore::with_entries(entries));
        let mut search = SearchCoordinator::new(store, SearchOptions::default()).unwrap();
        for query in queries {
            search.set_query(query);
            search.settle();
            search.results();
        }
        prop_assert_eq!(search.rebuild_count(), 1);
    }
}
