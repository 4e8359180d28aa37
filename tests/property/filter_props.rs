//! Facet filter invariants over random catalogs.

use super::oracles::oracle_filter;
use proptest::prelude::*;
use sporjeger::{
    filter_entries, ActiveFilters, CatalogEntry, DeliveryType, FacetDimension, FacetFilter,
    ParsedFilters, Phase, PricingTier,
};

const REGIONS: &[&str] = &["NO", "global", "SE", "DK"];
const CATEGORIES: &[&str] = &["cybersecurity", "geolocation", "people", "transport"];

fn arb_entry() -> impl Strategy<Value = CatalogEntry> {
    (
        0..DeliveryType::ALL.len(),
        0..PricingTier::ALL.len(),
        prop::sample::subsequence(REGIONS.to_vec(), 0..=REGIONS.len()),
        prop::sample::subsequence(CATEGORIES.to_vec(), 0..=CATEGORIES.len()),
        prop::sample::subsequence(Phase::ALL.to_vec(), 0..=Phase::ALL.len()),
    )
        .prop_map(|(t, p, regions, categories, phases)| {
            let mut entry = sporjeger::testing::make_entry("x", "Tool");
            entry.tool_type = DeliveryType::ALL[t];
            entry.pricing_model = PricingTier::ALL[p];
            entry.regions = regions.iter().map(|s| s.to_string()).collect();
            entry.categories = categories.iter().map(|s| s.to_string()).collect();
            entry.intel_cycle_phases = phases;
            entry
        })
}

fn arb_filter() -> impl Strategy<Value = FacetFilter> {
    prop_oneof![
        prop::sample::select(REGIONS.to_vec())
            .prop_map(|v| FacetFilter::bare(FacetDimension::Region, v)),
        prop::sample::select(CATEGORIES.to_vec())
            .prop_map(|v| FacetFilter::bare(FacetDimension::Category, v)),
        prop::sample::select(vec!["free", "freemium", "paid", "unknown"])
            .prop_map(|v| FacetFilter::bare(FacetDimension::Price, v)),
        prop::sample::select(vec!["web", "terminal", "dork", "api"])
            .prop_map(|v| FacetFilter::bare(FacetDimension::Type, v)),
        prop::sample::select(vec!["planning", "collection", "analysis"])
            .prop_map(|v| FacetFilter::bare(FacetDimension::Phase, v)),
    ]
}

fn arb_filters() -> impl Strategy<Value = ActiveFilters> {
    prop::collection::vec(arb_filter(), 0..5).prop_map(|v| v.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Every kept entry satisfies every active dimension, and nothing else is kept.
    #[test]
    fn prop_filter_matches_definition(
        entries in prop::collection::vec(arb_entry(), 0..20),
        filters in arb_filters(),
    ) {
        let kept = filter_entries(&entries, &ParsedFilters::from(&filters));
        prop_assert_eq!(kept, oracle_filter(&entries, &filters));
    }

    #[test]
    fn prop_no_filters_is_identity(entries in prop::collection::vec(arb_entry(), 0..20)) {
        let kept = filter_entries(&entries, &ParsedFilters::default());
        prop_assert_eq!(kept, (0..entries.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_filter_is_idempotent(
        entries in prop::collection::vec(arb_entry(), 0..20),
        filters in arb_filters(),
    ) {
        let parsed = ParsedFilters::from(&filters);
        let once: Vec<CatalogEntry> = filter_entries(&entries, &parsed)
            .into_iter()
            .map(|i| entries[i].clone())
            .collect();
        let twice = filter_entries(&once, &parsed);
        prop_assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    /// Adding a filter in a new dimension can only shrink the result.
    #[test]
    fn prop_more_dimensions_never_grow(
        entries in prop::collection::vec(arb_entry(), 0..20),
        filters in arb_filters(),
        extra in arb_filter(),
    ) {
        prop_assume!(!filters.iter().any(|f| f.dimension == extra.dimension));
        let before = filter_entries(&entries, &ParsedFilters::from(&filters));
        let mut narrowed = filters.clone();
        narrowed.add(extra);
        let after = filter_entries(&entries, &ParsedFilters::from(&narrowed));
        prop_assert!(after.iter().all(|i| before.contains(i)));
    }

    /// "global" never stands in for another region.
    #[test]
    fn prop_global_is_not_a_wildcard(region in prop::sample::select(vec!["NO", "SE", "DK"])) {
        let mut entry = sporjeger::testing::make_entry("g", "Global Tool");
        entry.regions = vec!["global".to_string()];
        let filters: ActiveFilters = [FacetFilter::bare(FacetDimension::Region, region)]
            .into_iter()
            .collect();
        prop_assert!(filter_entries(&[entry], &ParsedFilters::from(&filters)).is_empty());
    }
}
