// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::error::CatalogError;
use crate::source::CatalogSource;
use crate::types::{CatalogEntry, DeliveryType, EntryId, FacetChoice, Phase, PricingTier};
use parking_lot::Mutex;

/// Create a simple active entry: a free website with no categories or regions.
///
/// This is the canonical implementation used across all tests.
pub fn make_entry(id: &str, name: &str) -> CatalogEntry {
    CatalogEntry {
        id: EntryId::from(id),
        name: name.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        description: None,
        url: format!("https://tools.example.net/{}", id),
        tool_type: DeliveryType::Web,
        pricing_model: PricingTier::Free,
        requires_registration: false,
        requires_manual_url: false,
        platforms: vec![],
        intel_cycle_phases: vec![],
        regions: vec![],
        categories: vec![],
        category_names: vec![],
        is_active: true,
        last_verified: None,
        updated_at: None,
    }
}

/// Create an entry tagged with one category.
pub fn make_entry_in(id: &str, name: &str, slug: &str, category_name: &str) -> CatalogEntry {
    let mut entry = make_entry(id, name);
    entry.categories = vec![slug.to_string()];
    entry.category_names = vec![category_name.to_string()];
    entry
}

/// The three-entry catalog used by the search scenarios.
///
/// - `A` Shodan: paid, cybersecurity, `https://www.shodan.io`
/// - `B` Shawdon: free, cybersecurity
/// - `C` Maps: free, geolocation, `https://maps.example.org`
pub fn scenario_catalog() -> Vec<CatalogEntry> {
    let mut a = make_entry_in("A", "Shodan", "cybersecurity", "Cybersecurity");
    a.url = "https://www.shodan.io".to_string();
    a.pricing_model = PricingTier::Paid;

    let b = make_entry_in("B", "Shawdon", "cybersecurity", "Cybersecurity");

    let mut c = make_entry_in("C", "Maps", "geolocation", "Geolocation");
    c.url = "https://maps.example.org".to_string();

    vec![a, b, c]
}

/// Deterministic synthetic catalog of `n` entries for benches and property tests.
pub fn synthetic_catalog(n: usize) -> Vec<CatalogEntry> {
    const WORDS: &[&str] = &[
        "shodan", "maps", "archive", "whois", "satellite", "people", "vessel", "flight",
        "domain", "image", "reverse", "social", "leak", "breach", "company", "registry",
    ];
    const CATEGORIES: &[(&str, &str)] = &[
        ("cybersecurity", "Cybersecurity"),
        ("geolocation", "Geolocation"),
        ("people", "People search"),
        ("transport", "Transport"),
    ];
    const REGIONS: &[&str] = &["NO", "global", "SE", "DK"];

    (0..n)
        .map(|i| {
            let w1 = WORDS[i % WORDS.len()];
            let w2 = WORDS[(i * 7 + 3) % WORDS.len()];
            let (slug, category) = CATEGORIES[i % CATEGORIES.len()];
            let mut entry = make_entry_in(&format!("tool-{i:04}"), &format!("{w1} {w2} {i}"), slug, category);
            entry.description = Some(format!("Look up {w2} records and {w1} data"));
            entry.tool_type = DeliveryType::ALL[i % DeliveryType::ALL.len()];
            entry.pricing_model = PricingTier::ALL[i % PricingTier::ALL.len()];
            entry.regions = vec![REGIONS[i % REGIONS.len()].to_string()];
            entry.intel_cycle_phases = vec![Phase::ALL[i % Phase::ALL.len()]];
            entry
        })
        .collect()
}

/// Source that serves a fixed list and can be swapped between fetches.
#[derive(Debug, Default)]
pub struct InMemorySource {
    entries: Mutex<Vec<CatalogEntry>>,
    categories: Vec<FacetChoice>,
}

impl InMemorySource {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            categories: Vec::new(),
        }
    }

    pub fn set_entries(&self, entries: Vec<CatalogEntry>) {
        *self.entries.lock() = entries;
    }
}

impl CatalogSource for InMemorySource {
    fn fetch_snapshot(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Ok(self.entries.lock().clone())
    }

    fn fetch_facet_vocabulary(&self) -> Result<Vec<FacetChoice>, CatalogError> {
        Ok(self.categories.clone())
    }
}

/// Source whose every fetch fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingSource;

impl CatalogSource for FailingSource {
    fn fetch_snapshot(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    fn fetch_facet_vocabulary(&self) -> Result<Vec<FacetChoice>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}
