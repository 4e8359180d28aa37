// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Facet filtering.
//!
//! Filters with the same dimension are OR'd, different dimensions are AND'd.
//! A dimension with no active filter doesn't constrain anything. Values are
//! compared as strings, so a value the catalog doesn't know matches nothing.
//!
//! The region `global` is an ordinary value here: an entry tagged `global`
//! passes a region filter only if `global` itself is selected.

use crate::types::{ActiveFilters, CatalogEntry, FacetDimension};
use std::collections::{BTreeMap, BTreeSet};

/// Active filters grouped into accepted values per dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFilters {
    accepted: BTreeMap<FacetDimension, BTreeSet<String>>,
}

impl From<&ActiveFilters> for ParsedFilters {
    fn from(filters: &ActiveFilters) -> Self {
        let mut accepted: BTreeMap<FacetDimension, BTreeSet<String>> = BTreeMap::new();
        for filter in filters.iter() {
            accepted
                .entry(filter.dimension)
                .or_default()
                .insert(filter.value.clone());
        }
        Self { accepted }
    }
}

impl ParsedFilters {
    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }

    /// Accepted values for `dimension`, if it is constrained.
    pub fn accepted(&self, dimension: FacetDimension) -> Option<&BTreeSet<String>> {
        self.accepted.get(&dimension)
    }

    /// True iff `entry` satisfies every constrained dimension.
    pub fn accepts(&self, entry: &CatalogEntry) -> bool {
        self.accepted.iter().all(|(dimension, values)| {
            entry
                .facet_values(*dimension)
                .iter()
                .any(|v| values.contains(*v))
        })
    }
}

/// Positions of the entries that pass `filters`, in snapshot order.
pub fn filter_entries(entries: &[CatalogEntry], filters: &ParsedFilters) -> Vec<usize> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filters.accepts(entry))
        .map(|(i, _)| i)
        .collect()
}
