// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Filter suggestions for the command-style search box.
//!
//! While the user types, choices whose label, alias or value contains the
//! typed text are offered as filters. Matching is a plain case-insensitive
//! substring test, not fuzzy: suggestions should be predictable.

use crate::types::{ActiveFilters, FacetChoice};
use crate::vocabulary::FacetVocabulary;

/// How many suggestions the search box shows.
pub const SUGGESTION_LIMIT: usize = 6;

/// Up to `limit` choices matching `query`, in vocabulary order, skipping
/// selections that are already active.
pub fn suggest_filters(
    query: &str,
    vocabulary: &FacetVocabulary,
    active: &ActiveFilters,
    limit: usize,
) -> Vec<FacetChoice> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    vocabulary
        .choices()
        .iter()
        .filter(|c| !active.contains(c.dimension, &c.value))
        .filter(|c| {
            c.label.to_lowercase().contains(&needle)
                || c.value.to_lowercase().contains(&needle)
                || c.aliases.iter().any(|a| a.to_lowercase().contains(&needle))
        })
        .take(limit)
        .cloned()
        .collect()
}
