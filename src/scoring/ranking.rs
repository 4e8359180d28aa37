// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search hits get sorted.

use crate::index::SearchHit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Score** - ascending, lower is more relevant
/// 2. **Name** - alphabetical tiebreaker for determinism
/// 3. **Position** - snapshot order, final tiebreaker
///
/// Hits without a score (pure facet results) sort after scored ones.
pub fn compare_hits<'a>(
    a: &SearchHit,
    b: &SearchHit,
    name_of: impl Fn(usize) -> &'a str,
) -> Ordering {
    let by_score = match (a.score, b.score) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_score
        .then_with(|| name_of(a.position).cmp(name_of(b.position)))
        .then_with(|| a.position.cmp(&b.position))
}
