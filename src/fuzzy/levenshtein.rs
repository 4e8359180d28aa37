// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Substring edit distance (Sellers' algorithm) with early exits.
//!
//! Plain Levenshtein compares two whole strings. For search we want something
//! looser: how many edits does it take to turn the pattern into *some*
//! substring of the text? That's the same dynamic program with one change:
//! the first row is all zeros, so a match may start at any text position for
//! free. Location in the text is ignored entirely.
//!
//! This is the reference path. `bitap` computes the same number bit-parallel
//! for patterns up to 64 characters; this handles everything longer and
//! serves as the oracle in tests.

/// Smallest edit distance between `pattern` and any substring of `text`,
/// or `None` if it exceeds `max`.
///
/// Two early-exit paths:
/// 1. An exact substring hit is distance 0, nothing can beat it
/// 2. If the pattern is longer than the text by more than `max`, at least
///    that many deletions are needed whatever the alignment
pub fn substring_distance(pattern: &[char], text: &[char], max: usize) -> Option<usize> {
    let m = pattern.len();
    if m == 0 {
        return Some(0);
    }
    if m.saturating_sub(text.len()) > max {
        return None;
    }

    // column[i] = edits to match pattern[..i] against a text suffix ending here
    let mut column: Vec<usize> = (0..=m).collect();
    let mut best = m;

    for &tc in text {
        let mut diagonal = column[0];
        column[0] = 0;
        for i in 1..=m {
            let above = column[i];
            let cost = usize::from(pattern[i - 1] != tc);
            column[i] = (diagonal + cost).min(above + 1).min(column[i - 1] + 1);
            diagonal = above;
        }
        if column[m] < best {
            best = column[m];
            if best == 0 {
                return Some(0);
            }
        }
    }

    (best <= max).then_some(best)
}
