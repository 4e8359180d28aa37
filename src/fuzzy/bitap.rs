// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Bit-parallel approximate substring matching (Wu–Manber bitap).
//!
//! The dynamic program in `levenshtein` keeps one integer per pattern
//! position. Bitap flips that around: one machine word per *error count*,
//! one bit per pattern position. Bit `j` of `R[d]` is set when the pattern
//! prefix `pattern[..=j]` matches a suffix of the text read so far with at
//! most `d` edits. Reading a text character updates every position at once
//! with a handful of shifts and ORs.
//!
//! ```text
//! R'[0] = ((R[0] << 1) | 1) & mask[c]                       exact
//! R'[d] = ((R[d] << 1) | 1) & mask[c]                       match
//!       | ((R[d-1] << 1) | 1)                               substitution
//!       |   R[d-1]                                          extra text char
//!       | ((R'[d-1] << 1) | 1)                              skipped pattern char
//! ```
//!
//! Patterns are limited to 64 characters (one `u64`). Catalog queries are
//! words, so the limit is never close; longer patterns fall back to the
//! Sellers DP.

use std::collections::HashMap;

/// Maximum pattern length in characters.
pub const MAX_PATTERN_LEN: usize = u64::BITS as usize;

/// Precomputed per-character masks for one pattern.
#[derive(Debug, Clone)]
pub struct BitapPattern {
    masks: HashMap<char, u64>,
    len: usize,
}

impl BitapPattern {
    /// Build masks for `pattern`. `None` if it is empty or too long for a word.
    pub fn new(pattern: &[char]) -> Option<Self> {
        if pattern.is_empty() || pattern.len() > MAX_PATTERN_LEN {
            return None;
        }
        let mut masks: HashMap<char, u64> = HashMap::with_capacity(pattern.len());
        for (i, &c) in pattern.iter().enumerate() {
            *masks.entry(c).or_insert(0) |= 1u64 << i;
        }
        Some(Self {
            masks,
            len: pattern.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Smallest number of edits between the pattern and any substring of
    /// `text`, or `None` if it exceeds `max`.
    pub fn distance(&self, text: &str, max: usize) -> Option<usize> {
        let m = self.len;
        let k = max.min(m);
        let accept = 1u64 << (m - 1);

        // Before any text: a prefix of length ≤ d matches by deleting it.
        let mut r: Vec<u64> = (0..=k).map(low_bits).collect();
        let mut best = if m <= k { m } else { usize::MAX };

        for c in text.chars() {
            let mask = self.masks.get(&c).copied().unwrap_or(0);

            let mut prev_old = r[0];
            r[0] = ((r[0] << 1) | 1) & mask;
            for d in 1..=k {
                let old = r[d];
                r[d] = (((old << 1) | 1) & mask)
                    | ((prev_old << 1) | 1)
                    | prev_old
                    | ((r[d - 1] << 1) | 1);
                prev_old = old;
            }

            // Only error levels below the current best can improve it
            for d in 0..best.min(k + 1) {
                if r[d] & accept != 0 {
                    best = d;
                    break;
                }
            }
            if best == 0 {
                return Some(0);
            }
        }

        (best <= k).then_some(best)
    }
}

/// Word with the lowest `n` bits set.
fn low_bits(n: usize) -> u64 {
    if n >= MAX_PATTERN_LEN {
        u64::MAX
    } else {
        (1u64 << n) - 1
    }
}
