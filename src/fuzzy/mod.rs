// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via substring edit distance.
//!
//! Two implementations of the same measure: bit-parallel bitap for normal
//! query terms, and the Sellers dynamic program for anything longer than a
//! machine word. `TermMatcher` picks between them and adds the two rules that
//! turn a raw distance into a search decision:
//!
//! - **Threshold**: `distance / term_len` must not exceed the threshold.
//! - **Exact run**: the field must contain at least `min_match_char_length`
//!   consecutive characters of the term verbatim. Without it a two-letter
//!   term with one allowed edit matches nearly any text.

pub mod bitap;
mod levenshtein;

pub use bitap::{BitapPattern, MAX_PATTERN_LEN};
pub use levenshtein::substring_distance;

/// A term matched somewhere in a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    /// Edits between the term and the closest substring of the value.
    pub distance: usize,
    /// `distance / term_len`: 0.0 is exact, higher is worse.
    pub score: f64,
}

/// Matcher for one normalized query term, reused across every field value.
#[derive(Debug, Clone)]
pub struct TermMatcher {
    term: String,
    chars: Vec<char>,
    bitap: Option<BitapPattern>,
    runs: Vec<String>,
    max_errors: usize,
}

impl TermMatcher {
    /// Prepare a matcher for `term` (already normalized).
    ///
    /// The error budget is `floor(threshold × len)`: with the default threshold
    /// of 0.5 a six-letter word tolerates three edits, a two-letter one only one.
    pub fn new(term: &str, threshold: f64, min_match_char_length: usize) -> Self {
        let chars: Vec<char> = term.chars().collect();
        let max_errors = (threshold * chars.len() as f64 + 1e-9).floor() as usize;

        let run_len = min_match_char_length.clamp(1, chars.len().max(1));
        let mut runs: Vec<String> = chars
            .windows(run_len)
            .map(|w| w.iter().collect::<String>())
            .collect();
        runs.sort();
        runs.dedup();

        Self {
            term: term.to_string(),
            bitap: BitapPattern::new(&chars),
            chars,
            runs,
            max_errors,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    /// Best match of the term anywhere in `text`, if within budget.
    pub fn find(&self, text: &str) -> Option<FuzzyMatch> {
        if self.chars.is_empty() {
            return None;
        }
        if text.contains(self.term.as_str()) {
            return Some(FuzzyMatch {
                distance: 0,
                score: 0.0,
            });
        }
        if !self.runs.iter().any(|run| text.contains(run.as_str())) {
            return None;
        }

        let distance = match &self.bitap {
            Some(pattern) => pattern.distance(text, self.max_errors),
            None => {
                let text_chars: Vec<char> = text.chars().collect();
                substring_distance(&self.chars, &text_chars, self.max_errors)
            }
        }?;

        Some(FuzzyMatch {
            distance,
            score: distance as f64 / self.chars.len() as f64,
        })
    }
}
