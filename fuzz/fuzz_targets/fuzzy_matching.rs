// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.
//!
//! Bitap and the Sellers dynamic program must report the same distance for
//! every pattern, text and budget. Exact substrings must come back as 0.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sporjeger::fuzzy::{substring_distance, BitapPattern, TermMatcher};

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: Vec<char> = input.pattern.chars().take(64).collect();
    let text: String = input.text.chars().take(200).collect();
    let text_chars: Vec<char> = text.chars().collect();
    let max = usize::from(input.max % 8);

    let Some(bitap) = BitapPattern::new(&pattern) else {
        return;
    };

    let fast = bitap.distance(&text, max);
    let slow = substring_distance(&pattern, &text_chars, max);
    assert_eq!(fast, slow, "bitap and DP disagree: {:?} in {:?}", pattern, text);

    if let Some(d) = fast {
        assert!(d <= max);
    }

    let term: String = pattern.iter().collect();
    if text.contains(term.as_str()) {
        assert_eq!(fast, Some(0));
        assert_eq!(
            TermMatcher::new(&term, 0.5, 2).find(&text).map(|m| m.distance),
            Some(0)
        );
    }
});
