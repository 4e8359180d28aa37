//! Differential testing: the fuzzy matchers against the oracles.
//!
//! Bitap and the dynamic program compute the same measure in different ways;
//! both must agree with brute force over every substring.

use super::oracles::{oracle_shares_run, oracle_substring_distance};
use proptest::prelude::*;
use sporjeger::fuzzy::{substring_distance, BitapPattern, TermMatcher};

fn small_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{1,6}").unwrap()
}

fn small_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e ]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn diff_bitap_vs_oracle(pattern in small_word(), text in small_text(), max in 0usize..4) {
        let chars: Vec<char> = pattern.chars().collect();
        let bitap = BitapPattern::new(&chars).unwrap();
        let oracle = oracle_substring_distance(&pattern, &text);
        let expected = (oracle <= max).then_some(oracle);
        prop_assert_eq!(bitap.distance(&text, max), expected, "pattern={:?} text={:?}", pattern, text);
    }

    #[test]
    fn diff_dynamic_programming_vs_oracle(pattern in small_word(), text in small_text(), max in 0usize..4) {
        let p: Vec<char> = pattern.chars().collect();
        let t: Vec<char> = text.chars().collect();
        let oracle = oracle_substring_distance(&pattern, &text);
        let expected = (oracle <= max).then_some(oracle);
        prop_assert_eq!(substring_distance(&p, &t, max), expected);
    }

    /// A term matches iff it is a substring, or it shares an exact run and the
    /// best substring is within the error budget.
    #[test]
    fn diff_term_matcher_decision(pattern in small_word(), text in small_text()) {
        let matcher = TermMatcher::new(&pattern, 0.5, 2);
        let oracle = oracle_substring_distance(&pattern, &text);
        let expected = text.contains(pattern.as_str())
            || (oracle_shares_run(&pattern, &text, 2) && oracle <= matcher.max_errors());

        let found = matcher.find(&text);
        prop_assert_eq!(found.is_some(), expected, "pattern={:?} text={:?}", pattern, text);
        if let Some(m) = found {
            prop_assert_eq!(m.distance, oracle);
        }
    }
}
