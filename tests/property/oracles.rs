//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations. They are slow and only ever run
//! on small inputs; the optimized code must agree with them.

use sporjeger::{ActiveFilters, CatalogEntry, FacetDimension};

/// Minimum edit distance between `pattern` and any substring of `text`.
///
/// Tries every substring, including the empty one, and asks `strsim` for the
/// full Levenshtein distance. O(n² · m · n).
pub fn oracle_substring_distance(pattern: &str, text: &str) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut best = pattern.chars().count();
    for start in 0..=chars.len() {
        for end in start..=chars.len() {
            let candidate: String = chars[start..end].iter().collect();
            best = best.min(strsim::levenshtein(pattern, &candidate));
        }
    }
    best
}

/// Whether `pattern` and `text` share `run` consecutive characters verbatim.
pub fn oracle_shares_run(pattern: &str, text: &str, run: usize) -> bool {
    let chars: Vec<char> = pattern.chars().collect();
    let run = run.clamp(1, chars.len().max(1));
    chars
        .windows(run)
        .any(|w| text.contains(w.iter().collect::<String>().as_str()))
}

/// Filter by the definition: every active dimension must see at least one of
/// the entry's values among the selected ones.
pub fn oracle_filter(entries: &[CatalogEntry], filters: &ActiveFilters) -> Vec<usize> {
    let mut kept = Vec::new();
    'entries: for (i, entry) in entries.iter().enumerate() {
        for dimension in FacetDimension::ALL {
            let selected: Vec<&str> = filters
                .iter()
                .filter(|f| f.dimension == *dimension)
                .map(|f| f.value.as_str())
                .collect();
            if selected.is_empty() {
                continue;
            }
            let values = entry.facet_values(*dimension);
            if !values.iter().any(|v| selected.contains(v)) {
                continue 'entries;
            }
        }
        kept.push(i);
    }
    kept
}
