// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Search options.
//!
//! Defaults are what the catalog ships with. An options file is plain JSON
//! where every key is optional:
//!
//! ```json
//! { "threshold": 0.4, "limit": 20, "weights": { "url": 0.25 }, "cache_key": "entry_count" }
//! ```

use crate::error::{CatalogError, OptionsError};
use crate::scoring::{FieldWeights, SearchField};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default fuzzy threshold: a term may differ from the text in half its characters.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Default minimum run of verbatim characters a match must contain.
pub const DEFAULT_MIN_MATCH_CHAR_LENGTH: usize = 2;

/// Default maximum number of fuzzy results.
pub const DEFAULT_RESULT_LIMIT: usize = 50;

/// What decides that a cached search index still fits the snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheKeyPolicy {
    /// Entry count plus a CRC32 over ids and searchable text.
    #[default]
    ContentFingerprint,
    /// Entry count alone. Two different catalogs of equal size share an index,
    /// so results can point at the wrong entries after a same-size refresh.
    EntryCount,
}

/// Tunables for the fuzzy index and the coordinator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub weights: FieldWeights,
    /// Maximum `edits / term_len` for a field to count as a match, in `[0, 1]`.
    pub threshold: f64,
    pub min_match_char_length: usize,
    /// Cap on fuzzy results.
    pub limit: usize,
    pub cache_key: CacheKeyPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            weights: FieldWeights::default(),
            threshold: DEFAULT_THRESHOLD,
            min_match_char_length: DEFAULT_MIN_MATCH_CHAR_LENGTH,
            limit: DEFAULT_RESULT_LIMIT,
            cache_key: CacheKeyPolicy::default(),
        }
    }
}

impl SearchOptions {
    /// Read options from a JSON file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(OptionsError::ThresholdOutOfRange(self.threshold));
        }
        for field in SearchField::ALL {
            let weight = self.weights.get(field);
            if !weight.is_finite() || weight <= 0.0 {
                return Err(OptionsError::InvalidWeight {
                    field: field.as_str(),
                    weight,
                });
            }
        }
        if self.min_match_char_length == 0 {
            return Err(OptionsError::ZeroMinMatchLength);
        }
        if self.limit == 0 {
            return Err(OptionsError::ZeroLimit);
        }
        Ok(())
    }
}
