// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Scores are distances, not points: 0.0 is a perfect match and smaller is
//! better. Each matched field contributes a factor in `(0, 1]` and the factors
//! multiply, so an entry that matches in more fields can only get better, and
//! a heavy field (name) moves the product further than a light one (url).
//!
//! ```text
//! factor(field) = max(field_score, ε) ^ (normalized_weight × norm)
//! entry_score   = ∏ over terms, ∏ over matched fields of factor(field)
//! ```
//!
//! `norm = 1 / sqrt(token_count)` of the matched value: a hit in a two-word
//! name says more than the same hit buried in a forty-word description.

use serde::{Deserialize, Serialize};

/// Floor for a perfect field score, so an exact hit still carries its weight.
pub const SCORE_EPSILON: f64 = f64::EPSILON;

/// Searchable fields of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Name,
    Description,
    CategoryNames,
    Url,
    Regions,
}

impl SearchField {
    pub const COUNT: usize = 5;

    pub const ALL: [SearchField; Self::COUNT] = [
        SearchField::Name,
        SearchField::Description,
        SearchField::CategoryNames,
        SearchField::Url,
        SearchField::Regions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Description => "description",
            SearchField::CategoryNames => "category_names",
            SearchField::Url => "url",
            SearchField::Regions => "regions",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// Relative importance of each searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldWeights {
    pub name: f64,
    pub description: f64,
    pub category_names: f64,
    pub url: f64,
    pub regions: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self {
            name: 3.0,
            description: 2.0,
            category_names: 1.5,
            url: 0.5,
            regions: 1.0,
        }
    }
}

impl FieldWeights {
    pub fn get(&self, field: SearchField) -> f64 {
        match field {
            SearchField::Name => self.name,
            SearchField::Description => self.description,
            SearchField::CategoryNames => self.category_names,
            SearchField::Url => self.url,
            SearchField::Regions => self.regions,
        }
    }

    /// Weights scaled to sum to 1, indexed by `SearchField::index`.
    pub fn normalized(&self) -> [f64; SearchField::COUNT] {
        let total: f64 = SearchField::ALL.iter().map(|f| self.get(*f)).sum();
        let mut out = [0.0; SearchField::COUNT];
        for field in SearchField::ALL {
            out[field.index()] = if total > 0.0 {
                self.get(field) / total
            } else {
                1.0 / SearchField::COUNT as f64
            };
        }
        out
    }
}

/// Length norm of a field value: `1 / sqrt(tokens)`, rounded to 3 decimals.
pub fn field_norm(text: &str) -> f64 {
    let tokens = text.split_whitespace().count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}

/// Contribution of one matched field to the entry score.
pub fn field_factor(field_score: f64, weight: f64, norm: f64) -> f64 {
    field_score.max(SCORE_EPSILON).powf(weight * norm)
}
