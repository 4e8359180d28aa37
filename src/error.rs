// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for the edges of the crate.
//!
//! Search and filtering are total functions and never fail. Errors only show up
//! where data crosses into the crate: loading a catalog, parsing facet values
//! typed by a user, and validating search options.

use std::path::PathBuf;

/// Loading or refreshing a catalog snapshot failed.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog payload is not valid JSON for the expected shape.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON, but neither a list of tools nor a `{ "tools": [...] }` object.
    #[error("unexpected catalog layout: {0}")]
    Layout(String),

    /// The upstream data source could not deliver a snapshot.
    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// A facet dimension or value typed by a user could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFacetError {
    #[error("unknown facet dimension '{0}' (expected category, type, price, region or phase)")]
    UnknownDimension(String),

    #[error("unknown {dimension} value '{value}'")]
    UnknownValue {
        dimension: &'static str,
        value: String,
    },

    #[error("expected 'dimension:value', got '{0}'")]
    MissingSeparator(String),
}

/// Search options are out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("threshold must be within [0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("field weight for {field} must be positive and finite, got {weight}")]
    InvalidWeight { field: &'static str, weight: f64 },

    #[error("min_match_char_length must be at least 1")]
    ZeroMinMatchLength,

    #[error("result limit must be at least 1")]
    ZeroLimit,
}

/// The background search worker could not be started.
#[derive(Debug, thiserror::Error)]
pub enum WorkerError {
    #[error(transparent)]
    Options(#[from] OptionsError),

    #[error("failed to spawn search worker: {0}")]
    Spawn(#[from] std::io::Error),
}
