// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Incremental fuzzy search and facet filtering for the Sporjeger tool catalog.
//!
//! The catalog is a flat list of ~1000 research tools. This crate takes a
//! free-text query plus a set of facet filters and produces a ranked result
//! list as the user types, without rebuilding the search index on every
//! keystroke or refresh.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────────┐
//! │  source.rs   │────▶│ snapshot.rs  │────▶│  coordinator.rs   │
//! │ (JSON file,  │     │ (Arc swap,   │     │ (deferred query,  │
//! │  CatalogSrc) │     │  revision)   │     │  filters, memo)   │
//! └──────────────┘     └──────────────┘     └───────────────────┘
//!                                              │             │
//!                                              ▼             ▼
//!                          ┌──────────────────────┐   ┌─────────────┐
//!                          │ index/ (+ cache)     │   │  filter.rs  │
//!                          │ fuzzy/  scoring/     │   │ (OR within, │
//!                          │ (bitap, weights)     │   │  AND across)│
//!                          └──────────────────────┘   └─────────────┘
//! ```
//!
//! `worker::LiveSearch` runs the same evaluation on a background thread for
//! hosts where the input loop must never wait on a search.
//!
//! # Usage
//!
//! ```
//! use sporjeger::{CatalogStore, SearchCoordinator, SearchOptions};
//! use std::sync::Arc;
//!
//! let store = Arc::new(CatalogStore::with_entries(sporjeger::testing::scenario_catalog()));
//! let mut search = SearchCoordinator::new(store, SearchOptions::default()).unwrap();
//!
//! search.set_query("shodan");
//! assert!(search.is_pending());
//! search.settle();
//!
//! let names: Vec<_> = search.results().entries().map(|e| e.name.clone()).collect();
//! assert_eq!(names, ["Shodan", "Shawdon"]);
//! ```

pub mod config;
pub mod coordinator;
pub mod deferred;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod snapshot;
pub mod source;
pub mod suggest;
pub mod types;
mod utils;
pub mod vocabulary;
pub mod worker;

pub mod testing;

pub use config::{CacheKeyPolicy, SearchOptions};
pub use coordinator::{evaluate, SearchCoordinator, SearchResults};
pub use error::{CatalogError, OptionsError, ParseFacetError, WorkerError};
pub use filter::{filter_entries, ParsedFilters};
pub use index::{IndexCache, SearchHit, SearchIndex};
pub use scoring::{FieldWeights, SearchField};
pub use snapshot::{CatalogStore, Freshness, Snapshot};
pub use source::{CatalogSource, JsonCatalogSource};
pub use suggest::{suggest_filters, SUGGESTION_LIMIT};
pub use types::{
    ActiveFilters, CatalogEntry, CategoryCount, DeliveryType, EntryId, FacetChoice,
    FacetDimension, FacetFilter, Phase, Platform, PricingTier,
};
pub use utils::{normalize, parse_query, url_search_text};
pub use vocabulary::FacetVocabulary;
pub use worker::LiveSearch;
