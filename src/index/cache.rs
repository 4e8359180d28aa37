// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Reuse of the last built search index.
//!
//! One slot, keyed by the snapshot's [`CacheKey`] together with the options
//! that shape an index (weights, threshold, minimum match length). The result
//! limit is applied per query and doesn't take part. A hit hands out the
//! cached `Arc<SearchIndex>`; a miss builds a new index and replaces the slot
//! as a whole. Nothing inside a built index is ever mutated.

use super::SearchIndex;
use crate::config::SearchOptions;
use crate::scoring::FieldWeights;
use crate::snapshot::{CacheKey, Snapshot};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Options baked into a built index.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BuildParams {
    weights: FieldWeights,
    threshold: f64,
    min_match_char_length: usize,
}

impl From<&SearchOptions> for BuildParams {
    fn from(options: &SearchOptions) -> Self {
        Self {
            weights: options.weights,
            threshold: options.threshold,
            min_match_char_length: options.min_match_char_length,
        }
    }
}

#[derive(Debug)]
struct Slot {
    key: CacheKey,
    params: BuildParams,
    index: Arc<SearchIndex>,
}

#[derive(Debug, Default)]
pub struct IndexCache {
    slot: Mutex<Option<Slot>>,
    rebuilds: AtomicUsize,
}

impl IndexCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for `snapshot`, built only if the cached one was keyed
    /// differently or built with different options.
    ///
    /// The lock is held across the build, so two callers racing on the same
    /// snapshot build once.
    pub fn get_or_build(&self, snapshot: &Snapshot, options: &SearchOptions) -> Arc<SearchIndex> {
        let key = snapshot.cache_key(options.cache_key);
        let params = BuildParams::from(options);
        let mut slot = self.slot.lock();

        if let Some(cached) = slot.as_ref() {
            if cached.key == key && cached.params == params {
                debug!(?key, "reusing search index");
                return Arc::clone(&cached.index);
            }
        }

        let index = Arc::new(SearchIndex::build(snapshot.entries(), options));
        let rebuilds = self.rebuilds.fetch_add(1, Ordering::Relaxed) + 1;
        debug!(?key, rebuilds, "rebuilt search index");
        *slot = Some(Slot {
            key,
            params,
            index: Arc::clone(&index),
        });
        index
    }

    /// How many times an index has been built.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds.load(Ordering::Relaxed)
    }

    /// Drop the cached index; the next lookup rebuilds.
    pub fn invalidate(&self) {
        *self.slot.lock() = None;
    }
}
