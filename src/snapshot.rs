// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! The catalog snapshot store.
//!
//! A snapshot is an immutable list of active entries plus the filter
//! vocabulary derived from it. The store hands out `Arc<Snapshot>`s and
//! replaces the whole thing at once, so a reader holds either the old
//! snapshot or the new one and never a mix.
//!
//! Each snapshot carries a content fingerprint (CRC32 over ids and every
//! searchable field) that the index cache uses to decide whether the last
//! built index still fits.

use crate::config::CacheKeyPolicy;
use crate::error::CatalogError;
use crate::source::CatalogSource;
use crate::types::{CatalogEntry, FacetChoice};
use crate::vocabulary::FacetVocabulary;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// Whether the snapshot reflects the latest successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    Fresh,
    /// The last refresh failed; this is the previous snapshot kept as a fallback.
    Stale,
}

/// Identity of a snapshot's searchable content, as seen by the index cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Count(usize),
    Content { count: usize, crc: u32 },
}

/// An immutable catalog snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    revision: u64,
    entries: Arc<Vec<CatalogEntry>>,
    vocabulary: Arc<FacetVocabulary>,
    fingerprint: u32,
    freshness: Freshness,
}

impl Snapshot {
    /// The snapshot before any data arrived.
    pub fn empty() -> Self {
        Self::build(0, Vec::new(), Vec::new())
    }

    /// Build a snapshot from fetched entries. Inactive entries are dropped,
    /// and of several entries sharing an id only the first is kept.
    pub fn build(revision: u64, entries: Vec<CatalogEntry>, categories: Vec<FacetChoice>) -> Self {
        let before = entries.len();
        let entries: Vec<CatalogEntry> = entries.into_iter().filter(|e| e.is_active).collect();
        if entries.len() != before {
            warn!(
                dropped = before - entries.len(),
                "inactive entries in catalog payload were dropped"
            );
        }

        let active = entries.len();
        let mut seen = HashSet::with_capacity(active);
        let entries: Vec<CatalogEntry> = entries
            .into_iter()
            .filter(|e| seen.insert(e.id.clone()))
            .collect();
        if entries.len() != active {
            warn!(
                duplicates = active - entries.len(),
                "entries with repeated ids in catalog payload were dropped"
            );
        }

        let vocabulary = FacetVocabulary::build(&entries, categories);
        let fingerprint = content_fingerprint(&entries);
        Self {
            revision,
            entries: Arc::new(entries),
            vocabulary: Arc::new(vocabulary),
            fingerprint,
            freshness: Freshness::Fresh,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn vocabulary(&self) -> &FacetVocabulary {
        &self.vocabulary
    }

    pub fn fingerprint(&self) -> u32 {
        self.fingerprint
    }

    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    pub fn cache_key(&self, policy: CacheKeyPolicy) -> CacheKey {
        match policy {
            CacheKeyPolicy::EntryCount => CacheKey::Count(self.len()),
            CacheKeyPolicy::ContentFingerprint => CacheKey::Content {
                count: self.len(),
                crc: self.fingerprint,
            },
        }
    }

    /// Same content and revision, marked stale.
    fn as_stale(&self) -> Self {
        Self {
            freshness: Freshness::Stale,
            ..self.clone()
        }
    }
}

/// CRC32 over every field the index reads, in snapshot order.
///
/// Fields are separated by a unit separator byte so that moving text between
/// adjacent fields changes the checksum.
pub fn content_fingerprint(entries: &[CatalogEntry]) -> u32 {
    const SEP: &[u8] = &[0x1f];
    let mut hasher = crc32fast::Hasher::new();
    for entry in entries {
        hasher.update(entry.id.as_str().as_bytes());
        hasher.update(SEP);
        hasher.update(entry.name.as_bytes());
        hasher.update(SEP);
        hasher.update(entry.description.as_deref().unwrap_or("").as_bytes());
        hasher.update(SEP);
        hasher.update(entry.url.as_bytes());
        hasher.update(SEP);
        for name in &entry.category_names {
            hasher.update(name.as_bytes());
            hasher.update(SEP);
        }
        for region in &entry.regions {
            hasher.update(region.as_bytes());
            hasher.update(SEP);
        }
        hasher.update(&[0x1e]);
    }
    hasher.finalize()
}

/// Holder of the current snapshot.
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<Snapshot>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// A store holding the empty snapshot (revision 0).
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::empty())),
        }
    }

    /// A store seeded with `entries`.
    pub fn with_entries(entries: Vec<CatalogEntry>) -> Self {
        let store = Self::new();
        store.replace(entries, Vec::new());
        store
    }

    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    pub fn revision(&self) -> u64 {
        self.current.read().revision
    }

    /// Swap in a new snapshot built from `entries`.
    pub fn replace(&self, entries: Vec<CatalogEntry>, categories: Vec<FacetChoice>) -> Arc<Snapshot> {
        let mut current = self.current.write();
        let snapshot = Arc::new(Snapshot::build(current.revision + 1, entries, categories));
        debug!(
            revision = snapshot.revision,
            entries = snapshot.len(),
            fingerprint = snapshot.fingerprint,
            "catalog snapshot replaced"
        );
        *current = Arc::clone(&snapshot);
        snapshot
    }

    /// Fetch a fresh snapshot from `source` and install it.
    ///
    /// On failure the previous snapshot stays in place, marked stale, and the
    /// error is returned to the caller. No retry happens here.
    pub fn refresh(&self, source: &dyn CatalogSource) -> Result<Arc<Snapshot>, CatalogError> {
        match source.fetch_all() {
            Ok((entries, categories)) => Ok(self.replace(entries, categories)),
            Err(e) => {
                let mut current = self.current.write();
                warn!(
                    error = %e,
                    revision = current.revision,
                    "catalog refresh failed; keeping previous snapshot"
                );
                *current = Arc::new(current.as_stale());
                Err(e)
            }
        }
    }
}
