// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Live search on a background thread.
//!
//! The caller's side only sends commands and never waits on a computation.
//! The worker drains every queued command before it computes, so a burst of
//! keystrokes costs one evaluation against the newest query, not one per key.
//!
//! Every command that can change results carries a generation number. The
//! worker publishes results tagged with the newest generation it has seen;
//! the search is pending while that lags what the caller has submitted.

use crate::config::SearchOptions;
use crate::coordinator::{evaluate, SearchResults};
use crate::error::WorkerError;
use crate::index::IndexCache;
use crate::snapshot::CatalogStore;
use crate::types::ActiveFilters;
use parking_lot::{Condvar, Mutex};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

enum Command {
    Query { generation: u64, text: String },
    Filters { generation: u64, filters: ActiveFilters },
    Refresh { generation: u64 },
    Shutdown,
}

#[derive(Default)]
struct Published {
    generation: u64,
    results: Option<SearchResults>,
}

#[derive(Default)]
struct Shared {
    published: Mutex<Published>,
    ready: Condvar,
}

/// Handle to a background search worker.
pub struct LiveSearch {
    tx: Sender<Command>,
    shared: Arc<Shared>,
    submitted: u64,
    raw_query: String,
    handle: Option<JoinHandle<()>>,
}

impl LiveSearch {
    pub fn spawn(store: Arc<CatalogStore>, options: SearchOptions) -> Result<Self, WorkerError> {
        options.validate()?;
        let (tx, rx) = mpsc::channel();
        let shared = Arc::new(Shared::default());

        let worker_shared = Arc::clone(&shared);
        let handle = thread::Builder::new()
            .name("sporjeger-search".to_string())
            .spawn(move || run(rx, store, options, worker_shared))?;

        Ok(Self {
            tx,
            shared,
            submitted: 0,
            raw_query: String::new(),
            handle: Some(handle),
        })
    }

    /// Record a keystroke. Returns immediately.
    pub fn set_query(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.raw_query.clone_from(&text);
        self.submitted += 1;
        self.send(Command::Query {
            generation: self.submitted,
            text,
        });
    }

    pub fn raw_query(&self) -> &str {
        &self.raw_query
    }

    pub fn set_filters(&mut self, filters: ActiveFilters) {
        self.submitted += 1;
        self.send(Command::Filters {
            generation: self.submitted,
            filters,
        });
    }

    /// Recompute against the store's current snapshot.
    pub fn refresh(&mut self) {
        self.submitted += 1;
        self.send(Command::Refresh {
            generation: self.submitted,
        });
    }

    /// True while the published results predate the latest submitted change.
    pub fn is_pending(&self) -> bool {
        self.shared.published.lock().generation < self.submitted
    }

    /// The most recently published results, if any.
    pub fn results(&self) -> Option<SearchResults> {
        self.shared.published.lock().results.clone()
    }

    /// Block until results for the latest submission are published.
    ///
    /// Returns false on timeout.
    pub fn wait_until_settled(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut published = self.shared.published.lock();
        while published.generation < self.submitted {
            if self.shared.ready.wait_until(&mut published, deadline).timed_out() {
                return published.generation >= self.submitted;
            }
        }
        true
    }

    fn send(&self, command: Command) {
        if self.tx.send(command).is_err() {
            warn!("search worker is gone; update dropped");
        }
    }
}

impl Drop for LiveSearch {
    fn drop(&mut self) {
        let _ = self.tx.send(Command::Shutdown);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("search worker panicked");
            }
        }
    }
}

fn run(rx: Receiver<Command>, store: Arc<CatalogStore>, options: SearchOptions, shared: Arc<Shared>) {
    let cache = IndexCache::new();
    let mut query = String::new();
    let mut filters = ActiveFilters::new();
    let mut generation = 0;

    while let Ok(first) = rx.recv() {
        let mut batch = vec![first];
        batch.extend(rx.try_iter());
        let coalesced = batch.len();

        for command in batch {
            match command {
                Command::Query { generation: g, text } => {
                    query = text;
                    generation = g;
                }
                Command::Filters { generation: g, filters: f } => {
                    filters = f;
                    generation = g;
                }
                Command::Refresh { generation: g } => generation = g,
                Command::Shutdown => return,
            }
        }

        let snapshot = store.current();
        let results = evaluate(&snapshot, &cache, &options, &query, &filters);
        debug!(generation, coalesced, hits = results.len(), "published search results");

        let mut published = shared.published.lock();
        published.generation = generation;
        published.results = Some(results);
        shared.ready.notify_all();
    }
}
