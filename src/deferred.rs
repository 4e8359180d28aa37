// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! A value with a raw side and a lagging applied side.
//!
//! Writes land on the raw side immediately. The applied side only catches up
//! when the owner calls [`Deferred::settle`], which is the low-priority step.
//! Several writes between two settles collapse into the last one.

/// Raw/applied pair for a value whose recomputation is deferred.
#[derive(Debug, Clone, Default)]
pub struct Deferred<T> {
    raw: T,
    applied: T,
}

impl<T: Clone + PartialEq> Deferred<T> {
    pub fn new(value: T) -> Self {
        Self {
            raw: value.clone(),
            applied: value,
        }
    }

    /// Record a new raw value. Never blocks and never touches `applied`.
    pub fn set(&mut self, value: T) {
        self.raw = value;
    }

    pub fn raw(&self) -> &T {
        &self.raw
    }

    pub fn applied(&self) -> &T {
        &self.applied
    }

    /// True while the applied value lags the raw one.
    ///
    /// Compares values, not write counts: typing a character and deleting it
    /// again before a settle is not pending.
    pub fn is_pending(&self) -> bool {
        self.raw != self.applied
    }

    /// Catch the applied value up. Returns true if it changed.
    pub fn settle(&mut self) -> bool {
        if !self.is_pending() {
            return false;
        }
        self.applied = self.raw.clone();
        true
    }
}
