// Copyright 2025-present The sporjeger authors
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! Field weights decide how much a match counts, the edit distance decides how
//! good it was, and ranking turns the product into an order with deterministic
//! tiebreaks.

mod core;
pub mod ranking;

pub use self::core::*;
