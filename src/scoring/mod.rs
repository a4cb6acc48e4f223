// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidate researchers get their numbers.
//!
//! A per-call TF-IDF model is built over [query + candidates], each
//! candidate is scored by summing the query terms' weights against its
//! profile, and scores are normalized into [0, 1] by the maximum raw
//! score. The model lives only for the duration of one call — nothing is
//! cached or shared between calls.

mod scorer;
pub mod tfidf;

pub use scorer::*;
