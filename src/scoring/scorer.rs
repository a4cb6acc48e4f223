// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance scorer: rank a researcher pool against one problem.
//!
//! This is a pure function of its inputs — no caches, no shared state, safe
//! to call concurrently from independent requests. Every call rebuilds its
//! TF-IDF statistics from scratch over exactly the candidates supplied.
//!
//! # Corpus ordering invariant
//!
//! The model is built over `[query, candidate_0, candidate_1, ...]`, so
//! candidate `i` lives at corpus index `i + 1`. Scoring reads candidates at
//! those shifted positions and never touches index 0; breaking this offset
//! would score the query against itself.
//!
//! # Degenerate inputs (fallbacks, not errors)
//!
//! | Input                          | Result                                   |
//! |--------------------------------|------------------------------------------|
//! | empty candidate list           | empty result                             |
//! | query tokenizes to zero terms  | first min(top_n, len) at `NEUTRAL_SCORE` |
//! | no candidate overlaps query    | every candidate at `NEUTRAL_SCORE`       |
//!
//! The only error is a caller contract violation: `top_n == 0`.

use crate::error::MatchError;
use crate::scoring::tfidf::TfIdf;
use crate::tokenize::tokenize;
use crate::types::{ClinicianProblem, MatchScore, Researcher};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Score assigned when normalization is degenerate: an empty query or a
/// corpus with zero query/candidate overlap gives no evidence either way,
/// so every candidate gets this fixed midpoint instead of 0 or 1.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Default number of matches returned to callers that don't choose.
pub const DEFAULT_TOP_N: usize = 5;

/// Rank `researchers` by textual relevance to `problem`, returning the top
/// `top_n` as normalized `[0, 1]` scores.
///
/// Candidates are scored by summing the TF-IDF weight of every term in the
/// query's raw token sequence against the candidate's profile document,
/// then dividing by the maximum raw score. Duplicate query terms contribute
/// once per occurrence. Ties keep their input order (stable sort).
///
/// Returns `MatchError::InvalidTopN` when `top_n` is zero; every other
/// degenerate input resolves through the fallback table in the module docs.
pub fn match_problem_to_researchers(
    problem: &ClinicianProblem,
    researchers: &[Researcher],
    top_n: usize,
) -> Result<Vec<MatchScore>, MatchError> {
    if top_n == 0 {
        return Err(MatchError::InvalidTopN(top_n));
    }
    if researchers.is_empty() {
        return Ok(Vec::new());
    }

    let query_text = problem.query_text();
    let query_terms = tokenize(&query_text);

    // Zero query tokens: no signal to rank on. Hand back the head of the
    // pool in input order at the neutral score.
    if query_terms.is_empty() {
        return Ok(researchers
            .iter()
            .take(top_n)
            .map(|r| MatchScore {
                researcher_id: r.id.clone(),
                score: NEUTRAL_SCORE,
            })
            .collect());
    }

    let profiles: Vec<String> = researchers.iter().map(|r| r.profile_text()).collect();
    let mut corpus: Vec<&str> = Vec::with_capacity(1 + profiles.len());
    corpus.push(query_text.as_str());
    corpus.extend(profiles.iter().map(String::as_str));
    let model = TfIdf::build(corpus);

    let raw = raw_scores(&model, &query_terms, researchers.len());

    let max_raw = raw.iter().fold(0.0_f64, |acc, &s| acc.max(s));

    let mut scores: Vec<MatchScore> = researchers
        .iter()
        .zip(raw)
        .map(|(researcher, raw)| MatchScore {
            researcher_id: researcher.id.clone(),
            score: if max_raw > 0.0 {
                // The top candidate lands at exactly 1 by construction; the
                // min clamps float rounding on the rest.
                (raw / max_raw).min(1.0)
            } else {
                NEUTRAL_SCORE
            },
        })
        .collect();

    // Stable sort: equal scores keep their input order.
    scores.sort_by(|a, b| b.score.total_cmp(&a.score));
    scores.truncate(top_n);
    Ok(scores)
}

/// Raw score per candidate: sum of `weight(term, candidate)` over the
/// query's raw token sequence. Candidate `i` sits at corpus index `i + 1`.
#[cfg(not(feature = "parallel"))]
fn raw_scores(model: &TfIdf, query_terms: &[String], candidates: usize) -> Vec<f64> {
    (0..candidates)
        .map(|i| {
            query_terms
                .iter()
                .map(|term| model.weight(term, i + 1))
                .sum()
        })
        .collect()
}

/// Parallel raw scoring. Order-preserving, so results are identical to the
/// sequential path.
#[cfg(feature = "parallel")]
fn raw_scores(model: &TfIdf, query_terms: &[String], candidates: usize) -> Vec<f64> {
    (0..candidates)
        .into_par_iter()
        .map(|i| {
            query_terms
                .iter()
                .map(|term| model.weight(term, i + 1))
                .sum()
        })
        .collect()
}
