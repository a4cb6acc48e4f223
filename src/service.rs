// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The match service: orchestration between storage and the scorer.
//!
//! This is the request-layer pipeline with the transport stripped away:
//! persist the problem, load the full candidate pool, run the pure scorer,
//! persist `{score, rank}` per match, and join ranks back to full
//! researcher records for display. The scorer never sees storage; the
//! storage never sees scores it didn't get handed.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::MatchError;
use crate::scoring::match_problem_to_researchers;
use crate::storage::{NewMatch, Storage};
use crate::types::{NewProblem, NewResearcher, ProblemId, ProblemWithMatches, Researcher};

/// Orchestrates problem submission and match retrieval over a backend
/// chosen at startup.
#[derive(Clone)]
pub struct MatchService {
    storage: Arc<dyn Storage>,
}

impl MatchService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Register a researcher into the candidate pool.
    pub async fn register_researcher(
        &self,
        new: NewResearcher,
    ) -> Result<Researcher, MatchError> {
        let researcher = self.storage.create_researcher(new).await?;
        info!(id = %researcher.id, name = %researcher.name, "registered researcher");
        Ok(researcher)
    }

    /// The full candidate pool, in stable order.
    pub async fn all_researchers(&self) -> Result<Vec<Researcher>, MatchError> {
        Ok(self.storage.get_all_researchers().await?)
    }

    /// Submit a clinician problem: persist it, rank the pool against it,
    /// persist the top `top_n` as matches with 1-based ranks, and return
    /// the problem joined to its stored matches.
    ///
    /// An empty pool yields a problem with no matches, not an error.
    pub async fn submit_problem(
        &self,
        new: NewProblem,
        top_n: usize,
    ) -> Result<ProblemWithMatches, MatchError> {
        let problem = self.storage.create_problem(new).await?;
        let researchers = self.storage.get_all_researchers().await?;
        debug!(
            problem = %problem.id,
            pool_size = researchers.len(),
            top_n,
            "scoring candidate pool"
        );

        if researchers.is_empty() {
            return Ok(ProblemWithMatches {
                problem,
                matches: Vec::new(),
            });
        }

        let scores = match_problem_to_researchers(&problem, &researchers, top_n)?;
        let new_matches: Vec<NewMatch> = scores
            .into_iter()
            .enumerate()
            .map(|(index, score)| NewMatch {
                researcher_id: score.researcher_id,
                score: score.score,
                rank: index as u32 + 1,
            })
            .collect();

        self.storage
            .create_matches(&problem.id, new_matches)
            .await?;
        let matches = self.storage.get_matches_by_problem_id(&problem.id).await?;
        info!(problem = %problem.id, matches = matches.len(), "problem matched");

        Ok(ProblemWithMatches { problem, matches })
    }

    /// Stored matches for an already-submitted problem.
    pub async fn matches_for_problem(
        &self,
        problem_id: &ProblemId,
    ) -> Result<ProblemWithMatches, MatchError> {
        let problem = self
            .storage
            .get_problem_by_id(problem_id)
            .await?
            .ok_or_else(|| MatchError::ProblemNotFound(problem_id.clone()))?;
        let matches = self.storage.get_matches_by_problem_id(problem_id).await?;
        Ok(ProblemWithMatches { problem, matches })
    }
}
