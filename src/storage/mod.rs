// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Storage backends for researchers, problems, and matches.
//!
//! The matching core has no idea how records are stored; it consumes and
//! returns plain values. This module defines `Storage` as the capability
//! set the service needs, with two interchangeable implementations chosen
//! at process startup:
//!
//! - [`MemStorage`] — `RwLock`'d maps, optionally seeded with a demo pool.
//! - [`SqliteStorage`] — sqlx-backed SQLite, schema created on open.
//!
//! Both guarantee stable ids: a researcher id handed to `create_matches`
//! round-trips unchanged through `get_matches_by_problem_id`.

mod memory;
mod sqlite;

pub use memory::{seed_researchers, MemStorage};
pub use sqlite::SqliteStorage;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::types::{
    ClinicianProblem, Match, MatchResult, NewProblem, NewResearcher, ProblemId, Researcher,
    ResearcherId,
};

/// A match row as handed to `create_matches`: the scorer's output plus the
/// service-assigned 1-based rank.
#[derive(Debug, Clone)]
pub struct NewMatch {
    pub researcher_id: ResearcherId,
    pub score: f64,
    pub rank: u32,
}

/// The capability set the match service needs from a backend.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn create_researcher(&self, new: NewResearcher) -> Result<Researcher, StorageError>;

    /// The full candidate pool, in stable insertion order.
    async fn get_all_researchers(&self) -> Result<Vec<Researcher>, StorageError>;

    async fn get_researcher_by_id(
        &self,
        id: &ResearcherId,
    ) -> Result<Option<Researcher>, StorageError>;

    async fn create_problem(&self, new: NewProblem) -> Result<ClinicianProblem, StorageError>;

    async fn get_problem_by_id(
        &self,
        id: &ProblemId,
    ) -> Result<Option<ClinicianProblem>, StorageError>;

    async fn create_matches(
        &self,
        problem_id: &ProblemId,
        matches: Vec<NewMatch>,
    ) -> Result<Vec<Match>, StorageError>;

    /// Stored matches for a problem, ordered by rank and joined to their
    /// researcher records. Matches whose researcher no longer exists are
    /// silently skipped.
    async fn get_matches_by_problem_id(
        &self,
        problem_id: &ProblemId,
    ) -> Result<Vec<MatchResult>, StorageError>;
}
