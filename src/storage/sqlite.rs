// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! SQLite storage backed by an sqlx connection pool.
//!
//! The schema is created on open, so a fresh database file works with no
//! setup step. Keyword lists are stored as JSON text columns; `rank` is an
//! INTEGER ordinal. `get_all_researchers` orders by rowid, which preserves
//! insertion order the same way `MemStorage` does.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::debug;
use uuid::Uuid;

use crate::error::StorageError;
use crate::storage::{NewMatch, Storage};
use crate::types::{
    ClinicianProblem, Match, MatchResult, NewProblem, NewResearcher, ProblemId, Researcher,
    ResearcherId,
};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS researchers (
    id          TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL,
    institution TEXT,
    keywords    TEXT NOT NULL,
    description TEXT NOT NULL,
    capacity    INTEGER NOT NULL DEFAULT 1
);
CREATE TABLE IF NOT EXISTS clinician_problems (
    id           TEXT PRIMARY KEY,
    description  TEXT NOT NULL,
    title        TEXT,
    domain       TEXT,
    keywords     TEXT NOT NULL,
    submitted_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS matches (
    id            TEXT PRIMARY KEY,
    problem_id    TEXT NOT NULL REFERENCES clinician_problems(id),
    researcher_id TEXT NOT NULL REFERENCES researchers(id),
    score         REAL NOT NULL,
    rank          INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_matches_problem ON matches(problem_id);
";

/// SQLite backend. Clone-cheap (the pool is internally shared).
#[derive(Clone)]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Open (or create) a database file and ensure the schema exists.
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            // SQLite is single-writer, but can have multiple readers
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(10))
            .connect_with(options)
            .await?;
        Self::from_pool(pool).await
    }

    /// An in-memory database, for tests and throwaway runs.
    ///
    /// Capped at one connection — each in-memory SQLite connection is its
    /// own database, so a larger pool would scatter the tables.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::from_pool(pool).await
    }

    async fn from_pool(pool: SqlitePool) -> Result<Self, StorageError> {
        sqlx::raw_sql(SCHEMA).execute(&pool).await?;
        debug!("sqlite schema ready");
        Ok(Self { pool })
    }

    fn encode_keywords(keywords: &[String]) -> Result<String, StorageError> {
        serde_json::to_string(keywords).map_err(|e| StorageError::Corrupt {
            table: "keywords",
            detail: e.to_string(),
        })
    }

    fn decode_keywords(table: &'static str, raw: &str) -> Result<Vec<String>, StorageError> {
        serde_json::from_str(raw).map_err(|e| StorageError::Corrupt {
            table,
            detail: format!("keywords '{}': {}", raw, e),
        })
    }
}

type ResearcherRow = (String, String, String, Option<String>, String, String, i64);

fn researcher_from_row(row: ResearcherRow) -> Result<Researcher, StorageError> {
    let (id, name, email, institution, keywords, description, capacity) = row;
    Ok(Researcher {
        id: ResearcherId(id),
        name,
        email,
        institution,
        keywords: SqliteStorage::decode_keywords("researchers", &keywords)?,
        description,
        capacity: capacity.max(0) as u32,
    })
}

type ProblemRow = (
    String,
    String,
    Option<String>,
    Option<String>,
    String,
    DateTime<Utc>,
);

fn problem_from_row(row: ProblemRow) -> Result<ClinicianProblem, StorageError> {
    let (id, description, title, domain, keywords, submitted_at) = row;
    Ok(ClinicianProblem {
        id: ProblemId(id),
        description,
        title,
        domain,
        keywords: SqliteStorage::decode_keywords("clinician_problems", &keywords)?,
        submitted_at,
    })
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn create_researcher(&self, new: NewResearcher) -> Result<Researcher, StorageError> {
        let researcher = Researcher {
            id: ResearcherId::generate(),
            name: new.name,
            email: new.email,
            institution: new.institution,
            keywords: new.keywords,
            description: new.description,
            capacity: new.capacity,
        };
        sqlx::query(
            "INSERT INTO researchers (id, name, email, institution, keywords, description, capacity)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(researcher.id.as_str())
        .bind(&researcher.name)
        .bind(&researcher.email)
        .bind(&researcher.institution)
        .bind(Self::encode_keywords(&researcher.keywords)?)
        .bind(&researcher.description)
        .bind(researcher.capacity as i64)
        .execute(&self.pool)
        .await?;
        Ok(researcher)
    }

    async fn get_all_researchers(&self) -> Result<Vec<Researcher>, StorageError> {
        let rows: Vec<ResearcherRow> = sqlx::query_as(
            "SELECT id, name, email, institution, keywords, description, capacity
             FROM researchers ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        rows.into_iter().map(researcher_from_row).collect()
    }

    async fn get_researcher_by_id(
        &self,
        id: &ResearcherId,
    ) -> Result<Option<Researcher>, StorageError> {
        let row: Option<ResearcherRow> = sqlx::query_as(
            "SELECT id, name, email, institution, keywords, description, capacity
             FROM researchers WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.map(researcher_from_row).transpose()
    }

    async fn create_problem(&self, new: NewProblem) -> Result<ClinicianProblem, StorageError> {
        let problem = ClinicianProblem {
            id: ProblemId::generate(),
            description: new.description,
            title: new.title,
            domain: new.domain,
            keywords: new.keywords,
            submitted_at: Utc::now(),
        };
        sqlx::query(
            "INSERT INTO clinician_problems (id, description, title, domain, keywords, submitted_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(problem.id.as_str())
        .bind(&problem.description)
        .bind(&problem.title)
        .bind(&problem.domain)
        .bind(Self::encode_keywords(&problem.keywords)?)
        .bind(problem.submitted_at)
        .execute(&self.pool)
        .await?;
        Ok(problem)
    }

    async fn get_problem_by_id(
        &self,
        id: &ProblemId,
    ) -> Result<Option<ClinicianProblem>, StorageError> {
        let row: Option<ProblemRow> = sqlx::query_as(
            "SELECT id, description, title, domain, keywords, submitted_at
             FROM clinician_problems WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?;
        row.map(problem_from_row).transpose()
    }

    async fn create_matches(
        &self,
        problem_id: &ProblemId,
        new_matches: Vec<NewMatch>,
    ) -> Result<Vec<Match>, StorageError> {
        let mut tx = self.pool.begin().await?;
        let mut created = Vec::with_capacity(new_matches.len());
        for new in new_matches {
            let m = Match {
                id: Uuid::new_v4().to_string(),
                problem_id: problem_id.clone(),
                researcher_id: new.researcher_id,
                score: new.score,
                rank: new.rank,
            };
            sqlx::query(
                "INSERT INTO matches (id, problem_id, researcher_id, score, rank)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&m.id)
            .bind(m.problem_id.as_str())
            .bind(m.researcher_id.as_str())
            .bind(m.score)
            .bind(m.rank as i64)
            .execute(&mut *tx)
            .await?;
            created.push(m);
        }
        tx.commit().await?;
        Ok(created)
    }

    async fn get_matches_by_problem_id(
        &self,
        problem_id: &ProblemId,
    ) -> Result<Vec<MatchResult>, StorageError> {
        // Inner join drops matches whose researcher row is gone, matching
        // the in-memory backend's skip behavior.
        type JoinedRow = (f64, i64, String, String, String, Option<String>, String, String, i64);
        let rows: Vec<JoinedRow> = sqlx::query_as(
            "SELECT m.score, m.rank,
                    r.id, r.name, r.email, r.institution, r.keywords, r.description, r.capacity
             FROM matches m
             JOIN researchers r ON r.id = m.researcher_id
             WHERE m.problem_id = ?
             ORDER BY m.rank",
        )
        .bind(problem_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(score, rank, id, name, email, institution, keywords, description, capacity)| {
                Ok(MatchResult {
                    researcher: researcher_from_row((
                        id,
                        name,
                        email,
                        institution,
                        keywords,
                        description,
                        capacity,
                    ))?,
                    score,
                    rank: rank.max(0) as u32,
                })
            })
            .collect()
    }
}
