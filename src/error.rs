// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the matching pipeline.
//!
//! The scorer itself never fails on well-typed degenerate input — empty
//! pools, empty queries, and zero-overlap corpora resolve through explicit
//! fallbacks. The errors here cover the two things that can actually go
//! wrong: a caller contract violation (`top_n == 0`, unknown problem id)
//! and the storage backend.

use std::fmt;

use crate::types::ProblemId;

/// Error type for matching and service operations.
#[derive(Debug)]
pub enum MatchError {
    /// `top_n` must be a positive integer.
    InvalidTopN(usize),
    /// No problem exists with the given id.
    ProblemNotFound(ProblemId),
    /// The storage backend failed.
    Storage(StorageError),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::InvalidTopN(n) => {
                write!(f, "top_n must be positive, got {}", n)
            }
            MatchError::ProblemNotFound(id) => {
                write!(f, "no clinician problem with id '{}'", id)
            }
            MatchError::Storage(err) => write!(f, "storage error: {}", err),
        }
    }
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StorageError> for MatchError {
    fn from(err: StorageError) -> Self {
        MatchError::Storage(err)
    }
}

/// Error type for storage backends.
#[derive(Debug)]
pub enum StorageError {
    /// The underlying database rejected an operation.
    Database(sqlx::Error),
    /// A stored row failed to decode (e.g. malformed keyword JSON).
    Corrupt { table: &'static str, detail: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Database(err) => write!(f, "database: {}", err),
            StorageError::Corrupt { table, detail } => {
                write!(f, "corrupt row in '{}': {}", table, detail)
            }
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Database(err) => Some(err),
            StorageError::Corrupt { .. } => None,
        }
    }
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Database(err)
    }
}
