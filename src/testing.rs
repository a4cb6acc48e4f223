//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use chrono::Utc;

use crate::types::{ClinicianProblem, NewProblem, ProblemId, Researcher, ResearcherId};

/// Create a test researcher with the given description and keywords.
///
/// This is the canonical implementation used across all tests.
pub fn make_researcher(name: &str, description: &str, keywords: &[&str]) -> Researcher {
    Researcher {
        id: ResearcherId::generate(),
        name: name.to_string(),
        email: format!(
            "{}@example.org",
            name.to_lowercase().replace(|c: char| !c.is_alphanumeric(), "")
        ),
        institution: None,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        capacity: 1,
    }
}

/// Create a test problem with just a description.
pub fn make_problem(description: &str) -> ClinicianProblem {
    ClinicianProblem {
        id: ProblemId::generate(),
        description: description.to_string(),
        title: None,
        domain: None,
        keywords: vec![],
        submitted_at: Utc::now(),
    }
}

/// Insert shape for a problem with just a description.
pub fn make_new_problem(description: &str) -> NewProblem {
    NewProblem {
        description: description.to_string(),
        ..Default::default()
    }
}
