//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::Arc;

use clinmatch::service::MatchService;
use clinmatch::storage::{MemStorage, SqliteStorage, Storage};
use clinmatch::{NewProblem, NewResearcher};

// Re-export canonical test utilities from clinmatch::testing
pub use clinmatch::testing::{make_new_problem, make_problem, make_researcher};

/// A service over a memory store seeded with the demo pool.
pub fn seeded_mem_service() -> MatchService {
    MatchService::new(Arc::new(MemStorage::seeded()))
}

/// A service over a fresh in-memory SQLite store seeded with the demo pool.
pub async fn seeded_sqlite_service() -> MatchService {
    let store = SqliteStorage::in_memory().await.expect("open sqlite");
    for new in clinmatch::storage::seed_researchers() {
        store.create_researcher(new).await.expect("seed researcher");
    }
    MatchService::new(Arc::new(store))
}

/// A minimal researcher insert shape.
pub fn new_researcher(name: &str, description: &str, keywords: &[&str]) -> NewResearcher {
    NewResearcher {
        name: name.to_string(),
        email: format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
        institution: None,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        description: description.to_string(),
        capacity: 1,
    }
}

/// A problem insert shape with all query fields populated.
pub fn full_problem(description: &str, title: &str, domain: &str, keywords: &[&str]) -> NewProblem {
    NewProblem {
        description: description.to_string(),
        title: Some(title.to_string()),
        domain: Some(domain.to_string()),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}
