// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the matching pipeline.
//!
//! These types mirror the three stored record kinds (researchers, clinician
//! problems, matches) plus the transient shapes the scorer produces. Wire
//! names are camelCase so JSON round-trips match the original API payloads.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Match**: `score ∈ [0, 1]` and `rank ≥ 1`. The scorer guarantees the
//!   former; the service assigns the latter as the 1-based position in the
//!   ranked output.
//! - **Ids**: `ResearcherId` and `ProblemId` are opaque and stable — they
//!   round-trip unchanged through the scorer and both stores. Never parse
//!   or compare them as anything but strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// NEWTYPES: Opaque identifiers
// =============================================================================

/// Opaque identifier for a researcher profile.
///
/// Prevents accidentally passing a problem id where a researcher id is
/// expected. Use `ResearcherId::generate()` for new records, or `.into()`
/// when the value comes from a trusted store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResearcherId(pub String);

impl ResearcherId {
    /// Mint a fresh random id (UUID v4).
    pub fn generate() -> Self {
        ResearcherId(Uuid::new_v4().to_string())
    }

    /// Get the underlying string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResearcherId {
    fn from(id: String) -> Self {
        ResearcherId(id)
    }
}

impl std::fmt::Display for ResearcherId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque identifier for a submitted clinician problem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProblemId(pub String);

impl ProblemId {
    /// Mint a fresh random id (UUID v4).
    pub fn generate() -> Self {
        ProblemId(Uuid::new_v4().to_string())
    }

    /// Get the underlying string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ProblemId {
    fn from(id: String) -> Self {
        ProblemId(id)
    }
}

impl std::fmt::Display for ProblemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// STORED RECORDS
// =============================================================================

/// A registered researcher profile — one candidate in the matching pool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Researcher {
    pub id: ResearcherId,
    pub name: String,
    pub email: String,
    pub institution: Option<String>,
    pub keywords: Vec<String>,
    pub description: String,
    /// How many concurrent collaborations this researcher will take on.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

/// Insert shape for a researcher: everything but the store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResearcher {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub institution: Option<String>,
    pub keywords: Vec<String>,
    pub description: String,
    #[serde(default = "default_capacity")]
    pub capacity: u32,
}

fn default_capacity() -> u32 {
    1
}

impl Researcher {
    /// Render the profile to the single case-folded text blob the scorer
    /// tokenizes: description followed by the keyword list.
    pub fn profile_text(&self) -> String {
        let keywords = self
            .keywords
            .iter()
            .map(|k| k.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{} {}", self.description.to_lowercase(), keywords)
    }
}

/// A clinician-submitted problem — the query side of a matching call.
///
/// Only `description` is required; title, domain, and keywords enrich the
/// query text when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicianProblem {
    pub id: ProblemId,
    pub description: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Insert shape for a clinician problem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProblem {
    pub description: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl ClinicianProblem {
    /// Render the problem to the single case-folded query blob: title,
    /// domain, keywords, then the free-text description. Absent optional
    /// fields are skipped, not rendered as placeholders.
    pub fn query_text(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if let Some(title) = &self.title {
            parts.push(title.to_lowercase());
        }
        if let Some(domain) = &self.domain {
            parts.push(domain.to_lowercase());
        }
        if !self.keywords.is_empty() {
            parts.push(
                self.keywords
                    .iter()
                    .map(|k| k.to_lowercase())
                    .collect::<Vec<_>>()
                    .join(" "),
            );
        }
        parts.push(self.description.to_lowercase());
        parts.join(" ")
    }
}

/// One persisted match row: a scored (problem, researcher) pair.
///
/// `rank` is the 1-based position in the ranked output at the time the
/// match was computed. It is an ordinal, stored as an integer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub problem_id: ProblemId,
    pub researcher_id: ResearcherId,
    pub score: f64,
    pub rank: u32,
}

// =============================================================================
// SCORER OUTPUT
// =============================================================================

/// What the scorer returns per candidate: id plus normalized score.
///
/// `score` is always in `[0, 1]` — either `raw / max_raw` clamped to 1, or
/// the fixed neutral 0.5 when normalization is degenerate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub researcher_id: ResearcherId,
    pub score: f64,
}

/// A stored match joined back to its full researcher record for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub researcher: Researcher,
    pub score: f64,
    pub rank: u32,
}

/// A problem together with its ranked matches — the service's return shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemWithMatches {
    pub problem: ClinicianProblem,
    pub matches: Vec<MatchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{make_problem, make_researcher};

    #[test]
    fn query_text_concatenates_all_present_fields() {
        let mut problem = make_problem("Reducing readmission rates");
        problem.title = Some("Heart Failure".to_string());
        problem.domain = Some("Cardiology".to_string());
        problem.keywords = vec!["Readmission".to_string(), "Discharge".to_string()];

        assert_eq!(
            problem.query_text(),
            "heart failure cardiology readmission discharge reducing readmission rates"
        );
    }

    #[test]
    fn query_text_skips_absent_optional_fields() {
        let problem = make_problem("Chronic pain management");
        assert_eq!(problem.query_text(), "chronic pain management");
    }

    #[test]
    fn profile_text_folds_case() {
        let researcher = make_researcher("Dr. Test", "COPD Management", &["Pulmonary", "COPD"]);
        assert_eq!(researcher.profile_text(), "copd management pulmonary copd");
    }

    #[test]
    fn ids_round_trip_through_json_as_plain_strings() {
        let id = ResearcherId::generate();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_str()));
        let back: ResearcherId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn match_wire_names_are_camel_case() {
        let m = Match {
            id: "m1".to_string(),
            problem_id: ProblemId::generate(),
            researcher_id: ResearcherId::generate(),
            score: 0.5,
            rank: 1,
        };
        let value = serde_json::to_value(&m).unwrap();
        assert!(value.get("problemId").is_some());
        assert!(value.get("researcherId").is_some());
        assert!(value.get("problem_id").is_none());
    }
}
