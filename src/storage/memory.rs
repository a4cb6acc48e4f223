// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory storage: `RwLock`'d maps plus a demo seed pool.
//!
//! Insertion order is preserved for `get_all_researchers` by keeping ids in
//! a side vector — candidate order feeds straight into the scorer, and the
//! scorer's tie-breaking depends on it being stable.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::storage::{NewMatch, Storage};
use crate::types::{
    ClinicianProblem, Match, MatchResult, NewProblem, NewResearcher, ProblemId, Researcher,
    ResearcherId,
};

/// In-memory backend. Cheap to create, nothing survives the process.
#[derive(Default)]
pub struct MemStorage {
    researchers: RwLock<HashMap<ResearcherId, Researcher>>,
    /// Insertion order of researcher ids.
    researcher_order: RwLock<Vec<ResearcherId>>,
    problems: RwLock<HashMap<ProblemId, ClinicianProblem>>,
    matches: RwLock<HashMap<String, Match>>,
}

impl MemStorage {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with the demo researcher pool.
    pub fn seeded() -> Self {
        let store = Self::new();
        for new in seed_researchers() {
            store.insert_researcher(new);
        }
        store
    }

    fn insert_researcher(&self, new: NewResearcher) -> Researcher {
        let researcher = Researcher {
            id: ResearcherId::generate(),
            name: new.name,
            email: new.email,
            institution: new.institution,
            keywords: new.keywords,
            description: new.description,
            capacity: new.capacity,
        };
        self.researcher_order.write().push(researcher.id.clone());
        self.researchers
            .write()
            .insert(researcher.id.clone(), researcher.clone());
        researcher
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn create_researcher(&self, new: NewResearcher) -> Result<Researcher, StorageError> {
        Ok(self.insert_researcher(new))
    }

    async fn get_all_researchers(&self) -> Result<Vec<Researcher>, StorageError> {
        let researchers = self.researchers.read();
        Ok(self
            .researcher_order
            .read()
            .iter()
            .filter_map(|id| researchers.get(id).cloned())
            .collect())
    }

    async fn get_researcher_by_id(
        &self,
        id: &ResearcherId,
    ) -> Result<Option<Researcher>, StorageError> {
        Ok(self.researchers.read().get(id).cloned())
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
        self.problems
            .write()
            .insert(problem.id.clone(), problem.clone());
        Ok(problem)
    }

    async fn get_problem_by_id(
        &self,
        id: &ProblemId,
    ) -> Result<Option<ClinicianProblem>, StorageError> {
        Ok(self.problems.read().get(id).cloned())
    }

    async fn create_matches(
        &self,
        problem_id: &ProblemId,
        new_matches: Vec<NewMatch>,
    ) -> Result<Vec<Match>, StorageError> {
        let mut created = Vec::with_capacity(new_matches.len());
        let mut matches = self.matches.write();
        for new in new_matches {
            let m = Match {
                id: Uuid::new_v4().to_string(),
                problem_id: problem_id.clone(),
                researcher_id: new.researcher_id,
                score: new.score,
                rank: new.rank,
            };
            matches.insert(m.id.clone(), m.clone());
            created.push(m);
        }
        Ok(created)
    }

    async fn get_matches_by_problem_id(
        &self,
        problem_id: &ProblemId,
    ) -> Result<Vec<MatchResult>, StorageError> {
        let mut rows: Vec<Match> = self
            .matches
            .read()
            .values()
            .filter(|m| &m.problem_id == problem_id)
            .cloned()
            .collect();
        rows.sort_by_key(|m| m.rank);

        let researchers = self.researchers.read();
        Ok(rows
            .into_iter()
            .filter_map(|m| {
                researchers.get(&m.researcher_id).map(|r| MatchResult {
                    researcher: r.clone(),
                    score: m.score,
                    rank: m.rank,
                })
            })
            .collect())
    }
}

/// The demo pool: eight researcher profiles spanning distinct specialties,
/// used by `MemStorage::seeded()` and the CLI `seed` command.
pub fn seed_researchers() -> Vec<NewResearcher> {
    let raw: &[(&str, &str, &str, &[&str], &str, u32)] = &[
        (
            "Dr. Sarah Chen",
            "s.chen@medresearch.edu",
            "Stanford Medical Center",
            &["antibiotic resistance", "infectious diseases", "hospital-acquired infections", "antimicrobial stewardship"],
            "Specializing in combating antibiotic-resistant infections in hospital settings. My research focuses on developing evidence-based prophylactic strategies for post-operative patients, particularly in cardiac surgery.",
            3,
        ),
        (
            "Dr. Michael Rodriguez",
            "m.rodriguez@heartinstitute.org",
            "Mayo Clinic Heart Institute",
            &["heart failure", "cardiology", "patient readmission", "care coordination"],
            "Expert in heart failure management with a focus on reducing 30-day readmission rates. My work includes developing comprehensive discharge planning protocols and remote monitoring systems for heart failure patients.",
            2,
        ),
        (
            "Dr. Jennifer Kim",
            "j.kim@telemedicine.edu",
            "Johns Hopkins Telemedicine Center",
            &["telemedicine", "chronic pain", "rural health", "digital health"],
            "Leading research on telemedicine interventions for underserved populations. Specialized in remote chronic pain management and developing accessible digital health solutions for rural communities.",
            4,
        ),
        (
            "Dr. David Thompson",
            "d.thompson@oncology.org",
            "MD Anderson Cancer Center",
            &["oncology", "cancer treatment", "immunotherapy", "clinical trials"],
            "Cancer research specialist focusing on novel immunotherapy approaches and patient-centered clinical trial design. Experience with treatment adherence and quality of life outcomes in cancer patients.",
            1,
        ),
        (
            "Dr. Lisa Patel",
            "l.patel@diabetes.edu",
            "Joslin Diabetes Center",
            &["diabetes", "chronic disease management", "patient adherence", "behavioral health"],
            "Research focused on improving medication adherence in patients with chronic conditions, particularly diabetes. Expertise in behavioral interventions and patient education strategies.",
            3,
        ),
        (
            "Dr. Robert Anderson",
            "r.anderson@surgery.org",
            "Cleveland Clinic",
            &["surgery", "post-operative care", "infection prevention", "quality improvement"],
            "Surgeon-scientist studying surgical site infection prevention and post-operative outcomes. Research includes developing quality improvement protocols for surgical departments.",
            2,
        ),
        (
            "Dr. Emily Martinez",
            "e.martinez@geriatrics.edu",
            "UCLA Geriatrics Institute",
            &["geriatrics", "elderly care", "falls prevention", "dementia care"],
            "Geriatrics researcher specializing in fall prevention and cognitive health in older adults. Work includes developing comprehensive care models for elderly patients with multiple comorbidities.",
            5,
        ),
        (
            "Dr. James Wilson",
            "j.wilson@pulmonary.org",
            "National Jewish Health",
            &["pulmonary medicine", "COPD", "respiratory diseases", "rehabilitation"],
            "Pulmonary disease specialist with expertise in COPD management and pulmonary rehabilitation programs. Research focuses on improving quality of life and reducing hospital readmissions in respiratory patients.",
            3,
        ),
    ];

    raw.iter()
        .map(|(name, email, institution, keywords, description, capacity)| NewResearcher {
            name: name.to_string(),
            email: email.to_string(),
            institution: Some(institution.to_string()),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            description: description.to_string(),
            capacity: *capacity,
        })
        .collect()
}
