//! TF-IDF relevance matching between clinical problems and researcher profiles.
//!
//! Clinicians describe a problem; this crate ranks a registered pool of
//! researchers by textual relevance and returns the top N with normalized
//! `[0, 1]` scores. The scorer is a pure function — it rebuilds its TF-IDF
//! statistics per call over exactly the candidates supplied, holds no state
//! between calls, and is safe to run concurrently.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌──────────────────┐
//! │ tokenize.rs  │────▶│ scoring/tfidf.rs  │────▶│ scoring/scorer.rs │
//! │ (normalize,  │     │ (TfIdf: tf, df,   │     │ (match_problem_   │
//! │  tokenize)   │     │  idf, weight)     │     │  to_researchers)  │
//! └──────────────┘     └───────────────────┘     └──────────────────┘
//!                                                        │
//!                       ┌───────────────┐        ┌───────▼────────┐
//!                       │  storage/     │◀───────│   service.rs   │
//!                       │ (mem, sqlite) │        │ (MatchService) │
//!                       └───────────────┘        └────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use clinmatch::{match_problem_to_researchers, ClinicianProblem, Researcher};
//!
//! let scores = match_problem_to_researchers(&problem, &pool, 5)?;
//! for s in scores {
//!     println!("{}: {:.3}", s.researcher_id, s.score);
//! }
//! ```

// Module declarations
pub mod cli;
mod error;
mod scoring;
pub mod service;
pub mod storage;
pub mod testing;
mod tokenize;
mod types;

// Re-exports for public API
pub use error::{MatchError, StorageError};
pub use scoring::tfidf::TfIdf;
pub use scoring::{match_problem_to_researchers, DEFAULT_TOP_N, NEUTRAL_SCORE};
pub use service::MatchService;
pub use storage::{MemStorage, NewMatch, SqliteStorage, Storage};
pub use tokenize::{normalize, tokenize};
pub use types::{
    ClinicianProblem, Match, MatchResult, MatchScore, NewProblem, NewResearcher, ProblemId,
    ProblemWithMatches, Researcher, ResearcherId,
};
