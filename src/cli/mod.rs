// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the clinmatch command-line interface.
//!
//! Four subcommands: `seed` to create the demo researcher pool, `researchers`
//! to list it, `match` to submit a clinician problem and rank the pool
//! against it, and `show` to redisplay the stored matches for an earlier
//! problem. Every subcommand honors `--db`: with a path it runs against a
//! SQLite file, without one it runs against a seeded in-memory store.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "clinmatch",
    about = "Rank registered researchers against a clinical problem by TF-IDF relevance",
    version
)]
pub struct Cli {
    /// SQLite database file (created if missing). Omit to use an in-memory
    /// store seeded with the demo pool.
    #[arg(long, global = true)]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Insert the built-in demo researcher pool into the store
    Seed,

    /// List the registered researcher pool
    Researchers,

    /// Submit a clinical problem and display the top-ranked researchers
    Match {
        /// Free-text problem description
        description: String,

        /// Optional problem title, folded into the query text
        #[arg(long)]
        title: Option<String>,

        /// Optional clinical domain, folded into the query text
        #[arg(long)]
        domain: Option<String>,

        /// Comma-separated keywords, folded into the query text
        #[arg(long, value_delimiter = ',')]
        keywords: Vec<String>,

        /// Maximum number of matches to return
        #[arg(short = 'n', long, default_value_t = crate::scoring::DEFAULT_TOP_N)]
        top_n: usize,
    },

    /// Display the stored matches for a previously submitted problem
    Show {
        /// Problem id printed by `match`
        problem_id: String,
    },
}
