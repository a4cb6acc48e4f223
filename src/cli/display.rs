// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for clinmatch results.
//!
//! Aligned tables with score bars, colorized when stdout is a TTY.
//! Respects `NO_COLOR` and pipes plain text otherwise.

use crate::types::{MatchResult, ProblemWithMatches, Researcher};

const BAR_WIDTH: usize = 20;

/// Whether to emit ANSI color codes.
fn use_color() -> bool {
    atty::is(atty::Stream::Stdout) && std::env::var_os("NO_COLOR").is_none()
}

fn bold(text: &str) -> String {
    if use_color() {
        format!("\x1b[1m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}

fn dim(text: &str) -> String {
    if use_color() {
        format!("\x1b[2m{}\x1b[0m", text)
    } else {
        text.to_string()
    }
}

/// Green for strong matches, yellow for middling, default otherwise.
fn score_color(score: f64, text: &str) -> String {
    if !use_color() {
        return text.to_string();
    }
    let code = if score >= 0.75 {
        "32" // green
    } else if score >= 0.4 {
        "33" // yellow
    } else {
        "39" // default
    };
    format!("\x1b[{}m{}\x1b[0m", code, text)
}

/// A `[████░░░░]`-style bar proportional to the score.
fn score_bar(score: f64) -> String {
    let filled = (score * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Print the researcher pool as an aligned listing.
pub fn print_researchers(researchers: &[Researcher]) {
    if researchers.is_empty() {
        println!("no researchers registered");
        return;
    }
    println!("{}", bold(&format!("{} researchers", researchers.len())));
    for r in researchers {
        let institution = r.institution.as_deref().unwrap_or("—");
        println!();
        println!("  {}  {}", bold(&r.name), dim(r.id.as_str()));
        println!("  {} · {}", institution, r.email);
        println!("  {}", dim(&r.keywords.join(", ")));
    }
}

/// Print a submitted problem and its ranked matches.
pub fn print_matches(result: &ProblemWithMatches) {
    println!("{} {}", bold("problem"), dim(result.problem.id.as_str()));
    if let Some(title) = &result.problem.title {
        println!("  {}", title);
    }
    println!("  {}", result.problem.description);
    println!();

    if result.matches.is_empty() {
        println!("no matches (researcher pool is empty)");
        return;
    }

    for m in &result.matches {
        print_match_row(m);
    }
}

fn print_match_row(m: &MatchResult) {
    let score_text = format!("{:.3}", m.score);
    println!(
        "  {:>2}. {} {}  {}",
        m.rank,
        score_color(m.score, &score_bar(m.score)),
        score_color(m.score, &score_text),
        bold(&m.researcher.name),
    );
    let institution = m.researcher.institution.as_deref().unwrap_or("—");
    println!("      {}", dim(&format!("{} · {}", institution, m.researcher.email)));
}
