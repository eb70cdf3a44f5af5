// SPDX-License-Identifier: MIT OR Apache-2.0

//! Non-interactive ranking: run a query through a session and print the top rows

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

use crate::cli::OutputFormat;
use ngfind::{Candidate, MatchOptions, RankedCandidate, Session};

/// Minimal ranked row for JSON output
#[derive(Debug, Serialize)]
struct RankRowJson<'a> {
    path: &'a str,
    key: &'a str,
    score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    edit_distance: Option<usize>,
}

impl<'a> RankRowJson<'a> {
    fn from_entry(entry: &RankedCandidate<'a>) -> Self {
        Self {
            path: entry.candidate.display_path.as_str(),
            key: entry.candidate.key.as_str(),
            score: entry.rank_score,
            edit_distance: entry.edit_distance,
        }
    }
}

/// Type `query` into a fresh session, one char per keystroke, and keep the
/// first `limit` ranked entries.
pub fn ranked_session(
    candidates: Vec<Candidate>,
    query: &str,
    options: MatchOptions,
    limit: usize,
) -> Session {
    let mut session = Session::new(candidates, options);
    session.on_resize(limit);
    for ch in query.chars() {
        session.on_query_append(ch);
    }
    session
}

pub fn run(
    candidates: Vec<Candidate>,
    query: &str,
    options: MatchOptions,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let session = ranked_session(candidates, query, options, limit);
    let mut stdout = std::io::stdout().lock();
    write_results(&mut stdout, &session, query, format)
}

fn write_results(
    out: &mut impl Write,
    session: &Session,
    query: &str,
    format: OutputFormat,
) -> Result<()> {
    let window = session.current_window();

    match format {
        OutputFormat::Json => {
            let rows: Vec<RankRowJson<'_>> = window.iter().map(RankRowJson::from_entry).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        OutputFormat::Text => {
            if session.store().is_empty() {
                writeln!(out, "{} No candidates to rank for: {}", "✗".red(), query.yellow())?;
            } else {
                for entry in &window {
                    let score = format!("{:>8.4}", entry.rank_score);
                    writeln!(out, "{}  {}", score.yellow(), entry.candidate.display_path.cyan())?;
                }
            }
        }
    }

    Ok(())
}
