// SPDX-License-Identifier: MIT OR Apache-2.0

//! ngfind - Interactive bigram-ranked fuzzy finder
//!
//! Enumerates files under a root once, then re-ranks the whole set on every
//! keystroke and opens whatever the user commits.

mod cli;
mod launcher;
mod logging;
mod picker;
mod query;
mod scanner;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use cli::{Cli, Commands, PickArgs, ScanArgs};
use ngfind::config::Config;
use ngfind::{Candidate, MatchOptions, Session};
use scanner::{CandidateScanner, ScanOptions};

fn match_options(scan: &ScanArgs, config: &Config) -> MatchOptions {
    MatchOptions {
        strategy: config.merge_strategy(scan.strategy.map(Into::into)),
        ignore_case: Config::merge_flag(scan.ignore_case, config.ignore_case),
    }
}

/// Enumerate candidates; an unusable root gives an empty set, not an error.
fn load_candidates(scan: &ScanArgs, config: &Config) -> (Option<PathBuf>, Vec<Candidate>) {
    let Some(root) = scanner::resolve_root(scan.root.as_deref(), config.root.as_deref()) else {
        return (None, Vec::new());
    };

    let options = ScanOptions {
        include_hidden: Config::merge_flag(scan.hidden, config.hidden),
        dirs: Config::merge_flag(scan.dirs, config.dirs),
        match_path: Config::merge_flag(scan.match_path, config.match_path),
        respect_gitignore: scan.gitignore,
        max_depth: scan.max_depth,
        exclude_patterns: config.exclude_patterns.clone(),
    };
    let candidates = CandidateScanner::new(&root, options).scan();
    (Some(root), candidates)
}

fn run_pick(args: PickArgs, scan: &ScanArgs, config: &Config) -> Result<()> {
    let (root, candidates) = load_candidates(scan, config);
    let mut session = Session::new(candidates, match_options(scan, config));
    let max_rows = args.height.or(config.height);

    let outcome = picker::run(&mut session, max_rows).context("Failed to run the terminal picker")?;
    if outcome == picker::Outcome::Aborted {
        return Ok(());
    }
    let Some(paths) = session.take_selection() else {
        return Ok(());
    };

    let root = root.unwrap_or_default();
    if args.print {
        let mut stdout = std::io::stdout().lock();
        launcher::print_all(&paths, &root, &mut stdout).context("Failed to print selection")?;
    } else {
        let tool = config.merge_tool(args.tool.as_deref());
        launcher::open_all(&paths, &root, &tool)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load();
    let format = cli.format.unwrap_or_default();

    match cli.command {
        None => run_pick(PickArgs::default(), &cli.scan, &config)?,
        Some(Commands::Pick(args)) => run_pick(args, &cli.scan, &config)?,
        Some(Commands::Rank { query, limit }) => {
            let (_, candidates) = load_candidates(&cli.scan, &config);
            query::rank::run(
                candidates,
                &query,
                match_options(&cli.scan, &config),
                config.merge_max_results(limit),
                format,
            )?;
        }
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "ngfind", &mut std::io::stdout());
        }
    }

    Ok(())
}
