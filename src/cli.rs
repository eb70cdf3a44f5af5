// SPDX-License-Identifier: MIT OR Apache-2.0

//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ngfind::Strategy;

/// ngfind - Interactive fuzzy finder ranked by bigram overlap
///
/// Type to re-rank every file under the root; typos cost a point instead of
/// hiding the file. Up/Down move, Tab queues, Enter opens, Esc quits.
#[derive(Parser, Debug)]
#[command(name = "ngfind")]
#[command(
    author,
    version,
    about,
    long_about = None,
    after_help = "Quickstart:\n  ngfind                      # pick files under $HOME\n  ngfind -C ~/src --tool vim  # pick under ~/src, open with vim\n  ngfind rank maingo -m 5     # print the best 5 matches"
)]
pub struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// Log debug output to stderr (NGFIND_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub scan: ScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Ranking strategy (mirrors the library type for clap)
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliStrategy {
    /// Bigram overlap, fast on any candidate count
    Bigram,
    /// Levenshtein likeness, slow above a few tens of thousands of candidates
    EditDistance,
}

impl From<CliStrategy> for Strategy {
    fn from(value: CliStrategy) -> Self {
        match value {
            CliStrategy::Bigram => Strategy::Bigram,
            CliStrategy::EditDistance => Strategy::EditDistance,
        }
    }
}

/// Which entries become candidates and how they are matched
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Directory to enumerate (defaults to the home directory)
    #[arg(short = 'C', long, global = true)]
    pub root: Option<String>,

    /// Descend into hidden directories
    #[arg(long, global = true)]
    pub hidden: bool,

    /// List directories instead of files
    #[arg(long, global = true)]
    pub dirs: bool,

    /// Match against the relative path instead of the name
    #[arg(short = 'p', long = "match-path", global = true)]
    pub match_path: bool,

    /// Honor .gitignore and .ignore files
    #[arg(long, global = true)]
    pub gitignore: bool,

    /// Maximum directory depth to descend
    #[arg(short = 'd', long = "max-depth", global = true)]
    pub max_depth: Option<usize>,

    /// Case-insensitive matching
    #[arg(short = 'i', long = "ignore-case", global = true)]
    pub ignore_case: bool,

    /// Ranking strategy
    #[arg(short = 's', long, value_enum, global = true)]
    pub strategy: Option<CliStrategy>,
}

/// Interactive picker options
#[derive(Args, Debug, Clone, Default)]
pub struct PickArgs {
    /// Program that opens the picked files (default: code)
    #[arg(short, long)]
    pub tool: Option<String>,

    /// Print the picked paths instead of launching a tool
    #[arg(long)]
    pub print: bool,

    /// Most list rows to show; the list fills the terminal otherwise
    #[arg(long)]
    pub height: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pick files interactively (default)
    #[command(visible_aliases = ["p"])]
    Pick(PickArgs),

    /// Print the best matches for a query without a terminal UI
    #[command(visible_aliases = ["r"])]
    Rank {
        /// Query to rank against
        query: String,

        /// Maximum number of results to print
        #[arg(short = 'm', long = "limit")]
        limit: Option<usize>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
