// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types with helpful suggestions
//!
//! The matching engine itself is total; these cover the edges around it.

use std::path::PathBuf;
use thiserror::Error;

/// A configuration file exists but could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Failed to parse config {}: {source}\n\n\
         Suggestion: check the key names and value types, e.g.\n  \
         strategy = \"bigram\"\n  height = 20",
        .path.display()
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Opening picked files failed
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(
        "Tool '{tool}' was not found on PATH\n\n\
         Suggestion: install it, pass another one with --tool, or set `tool` in \
         ~/.config/ngfind/config.toml.\n\
         Example: ngfind --tool vim"
    )]
    ToolNotFound { tool: String },

    #[error("Failed to start '{tool}' for {path}: {source}")]
    Spawn {
        tool: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{tool}' exited with {status} while opening {path}")]
    Failed {
        tool: String,
        path: String,
        status: std::process::ExitStatus,
    },
}
