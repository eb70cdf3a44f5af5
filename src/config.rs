// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file support for ngfind
//!
//! Loads configuration from .ngfindrc.toml in current directory or ~/.config/ngfind/config.toml

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;
use crate::scorer::Strategy;

/// Tool used to open picked files when nothing else is configured
pub const DEFAULT_TOOL: &str = "code";

/// Configuration loaded from .ngfindrc.toml or ~/.config/ngfind/config.toml
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory to enumerate (defaults to the home directory)
    pub root: Option<PathBuf>,
    /// Program that opens committed selections
    pub tool: Option<String>,
    /// Visible rows before the terminal reports its size
    pub height: Option<usize>,
    /// Rows printed by `ngfind rank`
    pub max_results: Option<usize>,
    /// Ranking strategy
    pub strategy: Option<Strategy>,
    /// Case-insensitive matching
    pub ignore_case: Option<bool>,
    /// Match against the relative path instead of the file name
    pub match_path: Option<bool>,
    /// Descend into hidden directories
    pub hidden: Option<bool>,
    /// List directories instead of files
    pub dirs: Option<bool>,
    /// Path substrings to exclude while enumerating
    pub exclude_patterns: Vec<String>,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .ngfindrc.toml in current directory
    /// 2. ~/.config/ngfind/config.toml
    pub fn load() -> Self {
        let mut candidates = vec![PathBuf::from(".ngfindrc.toml")];
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".config").join("ngfind").join("config.toml"));
        }

        for path in candidates {
            match Self::load_from_path(&path) {
                Ok(Some(config)) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return config;
                }
                Ok(None) => {}
                Err(err) => tracing::warn!("{err}"),
            }
        }

        Self::default()
    }

    /// `Ok(None)` when the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content)
            .map(Some)
            .map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Merge CLI options with config (CLI wins)
    pub fn merge_max_results(&self, cli_value: Option<usize>) -> usize {
        cli_value.or(self.max_results).unwrap_or(20)
    }

    pub fn merge_tool(&self, cli_value: Option<&str>) -> String {
        cli_value
            .map(str::to_string)
            .or_else(|| self.tool.clone())
            .unwrap_or_else(|| DEFAULT_TOOL.to_string())
    }

    pub fn merge_strategy(&self, cli_value: Option<Strategy>) -> Strategy {
        cli_value.or(self.strategy).unwrap_or_default()
    }

    /// A flag given on the command line turns the option on; otherwise config decides.
    pub fn merge_flag(cli_flag: bool, config_value: Option<bool>) -> bool {
        cli_flag || config_value.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_all_keys() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
root = "/srv/projects"
tool = "vim"
height = 20
max_results = 5
strategy = "edit-distance"
ignore_case = true
match_path = true
hidden = false
dirs = true
exclude_patterns = ["node_modules", "target"]
"#,
        )
        .expect("write");

        let config = Config::load_from_path(&path).expect("load").expect("present");
        assert_eq!(config.root.as_deref(), Some(Path::new("/srv/projects")));
        assert_eq!(config.tool.as_deref(), Some("vim"));
        assert_eq!(config.height, Some(20));
        assert_eq!(config.strategy, Some(Strategy::EditDistance));
        assert_eq!(config.ignore_case, Some(true));
        assert_eq!(config.dirs, Some(true));
        assert_eq!(config.exclude_patterns, vec!["node_modules", "target"]);
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = TempDir::new().expect("tempdir");
        let loaded = Config::load_from_path(&dir.path().join("absent.toml")).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn malformed_file_reports_path() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "height = \"tall\"").expect("write");
        let err = Config::load_from_path(&path).expect_err("should fail");
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn cli_values_win_over_config() {
        let config = Config {
            tool: Some("vim".into()),
            max_results: Some(3),
            strategy: Some(Strategy::EditDistance),
            ..Config::default()
        };
        assert_eq!(config.merge_tool(Some("nano")), "nano");
        assert_eq!(config.merge_tool(None), "vim");
        assert_eq!(config.merge_max_results(Some(9)), 9);
        assert_eq!(config.merge_max_results(None), 3);
        assert_eq!(config.merge_strategy(Some(Strategy::Bigram)), Strategy::Bigram);
        assert_eq!(config.merge_strategy(None), Strategy::EditDistance);
        assert_eq!(Config::default().merge_tool(None), DEFAULT_TOOL);
        assert!(Config::merge_flag(false, Some(true)));
        assert!(!Config::merge_flag(false, None));
    }
}
