// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate enumeration using the ignore crate (same walker as ripgrep)
//!
//! Walk failures never surface as errors: an unreadable directory or a
//! broken link only means fewer candidates in the snapshot.

use ignore::{WalkBuilder, WalkState};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use ngfind::Candidate;

/// What to enumerate and how to key it
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub include_hidden: bool,
    pub dirs: bool,
    pub match_path: bool,
    pub respect_gitignore: bool,
    pub max_depth: Option<usize>,
    pub exclude_patterns: Vec<String>,
}

/// Walks a root and turns entries into candidates
pub struct CandidateScanner {
    root: PathBuf,
    options: ScanOptions,
}

impl CandidateScanner {
    pub fn new(root: impl AsRef<Path>, options: ScanOptions) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            options,
        }
    }

    fn make_builder(&self) -> WalkBuilder {
        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(false)
            .follow_links(false)
            .max_depth(self.options.max_depth);

        if self.options.respect_gitignore {
            builder.git_ignore(true).git_exclude(true).git_global(true);
        } else {
            builder
                .ignore(false)
                .parents(false)
                .git_ignore(false)
                .git_exclude(false)
                .git_global(false);
        }

        let include_hidden = self.options.include_hidden;
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            name != ".git" && (include_hidden || !name.starts_with('.'))
        });

        builder
    }

    /// Enumerate every matching entry, sorted by display path
    pub fn scan(&self) -> Vec<Candidate> {
        let (tx, rx) = mpsc::channel();
        let progress = spinner(&self.root);

        let walker = self.make_builder().build_parallel();

        walker.run(|| {
            let tx = tx.clone();
            let progress = progress.clone();
            let root = self.root.as_path();
            let options = &self.options;

            Box::new(move |entry| {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        tracing::debug!("skipping unreadable entry: {err}");
                        return WalkState::Continue;
                    }
                };
                if entry.depth() == 0 {
                    return WalkState::Continue;
                }

                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                let Ok(relative) = entry.path().strip_prefix(root) else {
                    return WalkState::Continue;
                };
                let display_path = relative.to_string_lossy().into_owned();

                if options
                    .exclude_patterns
                    .iter()
                    .any(|pattern| display_path.contains(pattern.as_str()))
                {
                    return if is_dir {
                        WalkState::Skip
                    } else {
                        WalkState::Continue
                    };
                }

                if is_dir == options.dirs {
                    let key = if options.match_path {
                        display_path.clone()
                    } else {
                        entry.file_name().to_string_lossy().into_owned()
                    };
                    progress.inc(1);
                    let _ = tx.send(Candidate::new(key, display_path));
                }
                WalkState::Continue
            })
        });

        drop(tx);
        let mut candidates: Vec<Candidate> = rx.into_iter().collect();
        candidates.sort_by(|a, b| a.display_path.cmp(&b.display_path));
        progress.finish_and_clear();

        tracing::info!(
            root = %self.root.display(),
            candidates = candidates.len(),
            "enumerated candidates"
        );
        candidates
    }
}

fn spinner(root: &Path) -> ProgressBar {
    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg} {pos} entries") {
        progress.set_style(style);
    }
    progress.set_message(format!("Scanning {}", root.display()));
    progress.enable_steady_tick(Duration::from_millis(120));
    progress
}

/// Pick the directory to enumerate: CLI, then config, then the home directory.
///
/// Returns `None` when nothing usable is found; callers treat that as an empty
/// candidate set.
pub fn resolve_root(cli_root: Option<&str>, config_root: Option<&Path>) -> Option<PathBuf> {
    let root = cli_root
        .map(PathBuf::from)
        .or_else(|| config_root.map(Path::to_path_buf))
        .or_else(dirs::home_dir);

    match root {
        Some(root) if root.is_dir() => Some(root),
        Some(root) => {
            tracing::warn!(root = %root.display(), "root is not a directory, no candidates");
            None
        }
        None => {
            tracing::warn!("could not determine a root directory, no candidates");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, "").expect("write file");
    }

    fn paths(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.display_path.as_str()).collect()
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().expect("tempdir");
        touch(dir.path(), "src/main.rs");
        touch(dir.path(), "src/lib.rs");
        touch(dir.path(), ".env");
        touch(dir.path(), ".config/app.toml");
        touch(dir.path(), ".git/HEAD");
        touch(dir.path(), "README.md");
        dir
    }

    #[test]
    fn skips_hidden_dirs_and_git_but_keeps_hidden_files() {
        let dir = fixture();
        let candidates = CandidateScanner::new(dir.path(), ScanOptions::default()).scan();
        assert_eq!(paths(&candidates), vec![".env", "README.md", "src/lib.rs", "src/main.rs"]);
        assert_eq!(candidates[2].key, "lib.rs");
    }

    #[test]
    fn hidden_option_descends_but_still_skips_git() {
        let dir = fixture();
        let options = ScanOptions {
            include_hidden: true,
            ..ScanOptions::default()
        };
        let candidates = CandidateScanner::new(dir.path(), options).scan();
        let found = paths(&candidates);
        assert!(found.contains(&".config/app.toml"));
        assert!(!found.iter().any(|p| p.starts_with(".git/")));
    }

    #[test]
    fn match_path_keys_on_relative_path() {
        let dir = fixture();
        let options = ScanOptions {
            match_path: true,
            ..ScanOptions::default()
        };
        let candidates = CandidateScanner::new(dir.path(), options).scan();
        assert!(candidates.iter().any(|c| c.key == "src/main.rs"));
    }

    #[test]
    fn dirs_option_lists_directories_only() {
        let dir = fixture();
        touch(dir.path(), "src/nested/deep.rs");
        let options = ScanOptions {
            dirs: true,
            ..ScanOptions::default()
        };
        let candidates = CandidateScanner::new(dir.path(), options).scan();
        assert_eq!(paths(&candidates), vec!["src", "src/nested"]);
        assert_eq!(candidates[1].key, "nested");
    }

    #[test]
    fn exclude_patterns_prune_matching_paths() {
        let dir = fixture();
        touch(dir.path(), "node_modules/pkg/index.js");
        let options = ScanOptions {
            exclude_patterns: vec!["node_modules".into()],
            ..ScanOptions::default()
        };
        let candidates = CandidateScanner::new(dir.path(), options).scan();
        assert!(!candidates.iter().any(|c| c.display_path.contains("node_modules")));
    }

    #[test]
    fn max_depth_limits_descent() {
        let dir = fixture();
        let options = ScanOptions {
            max_depth: Some(1),
            ..ScanOptions::default()
        };
        let candidates = CandidateScanner::new(dir.path(), options).scan();
        assert_eq!(paths(&candidates), vec![".env", "README.md"]);
    }

    #[test]
    fn missing_root_yields_no_candidates() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("absent");
        assert!(resolve_root(missing.to_str(), None).is_none());
        let candidates = CandidateScanner::new(&missing, ScanOptions::default()).scan();
        assert!(candidates.is_empty());
    }

    #[test]
    fn cli_root_wins_over_config_root() {
        let cli = TempDir::new().expect("tempdir");
        let config = TempDir::new().expect("tempdir");
        let root = resolve_root(cli.path().to_str(), Some(config.path())).expect("root");
        assert_eq!(root, cli.path());
    }
}
