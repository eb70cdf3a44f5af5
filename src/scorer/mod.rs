// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scoring strategies - map (query, key) to a comparable rank key

pub mod bigram;
pub mod edit_distance;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub use bigram::Bigrams;
pub use edit_distance::{edit_distance, likeness};

/// Active ranking strategy for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Bigram-overlap score, higher is better.
    #[default]
    Bigram,
    /// Edit-distance likeness, lower is better.
    EditDistance,
}

impl Strategy {
    /// Order two scores so that the better match sorts first.
    pub fn compare(self, a: f64, b: f64) -> Ordering {
        match self {
            Strategy::Bigram => b.total_cmp(&a),
            Strategy::EditDistance => a.total_cmp(&b),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Strategy::Bigram => Strategy::EditDistance,
            Strategy::EditDistance => Strategy::Bigram,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Bigram => f.write_str("bigram"),
            Strategy::EditDistance => f.write_str("edit-distance"),
        }
    }
}

/// Matching knobs that are fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub strategy: Strategy,
    pub ignore_case: bool,
}

/// Per-keystroke query state, prepared once and shared by every worker.
#[derive(Debug, Clone)]
pub enum PreparedQuery {
    Bigram(Bigrams),
    /// Query chars; `None` when the query is empty and nothing should move.
    EditDistance(Option<Vec<char>>),
}

impl PreparedQuery {
    pub fn new(query: &str, options: MatchOptions) -> Self {
        let folded;
        let query = if options.ignore_case {
            folded = query.to_lowercase();
            folded.as_str()
        } else {
            query
        };

        match options.strategy {
            Strategy::Bigram => PreparedQuery::Bigram(Bigrams::new(query)),
            Strategy::EditDistance => PreparedQuery::EditDistance(if query.is_empty() {
                None
            } else {
                Some(query.chars().collect())
            }),
        }
    }

    /// Score one key. Returns the rank score and, in edit-distance mode, the
    /// raw distance.
    pub fn score(&self, key: &str, key_len: usize) -> (f64, Option<usize>) {
        match self {
            PreparedQuery::Bigram(grams) => (grams.score(key, key_len), None),
            PreparedQuery::EditDistance(None) => (0.0, None),
            PreparedQuery::EditDistance(Some(query)) => {
                let key_chars: Vec<char> = key.chars().collect();
                let distance = edit_distance::distance_chars(query, &key_chars);
                (distance as f64 / key_len.max(1) as f64, Some(distance))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bigram_prefers_higher_scores() {
        assert_eq!(Strategy::Bigram.compare(2.0, 1.0), Ordering::Less);
        assert_eq!(Strategy::Bigram.compare(1.0, 1.0), Ordering::Equal);
    }

    #[test]
    fn edit_distance_prefers_lower_likeness() {
        assert_eq!(Strategy::EditDistance.compare(0.2, 0.5), Ordering::Less);
    }

    #[test]
    fn prepared_query_folds_case_when_asked() {
        let options = MatchOptions {
            strategy: Strategy::Bigram,
            ignore_case: true,
        };
        let prepared = PreparedQuery::new("GO", options);
        assert_eq!(prepared.score("go.mod", 6), (1.0 / 6.0, None));
    }

    #[test]
    fn prepared_query_is_case_sensitive_by_default() {
        let prepared = PreparedQuery::new("GO", MatchOptions::default());
        assert_eq!(prepared.score("go.mod", 6).0, 0.0);
    }

    #[test]
    fn empty_edit_distance_query_leaves_everything_tied() {
        let options = MatchOptions {
            strategy: Strategy::EditDistance,
            ignore_case: false,
        };
        let prepared = PreparedQuery::new("", options);
        assert_eq!(prepared.score("anything", 8), (0.0, None));
    }

    #[test]
    fn edit_distance_query_reports_raw_distance() {
        let options = MatchOptions {
            strategy: Strategy::EditDistance,
            ignore_case: false,
        };
        let prepared = PreparedQuery::new("main", options);
        assert_eq!(prepared.score("main.go", 7), (3.0 / 7.0, Some(3)));
    }

    #[test]
    fn strategy_round_trips_through_toml_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            strategy: Strategy,
        }
        let parsed: Wrapper = toml::from_str("strategy = \"edit-distance\"").expect("parse");
        assert_eq!(parsed.strategy, Strategy::EditDistance);
        assert_eq!(Strategy::EditDistance.to_string(), "edit-distance");
    }
}
