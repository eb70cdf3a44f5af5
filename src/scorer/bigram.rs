// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bigram-overlap heuristic.
//!
//! The query is cut into overlapping two-character windows. Every window found
//! in the key adds a point, every miss takes one away (never below zero), and
//! the final tally is squared and divided by the key length. Short keys that
//! contain most of the query therefore outrank long keys that happen to
//! contain a few of its pieces.

/// Overlapping bigrams of a query, split once per keystroke.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bigrams {
    grams: Vec<String>,
}

impl Bigrams {
    pub fn new(query: &str) -> Self {
        let chars: Vec<char> = query.chars().collect();
        let grams = chars
            .windows(2)
            .map(|pair| pair.iter().collect::<String>())
            .collect();
        Self { grams }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.grams
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Running hit/miss tally against `key`, floored at zero after each miss.
    pub fn tally(&self, key: &str) -> u32 {
        let mut tally: u32 = 0;
        for gram in &self.grams {
            if key.contains(gram.as_str()) {
                tally += 1;
            } else {
                tally = tally.saturating_sub(1);
            }
        }
        tally
    }

    /// Normalized score; `key_len` is the key length in chars.
    pub fn score(&self, key: &str, key_len: usize) -> f64 {
        if self.grams.is_empty() {
            return 0.0;
        }
        let tally = f64::from(self.tally(key));
        tally * tally / key_len.max(1) as f64
    }
}

/// One-shot convenience over [`Bigrams`].
pub fn score(query: &str, key: &str) -> f64 {
    Bigrams::new(query).score(key, key.chars().count())
}
