// SPDX-License-Identifier: MIT OR Apache-2.0

//! Candidate entries and the build-once store they live in.
//!
//! The store is an immutable snapshot: it is built once from whatever the
//! enumerator produced and never grows or shrinks afterwards. Scores are not
//! kept here; see [`crate::ranker::RankedView`].

use serde::Serialize;

/// One searchable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Text the query is matched against (file name or relative path).
    pub key: String,
    /// Text shown to the user and handed to the launcher on selection.
    pub display_path: String,
}

impl Candidate {
    pub fn new(key: impl Into<String>, display_path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            display_path: display_path.into(),
        }
    }

    /// Candidate whose key is also its display path.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            key: path.clone(),
            display_path: path,
        }
    }
}

/// Flat, contiguous snapshot of every candidate for the session.
#[derive(Debug, Default)]
pub struct CandidateStore {
    entries: Vec<Candidate>,
    /// Lowercased keys, present only when case-insensitive matching is on.
    folded_keys: Option<Vec<String>>,
    /// Match key lengths in chars, precomputed for score normalization.
    key_lens: Vec<usize>,
}

impl CandidateStore {
    pub fn new(entries: Vec<Candidate>) -> Self {
        let key_lens = entries.iter().map(|c| c.key.chars().count()).collect();
        Self {
            entries,
            folded_keys: None,
            key_lens,
        }
    }

    /// Build a store that matches case-insensitively.
    ///
    /// Lowercasing can change a key's char count, so lengths are taken from
    /// the folded keys.
    pub fn with_folded_keys(entries: Vec<Candidate>) -> Self {
        let folded: Vec<String> = entries.iter().map(|c| c.key.to_lowercase()).collect();
        let key_lens = folded.iter().map(|k| k.chars().count()).collect();
        Self {
            entries,
            folded_keys: Some(folded),
            key_lens,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Candidate] {
        &self.entries
    }

    pub fn is_case_folded(&self) -> bool {
        self.folded_keys.is_some()
    }

    /// Key as the scorers should see it (lowercased when folding is on).
    pub fn match_key(&self, index: usize) -> &str {
        match &self.folded_keys {
            Some(folded) => &folded[index],
            None => &self.entries[index].key,
        }
    }

    /// Length of [`Self::match_key`] in chars.
    pub fn key_len(&self, index: usize) -> usize {
        self.key_lens[index]
    }
}

impl FromIterator<Candidate> for CandidateStore {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
