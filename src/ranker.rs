// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ranker - score every candidate and produce a total order
//!
//! Each pass starts from store order and applies a stable sort, so candidates
//! with equal scores keep their store order and a view depends only on the
//! store, the query and the match options.

use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

use crate::candidate::{Candidate, CandidateStore};
use crate::scorer::{MatchOptions, PreparedQuery, Strategy};

/// Below this many candidates per worker, rayon splitting is not worth it.
const PAR_MIN_LEN: usize = 2_048;

/// The store's current permutation, best match first, plus derived scores.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedView {
    /// Store indices in rank order.
    order: Vec<usize>,
    /// Rank score per store index.
    scores: Vec<f64>,
    /// Edit distance per store index (edit-distance strategy only).
    distances: Vec<Option<usize>>,
    strategy: Strategy,
}

/// A candidate joined with its derived fields for the current query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedCandidate<'a> {
    #[serde(flatten)]
    pub candidate: &'a Candidate,
    #[serde(skip)]
    pub store_index: usize,
    pub rank_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_distance: Option<usize>,
}

impl RankedView {
    /// Store order with every score at zero; the view before any query.
    pub fn unranked(len: usize, strategy: Strategy) -> Self {
        Self {
            order: (0..len).collect(),
            scores: vec![0.0; len],
            distances: vec![None; len],
            strategy,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Store indices, best match first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Candidate at `rank` (0 = best).
    pub fn get<'a>(&self, store: &'a CandidateStore, rank: usize) -> Option<RankedCandidate<'a>> {
        let store_index = *self.order.get(rank)?;
        Some(RankedCandidate {
            candidate: store.get(store_index)?,
            store_index,
            rank_score: self.scores[store_index],
            edit_distance: self.distances[store_index],
        })
    }

    /// Ranks `start..end`, clipped to the view length.
    pub fn slice<'a>(
        &self,
        store: &'a CandidateStore,
        start: usize,
        end: usize,
    ) -> Vec<RankedCandidate<'a>> {
        let end = end.min(self.len());
        (start.min(end)..end)
            .filter_map(|rank| self.get(store, rank))
            .collect()
    }
}

/// Score the whole store against `query` and sort it.
pub fn rank(store: &CandidateStore, query: &str, options: MatchOptions) -> RankedView {
    let started = Instant::now();
    let prepared = PreparedQuery::new(query, options);

    let scored: Vec<(f64, Option<usize>)> = (0..store.len())
        .into_par_iter()
        .with_min_len(PAR_MIN_LEN)
        .map(|index| prepared.score(store.match_key(index), store.key_len(index)))
        .collect();
    let (scores, distances): (Vec<f64>, Vec<Option<usize>>) = scored.into_iter().unzip();

    let strategy = options.strategy;
    let mut order: Vec<usize> = (0..store.len()).collect();
    order.sort_by(|&a, &b| strategy.compare(scores[a], scores[b]));

    tracing::debug!(
        candidates = store.len(),
        query_len = query.chars().count(),
        %strategy,
        elapsed_us = started.elapsed().as_micros() as u64,
        "ranked candidates"
    );

    RankedView {
        order,
        scores,
        distances,
        strategy,
    }
}
