// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interactive session: query, ranked view, viewport and selection queue.
//!
//! Every event runs one full cycle to completion: a query edit re-ranks the
//! whole store and replaces the ranked view, then the viewport is re-clamped
//! against the new length. Nothing here fails; an empty store simply yields
//! empty views.

use crate::candidate::{Candidate, CandidateStore};
use crate::ranker::{self, RankedCandidate, RankedView};
use crate::scorer::{MatchOptions, Strategy};
use crate::selection::SelectionQueue;
use crate::viewport::Viewport;

/// Above this many candidates, edit-distance ranking is too slow for one keystroke.
pub const EDIT_DISTANCE_SOFT_LIMIT: usize = 35_000;

/// Visible rows before the first resize event arrives.
pub const DEFAULT_HEIGHT: usize = 13;

#[derive(Debug)]
pub struct Session {
    store: CandidateStore,
    options: MatchOptions,
    query: String,
    view: RankedView,
    viewport: Viewport,
    selection: SelectionQueue,
    warned_slow_strategy: bool,
}

/// Build a session with default match options.
pub fn build_session(candidates: Vec<Candidate>) -> Session {
    Session::new(candidates, MatchOptions::default())
}

impl Session {
    pub fn new(candidates: Vec<Candidate>, options: MatchOptions) -> Self {
        let store = if options.ignore_case {
            CandidateStore::with_folded_keys(candidates)
        } else {
            CandidateStore::new(candidates)
        };
        Self::from_store(store, options)
    }

    pub fn from_store(store: CandidateStore, options: MatchOptions) -> Self {
        let len = store.len();
        let mut session = Self {
            view: RankedView::unranked(len, options.strategy),
            viewport: Viewport::new(DEFAULT_HEIGHT, len),
            store,
            options,
            query: String::new(),
            selection: SelectionQueue::new(),
            warned_slow_strategy: false,
        };
        session.warn_if_slow();
        session
    }

    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn ranked_view(&self) -> &RankedView {
        &self.view
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn selection(&self) -> &SelectionQueue {
        &self.selection
    }

    /// Hand the committed paths to the launcher. `None` until the queue is sealed.
    pub fn take_selection(&mut self) -> Option<Vec<String>> {
        self.selection.is_ready().then(|| self.selection.take())
    }

    /// True when the active strategy is expected to lag on this store.
    pub fn is_strategy_slow(&self) -> bool {
        self.options.strategy == Strategy::EditDistance && self.store.len() > EDIT_DISTANCE_SOFT_LIMIT
    }

    pub fn on_query_append(&mut self, ch: char) -> &RankedView {
        self.query.push(ch);
        self.rerank();
        &self.view
    }

    /// Drop the last query char. An empty query is left as is.
    pub fn on_query_backspace(&mut self) -> &RankedView {
        if self.query.pop().is_some() {
            self.rerank();
        }
        &self.view
    }

    /// Switch scoring strategy and re-rank under it.
    pub fn set_strategy(&mut self, strategy: Strategy) -> &RankedView {
        if self.options.strategy != strategy {
            self.options.strategy = strategy;
            self.warn_if_slow();
            self.rerank();
        }
        &self.view
    }

    pub fn on_resize(&mut self, height: usize) {
        self.viewport.resize(height);
    }

    pub fn on_scroll_up(&mut self) {
        self.viewport.scroll_up();
    }

    pub fn on_scroll_down(&mut self) {
        self.viewport.scroll_down();
    }

    /// Candidate under the cursor, if any.
    pub fn current(&self) -> Option<RankedCandidate<'_>> {
        self.view.get(&self.store, self.viewport.cursor())
    }

    pub fn on_toggle_select(&mut self) {
        if let Some(path) = self.current_path() {
            self.selection.toggle(&path);
        }
    }

    /// Queue the candidate under the cursor and seal the queue.
    pub fn on_commit_select(&mut self) -> &SelectionQueue {
        if let Some(path) = self.current_path() {
            self.selection.commit(&path);
        }
        &self.selection
    }

    /// The visible slice of the ranked view, best match first.
    pub fn current_window(&self) -> Vec<RankedCandidate<'_>> {
        let range = self.viewport.visible_range();
        self.view.slice(&self.store, range.start, range.end)
    }

    fn current_path(&self) -> Option<String> {
        self.current().map(|entry| entry.candidate.display_path.clone())
    }

    fn rerank(&mut self) {
        self.view = ranker::rank(&self.store, &self.query, self.options);
        self.viewport.on_ranked_view_replaced(self.view.len());
    }

    fn warn_if_slow(&mut self) {
        if self.is_strategy_slow() && !self.warned_slow_strategy {
            self.warned_slow_strategy = true;
            tracing::warn!(
                candidates = self.store.len(),
                limit = EDIT_DISTANCE_SOFT_LIMIT,
                "edit-distance ranking over a large candidate set may lag on every keystroke"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(keys: &[&str]) -> Session {
        build_session(keys.iter().copied().map(Candidate::from_path).collect())
    }

    fn window_paths(session: &Session) -> Vec<String> {
        session
            .current_window()
            .into_iter()
            .map(|entry| entry.candidate.display_path.clone())
            .collect()
    }

    #[test]
    fn typing_reranks_and_window_follows() {
        let mut session = session(&["main.go", "readme.md", "go.mod"]);
        session.on_query_append('g');
        assert_eq!(window_paths(&session), vec!["main.go", "readme.md", "go.mod"]);
        session.on_query_append('o');
        assert_eq!(session.query(), "go");
        assert_eq!(window_paths(&session).last().map(String::as_str), Some("readme.md"));
    }

    #[test]
    fn backspace_restores_previous_order() {
        let mut session = session(&["alpha.rs", "beta.rs", "alphabet.txt", "gamma.md"]);
        session.on_query_append('a');
        session.on_query_append('l');
        let before = session.ranked_view().clone();
        session.on_query_append('p');
        session.on_query_backspace();
        assert_eq!(session.ranked_view(), &before);
    }

    #[test]
    fn backspace_on_empty_query_is_noop() {
        let mut session = session(&["a", "b"]);
        let before = session.ranked_view().clone();
        session.on_query_backspace();
        assert_eq!(session.query(), "");
        assert_eq!(session.ranked_view(), &before);
    }

    #[test]
    fn cursor_tracks_slot_across_reranks() {
        let mut session = session(&["ab", "cd", "ef", "abab"]);
        session.on_scroll_up();
        session.on_scroll_up();
        session.on_query_append('a');
        session.on_query_append('b');
        assert_eq!(session.viewport().cursor(), 2);
    }

    #[test]
    fn toggle_and_commit_queue_display_paths() {
        let mut session = build_session(vec![
            Candidate::new("a.rs", "src/a.rs"),
            Candidate::new("b.rs", "src/b.rs"),
        ]);
        session.on_toggle_select();
        session.on_toggle_select();
        session.on_scroll_up();
        let queue = session.on_commit_select();
        assert!(queue.is_ready());
        assert_eq!(queue.paths(), ["src/a.rs", "src/b.rs"]);
    }

    #[test]
    fn selection_is_handed_over_only_after_commit() {
        let mut session = session(&["a.rs", "b.rs"]);
        session.on_toggle_select();
        assert_eq!(session.take_selection(), None);
        assert_eq!(session.selection().paths(), ["a.rs"]);

        session.on_scroll_up();
        session.on_commit_select();
        assert_eq!(
            session.take_selection(),
            Some(vec!["a.rs".to_string(), "b.rs".to_string()])
        );
    }

    #[test]
    fn slow_strategy_is_flagged_only_for_large_stores() {
        let mut small = session(&["a", "b"]);
        small.set_strategy(Strategy::EditDistance);
        assert!(!small.is_strategy_slow());

        let keys: Vec<Candidate> = (0..=EDIT_DISTANCE_SOFT_LIMIT)
            .map(|i| Candidate::from_path(format!("f{i}")))
            .collect();
        let mut large = build_session(keys);
        assert!(!large.is_strategy_slow());
        large.set_strategy(Strategy::EditDistance);
        assert!(large.is_strategy_slow());
    }

    #[test]
    fn empty_session_degrades_to_noops() {
        let mut session = build_session(Vec::new());
        session.on_query_append('x');
        session.on_query_append('y');
        session.on_query_backspace();
        session.on_scroll_up();
        session.on_scroll_down();
        session.on_resize(0);
        session.on_resize(7);
        session.on_toggle_select();
        let queue = session.on_commit_select();
        assert!(!queue.is_ready());
        assert!(queue.is_empty());
        assert!(session.current_window().is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn resize_limits_the_window() {
        let keys: Vec<String> = (0..30).map(|i| format!("f{i}")).collect();
        let mut session = build_session(keys.iter().map(|k| Candidate::from_path(k.as_str())).collect());
        session.on_resize(4);
        assert_eq!(session.current_window().len(), 4);
        session.on_resize(0);
        assert!(session.current_window().is_empty());
    }

    #[test]
    fn strategy_switch_reranks_current_query() {
        let mut session = session(&["zzzz", "lib.rs", "lib.r"]);
        for ch in "lib.rs".chars() {
            session.on_query_append(ch);
        }
        session.set_strategy(Strategy::EditDistance);
        let first = session.current().expect("cursor entry");
        assert_eq!(first.candidate.key, "lib.rs");
        assert_eq!(first.edit_distance, Some(0));
        assert_eq!(session.ranked_view().strategy(), Strategy::EditDistance);
    }

    #[test]
    fn ignore_case_matches_mixed_case_keys() {
        let options = MatchOptions {
            strategy: Strategy::Bigram,
            ignore_case: true,
        };
        let mut session = Session::new(
            vec![Candidate::from_path("notes.txt"), Candidate::from_path("Makefile")],
            options,
        );
        session.on_query_append('M');
        session.on_query_append('A');
        let first = session.current().expect("entry");
        assert_eq!(first.candidate.key, "Makefile");
    }
}
