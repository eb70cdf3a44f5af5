// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered, duplicate-free queue of paths picked for the launcher.

use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionQueue {
    paths: Vec<String>,
    seen: HashSet<String>,
    ready: bool,
}

impl SelectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `path` unless it is already queued or the queue is sealed.
    ///
    /// Toggling a queued path again does not remove it.
    pub fn toggle(&mut self, path: &str) {
        if self.ready {
            return;
        }
        self.push_unique(path);
    }

    /// Queue `path` if absent and seal the queue for the launcher.
    pub fn commit(&mut self, path: &str) {
        if self.ready {
            return;
        }
        self.push_unique(path);
        self.ready = true;
    }

    fn push_unique(&mut self, path: &str) {
        if self.seen.insert(path.to_string()) {
            self.paths.push(path.to_string());
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.seen.contains(path)
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// True once committed; the session is over.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Hand the queued paths over, in insertion order.
    pub fn take(&mut self) -> Vec<String> {
        self.seen.clear();
        std::mem::take(&mut self.paths)
    }
}
