//! Snapshot-based undo/redo history for the root aggregate.
//!
//! Every mutating store operation records the full document state before the
//! change. History is linear: a new mutation discards any redo entries, so
//! there is no branching. Whole-document snapshots are acceptable at this
//! document size; the cap bounds memory either way.

use std::collections::VecDeque;

use crate::model::WaybarConfig;

/// Default maximum number of undo steps retained.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Bounded undo/redo stacks over document snapshots.
#[derive(Debug)]
pub struct History {
    past: VecDeque<WaybarConfig>,
    future: Vec<WaybarConfig>,
    limit: usize,
    paused: bool,
}

impl History {
    /// Creates empty history with the default cap.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Creates empty history with a custom cap. A cap of zero disables
    /// snapshotting entirely.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            past: VecDeque::new(),
            future: Vec::new(),
            limit,
            paused: false,
        }
    }

    /// Records the state as it was before a mutation.
    ///
    /// Evicts the oldest snapshot once the cap is exceeded and invalidates
    /// any redo entries. Does nothing while paused.
    pub fn record(&mut self, before: &WaybarConfig) {
        if self.paused || self.limit == 0 {
            return;
        }

        self.past.push_back(before.clone());
        while self.past.len() > self.limit {
            self.past.pop_front();
        }
        self.future.clear();
    }

    /// Steps back, exchanging `current` for the most recent snapshot.
    ///
    /// Returns `None` (and leaves the stacks untouched) when there is
    /// nothing to undo.
    pub fn undo(&mut self, current: &WaybarConfig) -> Option<WaybarConfig> {
        let snapshot = self.past.pop_back()?;
        self.future.push(current.clone());
        Some(snapshot)
    }

    /// Steps forward again after an undo.
    pub fn redo(&mut self, current: &WaybarConfig) -> Option<WaybarConfig> {
        let snapshot = self.future.pop()?;
        self.past.push_back(current.clone());
        Some(snapshot)
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Current (undo, redo) stack depths, for UI feedback.
    pub fn depths(&self) -> (usize, usize) {
        (self.past.len(), self.future.len())
    }

    /// Suspends snapshotting so a multi-step programmatic sequence reads as
    /// one mutation once resumed. Mutations made while paused still apply to
    /// the live state; only the stacks stay untouched.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resumes snapshotting.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Whether snapshotting is currently suspended.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Drops both stacks, e.g. after the document is replaced wholesale.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
