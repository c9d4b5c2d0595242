//! Recency Tracker Module
//!
//! Keeps paste ids ordered by last access for LRU eviction.

use std::collections::VecDeque;

// == Recency Tracker ==
/// Access order of cached paste ids.
///
/// - Front = most recently used
/// - Back = least recently used
#[derive(Debug, Default)]
pub struct RecencyTracker {
    order: VecDeque<String>,
}

impl RecencyTracker {
    // == Constructor ==
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Promote ==
    /// Moves `paste_id` to the most-recently-used position, inserting it if new.
    pub fn promote(&mut self, paste_id: &str) {
        if self.order.front().is_some_and(|front| front == paste_id) {
            return;
        }
        self.forget(paste_id);
        self.order.push_front(paste_id.to_string());
    }

    // == Forget ==
    /// Stops tracking `paste_id`.
    pub fn forget(&mut self, paste_id: &str) {
        if let Some(pos) = self.order.iter().position(|id| id == paste_id) {
            self.order.remove(pos);
        }
    }

    // == Pop Least Recent ==
    /// Removes and returns the least recently used id.
    pub fn pop_least_recent(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    /// Ids from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
