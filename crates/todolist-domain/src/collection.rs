//! Immutable snapshot of every list and its state.
//!
//! A `Collection` is never edited after it has been published by the
//! [`ListCollectionStore`](crate::ListCollectionStore). Each mutation builds
//! the next snapshot from a clone of the current one; per-list states sit
//! behind `Arc` so lists untouched by a mutation are shared between
//! consecutive snapshots instead of copied.

use crate::{ListId, ListState, TodoList};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub(crate) lists: Vec<TodoList>,
    pub(crate) states: HashMap<ListId, Arc<ListState>>,
}

/// Done/remaining tally for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemCounts {
    pub total: usize,
    pub remaining: usize,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists in creation order.
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    pub fn list(&self, list_id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == list_id)
    }

    pub fn state(&self, list_id: ListId) -> Option<&ListState> {
        self.states.get(&list_id).map(Arc::as_ref)
    }

    /// Shared handle to a list's state, for cheap change detection with `Arc::ptr_eq`.
    pub fn shared_state(&self, list_id: ListId) -> Option<Arc<ListState>> {
        self.states.get(&list_id).cloned()
    }

    pub fn contains_list(&self, list_id: ListId) -> bool {
        self.states.contains_key(&list_id)
    }

    /// Ordered `(list, state)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&TodoList, &ListState)> {
        self.lists
            .iter()
            .filter_map(|list| self.state(list.id).map(|state| (list, state)))
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn item_counts(&self, list_id: ListId) -> Option<ItemCounts> {
        self.state(list_id).map(|state| ItemCounts {
            total: state.items.len(),
            remaining: state.items.iter().filter(|i| !i.is_done).count(),
        })
    }

    /// Every list has exactly one state entry and every state belongs to a list.
    pub fn is_consistent(&self) -> bool {
        self.lists.len() == self.states.len()
            && self.lists.iter().all(|l| self.states.contains_key(&l.id))
    }
}
