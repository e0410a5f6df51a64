//! Selection store: which items are checked.
//!
//! The store keeps the selected ids in an insertion-ordered set. The
//! "all selected" flag is never stored; it is recomputed from the item count
//! and the set size on every read.

use super::Item;
use indexmap::IndexSet;

/// How the store treats ids that are not part of the current item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdPolicy {
    /// Unknown ids are accepted and kept as dangling entries.
    #[default]
    Permissive,
    /// Unknown ids are ignored by `initialize` and `toggle_one`.
    Strict,
}

#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    items: Vec<Item>,
    selected: IndexSet<String>,
    policy: IdPolicy,
}

impl SelectionStore {
    pub fn new(items: Vec<Item>, initial_selected: &[String]) -> Self {
        Self::with_policy(items, initial_selected, IdPolicy::default())
    }

    pub fn with_policy(items: Vec<Item>, initial_selected: &[String], policy: IdPolicy) -> Self {
        let mut store = Self {
            items: Vec::new(),
            selected: IndexSet::new(),
            policy,
        };
        store.initialize(items, initial_selected);
        store
    }

    pub fn policy(&self) -> IdPolicy {
        self.policy
    }

    /// Applies from the next `initialize` or `toggle_one` on.
    pub fn set_policy(&mut self, policy: IdPolicy) {
        self.policy = policy;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Replace the item list and the selection. Nothing from the previous
    /// selection survives.
    pub fn initialize(&mut self, items: Vec<Item>, initial_selected: &[String]) {
        self.items = items;
        self.selected.clear();
        for id in initial_selected {
            if self.accepts(id) {
                self.selected.insert(id.clone());
            } else {
                tracing::warn!(id = %id, "ignoring unknown id in initial selection");
            }
        }
    }

    pub fn toggle_one(&mut self, id: &str) {
        if self.selected.shift_remove(id) {
            return;
        }
        if self.accepts(id) {
            self.selected.insert(id.to_string());
        } else {
            tracing::warn!(id = %id, "ignoring toggle for unknown id");
        }
    }

    pub fn toggle_all(&mut self) {
        if self.is_all_selected() {
            self.selected.clear();
        } else {
            self.selected = self.items.iter().map(|item| item.id.clone()).collect();
        }
    }

    /// True iff there is at least one item and the selection is as large as
    /// the item list. An empty list is never "all selected".
    pub fn is_all_selected(&self) -> bool {
        !self.items.is_empty() && self.selected.len() == self.items.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Number of selected ids that belong to the current item list.
    pub fn selected_known(&self) -> usize {
        self.items.iter().filter(|item| self.selected.contains(&item.id)).count()
    }

    /// Selected ids in insertion order. Callers must not rely on the order.
    pub fn snapshot(&self) -> Vec<String> {
        self.selected.iter().cloned().collect()
    }

    /// Drop selected ids that are not in the current item list. Returns how
    /// many were removed.
    pub fn prune_unknown(&mut self) -> usize {
        let before = self.selected.len();
        let items = &self.items;
        self.selected.retain(|id| items.iter().any(|item| &item.id == id));
        before - self.selected.len()
    }

    fn accepts(&self, id: &str) -> bool {
        match self.policy {
            IdPolicy::Permissive => true,
            IdPolicy::Strict => self.items.iter().any(|item| item.id == id),
        }
    }
}
