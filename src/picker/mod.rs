//! Picker widget model: items, selection, per-surface pointer state and the
//! completion callback.
//!
//! Nothing here knows about terminals. The app shell routes pointer and key
//! input into a [`Picker`] by [`Target`], and the UI reads [`RowView`]s back
//! out of it.

pub mod checkbox;
pub mod interaction;
pub mod selection;

use checkbox::CheckboxVisual;
use interaction::InteractionTracker;
use selection::{IdPolicy, SelectionStore};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A selectable entry. `id` is opaque and caller-assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
}

impl Item {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// An interactive surface of the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Header,
    /// Index into the item list.
    Row(usize),
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Changed,
    Confirm,
    Ignored,
}

/// What the renderer needs to draw one row (or the header).
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    pub label: &'a str,
    pub checked: bool,
    pub hovering: bool,
    pub pressed: bool,
}

impl RowView<'_> {
    pub fn visual(&self) -> CheckboxVisual {
        CheckboxVisual::resolve(self.checked, self.hovering, self.pressed)
    }
}

pub type DoneCallback = Box<dyn FnMut(Vec<String>)>;

pub struct Picker {
    title: String,
    store: SelectionStore,
    initial: Vec<String>,
    header: InteractionTracker,
    done: InteractionTracker,
    rows: HashMap<String, InteractionTracker>,
    on_done: Option<DoneCallback>,
}

impl Picker {
    pub fn new(items: Vec<Item>, initial: Vec<String>, title: impl Into<String>) -> Self {
        Self::with_policy(items, initial, title, IdPolicy::default())
    }

    pub fn with_policy(
        items: Vec<Item>,
        initial: Vec<String>,
        title: impl Into<String>,
        policy: IdPolicy,
    ) -> Self {
        let rows = fresh_trackers(&items);
        let store = SelectionStore::with_policy(items, &initial, policy);
        Self {
            title: title.into(),
            store,
            initial,
            header: InteractionTracker::new(),
            done: InteractionTracker::new(),
            rows,
            on_done: None,
        }
    }

    /// Register the handler that receives the selected ids on confirm.
    pub fn on_done(mut self, callback: impl FnMut(Vec<String>) + 'static) -> Self {
        self.on_done = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn len(&self) -> usize {
        self.store.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.items().is_empty()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.store
    }

    pub fn is_all_selected(&self) -> bool {
        self.store.is_all_selected()
    }

    pub fn toggle_one(&mut self, id: &str) {
        self.store.toggle_one(id);
        tracing::debug!(id = %id, selected = self.store.is_selected(id), "toggled");
    }

    pub fn toggle_all(&mut self) {
        self.store.toggle_all();
        tracing::debug!(all = self.store.is_all_selected(), "toggled all");
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.store.snapshot()
    }

    /// Hand the current selection to the completion callback.
    pub fn confirm(&mut self) -> Vec<String> {
        let ids = self.store.snapshot();
        tracing::info!(count = ids.len(), "selection confirmed");
        if let Some(callback) = self.on_done.as_mut() {
            callback(ids.clone());
        }
        ids
    }

    /// Swap in a new item list and initial selection. Selection and every
    /// tracker start over.
    pub fn reset(&mut self, items: Vec<Item>, initial: Vec<String>) {
        self.reset_with_policy(items, initial, self.store.policy());
    }

    /// Like [`Picker::reset`], with a new unknown-id policy applied to the
    /// incoming initial selection.
    pub fn reset_with_policy(&mut self, items: Vec<Item>, initial: Vec<String>, policy: IdPolicy) {
        self.store.set_policy(policy);
        self.rows = fresh_trackers(&items);
        self.store.initialize(items, &initial);
        self.initial = initial;
        self.header = InteractionTracker::new();
        self.done = InteractionTracker::new();
    }

    /// Throw away edits and go back to the initial selection.
    pub fn revert(&mut self) {
        let items = self.store.items().to_vec();
        self.store.initialize(items, &self.initial);
    }

    pub fn tracker(&self, target: Target) -> InteractionTracker {
        match target {
            Target::Header => self.header,
            Target::Done => self.done,
            Target::Row(index) => self
                .store
                .items()
                .get(index)
                .and_then(|item| self.rows.get(&item.id))
                .copied()
                .unwrap_or_default(),
        }
    }

    fn tracker_mut(&mut self, target: Target) -> Option<&mut InteractionTracker> {
        match target {
            Target::Header => Some(&mut self.header),
            Target::Done => Some(&mut self.done),
            Target::Row(index) => {
                let id = &self.store.items().get(index)?.id;
                self.rows.get_mut(id)
            }
        }
    }

    pub fn pointer_enter(&mut self, target: Target) {
        if let Some(t) = self.tracker_mut(target) {
            t.pointer_enter();
        }
    }

    pub fn pointer_leave(&mut self, target: Target) {
        if let Some(t) = self.tracker_mut(target) {
            t.pointer_leave();
        }
    }

    pub fn pointer_down(&mut self, target: Target) {
        if let Some(t) = self.tracker_mut(target) {
            t.pointer_down();
        }
    }

    pub fn pointer_up(&mut self, target: Target) {
        if let Some(t) = self.tracker_mut(target) {
            t.pointer_up();
        }
    }

    /// Activate a surface. Header toggles everything, a row toggles its own
    /// id. Done does not confirm by itself: it returns
    /// [`ClickOutcome::Confirm`] and the caller is expected to call
    /// [`Picker::confirm`], so the shell decides what happens afterwards.
    pub fn click(&mut self, target: Target) -> ClickOutcome {
        match target {
            Target::Header => {
                self.toggle_all();
                ClickOutcome::Changed
            }
            Target::Row(index) => match self.store.items().get(index) {
                Some(item) => {
                    let id = item.id.clone();
                    self.toggle_one(&id);
                    ClickOutcome::Changed
                }
                None => ClickOutcome::Ignored,
            },
            Target::Done => ClickOutcome::Confirm,
        }
    }

    pub fn header_view(&self) -> RowView<'_> {
        RowView {
            label: &self.title,
            checked: self.store.is_all_selected(),
            hovering: self.header.hovering,
            pressed: self.header.pressed,
        }
    }

    pub fn row_view(&self, index: usize) -> Option<RowView<'_>> {
        let item = self.store.items().get(index)?;
        let tracker = self.rows.get(&item.id).copied().unwrap_or_default();
        Some(RowView {
            label: &item.label,
            checked: self.store.is_selected(&item.id),
            hovering: tracker.hovering,
            pressed: tracker.pressed,
        })
    }
}

fn fresh_trackers(items: &[Item]) -> HashMap<String, InteractionTracker> {
    items
        .iter()
        .map(|item| (item.id.clone(), InteractionTracker::new()))
        .collect()
}
