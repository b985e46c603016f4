use std::collections::HashMap;

use crate::models::{MealSlots, MealTime, MenuItem};

/// Tracks which catalog items are selected and their per-item meal-time flags.
///
/// The selected-ID set is the key set of `selections`, so "selected iff a
/// slots entry exists" holds by construction. `snapshot` captures the slots
/// at the moment each item was selected (or at the last `commit`), and backs
/// the `cancel` revert.
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    selections: HashMap<u32, MealSlots>,
    snapshot: HashMap<u32, MealSlots>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an item if it is not selected, deselect it otherwise.
    ///
    /// On select, the slots start from the item's catalog defaults and the
    /// same value is written into the snapshot. On deselect only the live
    /// entry is removed; the snapshot keeps its entry so `cancel` can restore
    /// the item. Returns true if the item is selected after the call.
    pub fn toggle_item(&mut self, item: &MenuItem) -> bool {
        if self.selections.remove(&item.id).is_some() {
            false
        } else {
            self.selections.insert(item.id, item.default_slots);
            self.snapshot.insert(item.id, item.default_slots);
            true
        }
    }

    /// Set one meal-time flag on a selected item.
    ///
    /// Silent no-op if the item is not selected. Editability is enforced by
    /// the prompt layer, not here.
    pub fn set_meal_time(&mut self, item_id: u32, slot: MealTime, value: bool) {
        if let Some(slots) = self.selections.get_mut(&item_id) {
            slots.set(slot, value);
        }
    }

    /// Drop everything: selections and snapshot.
    pub fn clear(&mut self) {
        self.selections.clear();
        self.snapshot.clear();
    }

    /// Revert to the snapshot: selections become a copy of it, and the
    /// selected-ID set follows as its key set.
    pub fn cancel(&mut self) {
        self.selections = self.snapshot.clone();
    }

    /// Rebase the snapshot onto the current selections, making the current
    /// state the new revert point. Called after a successful submission.
    pub fn commit(&mut self) {
        self.snapshot = self.selections.clone();
    }

    pub fn is_selected(&self, item_id: u32) -> bool {
        self.selections.contains_key(&item_id)
    }

    /// Current slots for a selected item.
    pub fn slots(&self, item_id: u32) -> Option<MealSlots> {
        self.selections.get(&item_id).copied()
    }

    /// Selected item IDs in ascending order.
    pub fn selected_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.selections.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over (id, slots) pairs of the live selection.
    pub fn iter(&self) -> impl Iterator<Item = (u32, MealSlots)> + '_ {
        self.selections.iter().map(|(id, slots)| (*id, *slots))
    }

    /// True if the live selection differs from the snapshot.
    pub fn has_unsaved_changes(&self) -> bool {
        self.selections != self.snapshot
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
