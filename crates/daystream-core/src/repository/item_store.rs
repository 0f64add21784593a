//! Item Store
//!
//! Most-recent-first collection of items, persisted under
//! [`ITEMS_KEY`]. Operations on unknown ids are silent no-ops and invalid
//! input is rejected without touching state; both are reported as `None`
//! or `false` rather than errors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::collection::EntityCollection;
use super::seed;
use super::storage::Storage;
use crate::domain::{
    now_millis, Clock, Cue, DomainResult, ExerciseLog, Item, ItemType, ItemView, SetInput,
};

/// Storage key of the item collection
pub const ITEMS_KEY: &str = "daystream_items";

/// Result of a completion toggle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggled {
    pub item: Item,
    /// Set only when the item became completed
    pub cue: Option<Cue>,
}

pub struct ItemStore {
    items: EntityCollection<Item>,
    clock: Clock,
}

impl ItemStore {
    /// Load items from storage, seeding welcome items on first run when
    /// `seed_defaults` is set
    pub fn load(storage: Arc<dyn Storage>, seed_defaults: bool) -> DomainResult<Self> {
        Self::load_with_clock(storage, seed_defaults, now_millis)
    }

    pub fn load_with_clock(
        storage: Arc<dyn Storage>,
        seed_defaults: bool,
        clock: Clock,
    ) -> DomainResult<Self> {
        let items = EntityCollection::load(storage, ITEMS_KEY, || {
            if seed_defaults {
                seed::welcome_items(clock())
            } else {
                Vec::new()
            }
        })?;
        Ok(Self { items, clock })
    }

    pub fn all(&self) -> &[Item] {
        self.items.as_slice()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.find(id)
    }

    /// Create a new item at the front of the collection.
    ///
    /// Exercise items get one detailed set per input row. Returns `None`
    /// (and creates nothing) for a blank title.
    pub fn add_item(
        &mut self,
        item_type: ItemType,
        title: &str,
        exercise_sets: &[SetInput],
    ) -> Option<Item> {
        let title = title.trim();
        if title.is_empty() {
            log::debug!("rejected {} item with blank title", item_type.as_str());
            return None;
        }

        let now = (self.clock)();
        let item = match item_type {
            ItemType::Exercise => Item::new_exercise(title.to_string(), exercise_sets, now),
            _ => Item::new(item_type, title.to_string(), now),
        };
        self.items.prepend(vec![item.clone()]);
        log::info!("added {} item {}", item_type.as_str(), item.id);
        Some(item)
    }

    /// Turn suggested plan tasks into daily tasks, prepended in plan order.
    /// Blank suggestions are skipped.
    pub fn add_planned_tasks(&mut self, tasks: &[String]) -> Vec<Item> {
        let now = (self.clock)();
        let created: Vec<Item> = tasks
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(|t| Item::new(ItemType::DailyTask, t.to_string(), now))
            .collect();
        self.items.prepend(created.clone());
        log::info!("added {} planned tasks", created.len());
        created
    }

    /// Flip completion. The returned cue is set only on a false → true
    /// transition.
    pub fn toggle_completion(&mut self, id: &str) -> Option<Toggled> {
        let item = self.items.update_with(id, |item| item.is_completed = !item.is_completed)?;
        let cue = item
            .is_completed
            .then(|| Cue::for_completion(item.item_type));
        Some(Toggled { item, cue })
    }

    pub fn delete_item(&mut self, id: &str) -> bool {
        let removed = self.items.remove(id);
        if removed {
            log::info!("deleted item {}", id);
        }
        removed
    }

    /// Replace the stored item with the same id.
    ///
    /// Type and creation time always come from the stored item. Exercise
    /// data is normalized to detailed sets, so the mirrored legacy fields
    /// follow the first set. Returns `None` for an unknown id or a blank
    /// title.
    pub fn update_item(&mut self, updated: Item) -> Option<Item> {
        let existing = self.items.find(&updated.id)?;
        let title = updated.title.trim();
        if title.is_empty() {
            return None;
        }

        let exercise = match existing.item_type {
            ItemType::Exercise => Some(merge_exercise(existing.exercise.as_ref(), updated.exercise)),
            _ => None,
        };
        let item = Item {
            id: existing.id.clone(),
            title: title.to_string(),
            is_completed: updated.is_completed,
            item_type: existing.item_type,
            created_at: existing.created_at,
            description: updated
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            priority: updated.priority,
            exercise,
        };

        self.items.replace(item.clone());
        Some(item)
    }

    /// Items of one type, in collection order
    pub fn list_by_type(&self, item_type: ItemType) -> impl Iterator<Item = &Item> + Clone + '_ {
        self.items
            .as_slice()
            .iter()
            .filter(move |i| i.item_type == item_type)
    }

    /// Presentation views of one type, evaluated at the current time
    pub fn views_by_type(&self, item_type: ItemType) -> Vec<ItemView> {
        let now = (self.clock)();
        self.list_by_type(item_type)
            .map(|i| ItemView::new(i, now))
            .collect()
    }

    /// Copy of an item prepared for the edit form: legacy exercise data is
    /// expanded into detailed sets
    pub fn edit_draft(&self, id: &str) -> Option<Item> {
        let mut draft = self.get(id)?.clone();
        draft.exercise = draft.exercise.map(ExerciseLog::into_detailed);
        Some(draft)
    }
}

/// Edited exercise data in detailed form. An edit that leaves no sets keeps
/// the stored legacy log as it was.
fn merge_exercise(stored: Option<&ExerciseLog>, edited: Option<ExerciseLog>) -> ExerciseLog {
    let detailed = edited.unwrap_or_default().into_detailed();
    match stored {
        Some(legacy @ ExerciseLog::Legacy { .. }) if detailed.set_count() == 0 => legacy.clone(),
        _ => detailed,
    }
}
