//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Dashboard, Item, ItemType, ItemView, WeightEntry, WeightTrend};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Selected category tab
    pub active_tab: ItemType,
    /// Items of the active tab (tabs other than daily/long term)
    pub items: Vec<ItemView>,
    /// Daily tasks, shown next to the goals
    pub daily: Vec<ItemView>,
    /// Long-term goals
    pub goals: Vec<ItemView>,
    pub dashboard: Dashboard,
    /// Weight history, newest first
    pub weights: Vec<WeightEntry>,
    pub trend: WeightTrend,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Whether the active tab shows the daily and long-term columns together
pub fn shows_daily_and_goals(tab: ItemType) -> bool {
    matches!(tab, ItemType::DailyTask | ItemType::LongTermGoal)
}

// ========================
// Store Helper Functions
// ========================

/// Replace the item in whichever list holds it
pub fn store_update_item(store: &AppStore, updated_item: Item) {
    for list in [store.items(), store.daily(), store.goals()] {
        if let Some(view) = list
            .write()
            .iter_mut()
            .find(|view| view.item.id == updated_item.id)
        {
            view.item = updated_item.clone();
        }
    }
}

/// Remove an item from every list by ID
pub fn store_remove_item(store: &AppStore, item_id: &str) {
    for list in [store.items(), store.daily(), store.goals()] {
        list.write().retain(|view| view.item.id != item_id);
    }
}

/// Remove a weight entry by ID
pub fn store_remove_weight(store: &AppStore, entry_id: &str) {
    store.weights().write().retain(|entry| entry.id != entry_id);
}
