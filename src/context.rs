//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{Item, WeightEntry};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload lists and statistics from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload lists and statistics from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Item open in the edit modal
    pub editing_item: RwSignal<Option<Item>>,
    /// Weight entry open in the edit modal
    pub editing_weight: RwSignal<Option<WeightEntry>>,
    /// Goal planner modal visibility
    pub planner_open: RwSignal<bool>,
    /// Settings panel visibility
    pub settings_open: RwSignal<bool>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            editing_item: RwSignal::new(None),
            editing_weight: RwSignal::new(None),
            planner_open: RwSignal::new(false),
            settings_open: RwSignal::new(false),
        }
    }

    /// Trigger a reload of lists and statistics
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
