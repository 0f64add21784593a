//! Tauri Commands for Items
//!
//! Exposes Item Store operations to the frontend via Tauri IPC. Rejected
//! input and unknown ids come back as `None`/`false`, never as errors.

use tauri::State;

use daystream_core::domain::{Item, ItemType, ItemView, SetInput};
use daystream_core::repository::Toggled;

use crate::AppState;

/// List items of one type with age, staleness and accent
#[tauri::command]
pub async fn list_items_by_type(
    state: State<'_, AppState>,
    item_type: ItemType,
) -> Result<Vec<ItemView>, String> {
    let store = state.items.lock().await;
    Ok(store.views_by_type(item_type))
}

/// Create a new item; `None` for a blank title
#[tauri::command]
pub async fn create_item(
    state: State<'_, AppState>,
    item_type: ItemType,
    title: String,
    sets: Option<Vec<SetInput>>,
) -> Result<Option<Item>, String> {
    let mut store = state.items.lock().await;
    Ok(store.add_item(item_type, &title, sets.as_deref().unwrap_or_default()))
}

/// Toggle item completion
#[tauri::command]
pub async fn toggle_item(state: State<'_, AppState>, id: String) -> Result<Option<Toggled>, String> {
    let mut store = state.items.lock().await;
    Ok(store.toggle_completion(&id))
}

/// Replace an item by id
#[tauri::command]
pub async fn update_item(state: State<'_, AppState>, item: Item) -> Result<Option<Item>, String> {
    let mut store = state.items.lock().await;
    Ok(store.update_item(item))
}

/// Delete item
#[tauri::command]
pub async fn delete_item(state: State<'_, AppState>, id: String) -> Result<bool, String> {
    let mut store = state.items.lock().await;
    Ok(store.delete_item(&id))
}

/// Item prepared for the edit form, legacy sets expanded
#[tauri::command]
pub async fn get_edit_draft(state: State<'_, AppState>, id: String) -> Result<Option<Item>, String> {
    let store = state.items.lock().await;
    Ok(store.edit_draft(&id))
}
