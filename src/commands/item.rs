//! Item Commands
//!
//! Frontend bindings for item-related backend commands.

use serde::Serialize;

use super::call_with;
use crate::models::{Item, ItemType, ItemView, SetInput, Toggled};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemArgs<'a> {
    pub item_type: ItemType,
    pub title: &'a str,
    pub sets: Option<&'a [SetInput]>,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemTypeArgs {
    item_type: ItemType,
}

#[derive(Serialize)]
struct ItemArgs<'a> {
    item: &'a Item,
}

// ========================
// Commands
// ========================

pub async fn list_items_by_type(item_type: ItemType) -> Result<Vec<ItemView>, String> {
    call_with("list_items_by_type", &ItemTypeArgs { item_type }).await
}

/// `None` when the backend rejected the title
pub async fn create_item(args: &CreateItemArgs<'_>) -> Result<Option<Item>, String> {
    call_with("create_item", args).await
}

pub async fn toggle_item(id: &str) -> Result<Option<Toggled>, String> {
    call_with("toggle_item", &IdArgs { id }).await
}

pub async fn update_item(item: &Item) -> Result<Option<Item>, String> {
    call_with("update_item", &ItemArgs { item }).await
}

pub async fn delete_item(id: &str) -> Result<bool, String> {
    call_with("delete_item", &IdArgs { id }).await
}

pub async fn get_edit_draft(id: &str) -> Result<Option<Item>, String> {
    call_with("get_edit_draft", &IdArgs { id }).await
}
