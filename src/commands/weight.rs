//! Weight History Commands

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{call, call_with};
use crate::models::{WeightEntry, WeightRecorded, WeightTrend};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RecordArgs<'a> {
    raw_input: &'a str,
}

#[derive(Serialize)]
struct EntryArgs<'a> {
    entry: &'a WeightEntry,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

/// Newest first
pub async fn list_weight_history() -> Result<Vec<WeightEntry>, String> {
    call("list_weight_history", JsValue::NULL).await
}

/// `None` when the input was not a positive number
pub async fn record_weight(raw_input: &str) -> Result<Option<WeightRecorded>, String> {
    call_with("record_weight", &RecordArgs { raw_input }).await
}

pub async fn update_weight_entry(entry: &WeightEntry) -> Result<Option<WeightEntry>, String> {
    call_with("update_weight_entry", &EntryArgs { entry }).await
}

pub async fn delete_weight_entry(id: &str) -> Result<bool, String> {
    call_with("delete_weight_entry", &IdArgs { id }).await
}

pub async fn get_weight_trend() -> Result<WeightTrend, String> {
    call("get_weight_trend", JsValue::NULL).await
}
