//! Tauri Commands for the Weight History

use tauri::State;

use daystream_core::domain::{WeightEntry, WeightTrend};
use daystream_core::repository::WeightRecorded;

use crate::AppState;

/// Weight history, newest first
#[tauri::command]
pub async fn list_weight_history(state: State<'_, AppState>) -> Result<Vec<WeightEntry>, String> {
    let store = state.weights.lock().await;
    Ok(store.sorted_newest_first())
}

/// Record a measurement typed by the user; `None` when the input is rejected
#[tauri::command]
pub async fn record_weight(
    state: State<'_, AppState>,
    raw_input: String,
) -> Result<Option<WeightRecorded>, String> {
    let mut store = state.weights.lock().await;
    Ok(store.record_weight(&raw_input))
}

#[tauri::command]
pub async fn update_weight_entry(
    state: State<'_, AppState>,
    entry: WeightEntry,
) -> Result<Option<WeightEntry>, String> {
    let mut store = state.weights.lock().await;
    Ok(store.update_entry(entry))
}

#[tauri::command]
pub async fn delete_weight_entry(state: State<'_, AppState>, id: String) -> Result<bool, String> {
    let mut store = state.weights.lock().await;
    Ok(store.delete_entry(&id))
}

/// Chronological series for the chart
#[tauri::command]
pub async fn get_weight_trend(state: State<'_, AppState>) -> Result<WeightTrend, String> {
    let store = state.weights.lock().await;
    Ok(store.trend())
}
