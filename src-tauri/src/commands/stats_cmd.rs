//! Tauri Commands for Derived Statistics

use tauri::State;

use daystream_core::domain::Dashboard;

use crate::AppState;

/// Progress, volume and weight summary, recomputed on every call
#[tauri::command]
pub async fn get_dashboard(state: State<'_, AppState>) -> Result<Dashboard, String> {
    let items = state.items.lock().await.all().to_vec();
    let weights = state.weights.lock().await;
    Ok(Dashboard::compute(&items, weights.entries(), weights.initial_weight()))
}
