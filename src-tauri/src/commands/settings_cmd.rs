//! Tauri Commands for Settings and Logs

use tauri::State;

use crate::settings::{AppSettings, SettingsUpdate};
use crate::AppState;

const DEFAULT_LOG_LINES: usize = 200;

#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<AppSettings, String> {
    Ok(state.settings.get().await)
}

/// Apply a partial settings update and reconfigure the running stores
#[tauri::command]
pub async fn update_settings(
    state: State<'_, AppState>,
    update: SettingsUpdate,
) -> Result<AppSettings, String> {
    let saved = state.settings.update(update).await.map_err(|e| e.to_string())?;
    let effective = state.settings.effective().await;

    state.planner.write().await.set_config(effective.gemini_config());
    state.weights.lock().await.set_initial_weight(effective.initial_weight);

    Ok(saved)
}

/// Most recent backend log lines, oldest first
#[tauri::command]
pub async fn get_recent_logs(limit: Option<usize>) -> Result<Vec<String>, String> {
    Ok(rolling_logger::recent_logs(limit.unwrap_or(DEFAULT_LOG_LINES)))
}
