//! DayStream Backend
//!
//! Layered architecture:
//! - daystream-core: domain, stores and goal planning
//! - settings: persisted app settings
//! - commands: Tauri command handlers

use std::sync::Arc;

use tauri::Manager;
use tokio::sync::{Mutex, RwLock};

use daystream_core::repository::{ItemStore, JsonFileStorage, Storage, WeightStore};
use daystream_core::services::GeminiPlanner;

mod commands;
mod settings;

use settings::{SettingsManager, SETTINGS_FILE};

/// Application state shared across commands.
///
/// Each store sits behind its own lock so commands on one store are
/// applied one at a time.
pub struct AppState {
    pub items: Mutex<ItemStore>,
    pub weights: Mutex<WeightStore>,
    pub planner: RwLock<GeminiPlanner>,
    pub settings: SettingsManager,
}

async fn init_state(app_handle: &tauri::AppHandle) -> Result<AppState, Box<dyn std::error::Error>> {
    let config_path = app_handle.path().app_config_dir()?.join(SETTINGS_FILE);
    let settings = SettingsManager::new(config_path).await?;
    let effective = settings.effective().await;

    let data_dir = app_handle.path().app_data_dir()?;
    log::info!("data directory: {}", data_dir.display());
    let storage: Arc<dyn Storage> = Arc::new(JsonFileStorage::new(data_dir));

    // Stored data that fails to parse aborts startup instead of being replaced
    let items = ItemStore::load(storage.clone(), effective.seed_defaults)?;
    let weights = WeightStore::load(storage, effective.initial_weight, effective.seed_defaults)?;
    let planner = GeminiPlanner::new(effective.gemini_config())?;
    if !effective.gemini_config().has_key() {
        log::warn!("no Gemini API key configured, goal breakdown disabled");
    }

    Ok(AppState {
        items: Mutex::new(items),
        weights: Mutex::new(weights),
        planner: RwLock::new(planner),
        settings,
    })
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle().plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                if let Some(window) = app.get_webview_window("main") {
                    let _ = window.set_focus();
                }
            }))?;

            let app_handle = app.handle().clone();

            rolling_logger::init_logger(app_handle.path().app_log_dir()?, "DayStream")?;

            match tauri::async_runtime::block_on(init_state(&app_handle)) {
                Ok(state) => {
                    let _ = rolling_logger::info("DayStream state loaded");
                    app.manage(state);
                    Ok(())
                }
                Err(e) => {
                    let _ = rolling_logger::error(&format!("startup failed: {}", e));
                    Err(e)
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            // Items
            commands::list_items_by_type,
            commands::create_item,
            commands::toggle_item,
            commands::update_item,
            commands::delete_item,
            commands::get_edit_draft,
            // Weight history
            commands::list_weight_history,
            commands::record_weight,
            commands::update_weight_entry,
            commands::delete_weight_entry,
            commands::get_weight_trend,
            // Statistics
            commands::get_dashboard,
            // Goal breakdown
            commands::generate_goal_plan,
            commands::accept_goal_plan,
            // Settings and logs
            commands::get_settings,
            commands::update_settings,
            commands::get_recent_logs,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
