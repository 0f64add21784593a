//! Settings Commands

use serde::Serialize;
use wasm_bindgen::JsValue;

use super::{call, call_with};
use crate::models::{AppSettings, SettingsUpdate};

#[derive(Serialize)]
struct UpdateArgs<'a> {
    update: &'a SettingsUpdate,
}

#[derive(Serialize)]
struct LogArgs {
    limit: Option<usize>,
}

pub async fn get_settings() -> Result<AppSettings, String> {
    call("get_settings", JsValue::NULL).await
}

pub async fn update_settings(update: &SettingsUpdate) -> Result<AppSettings, String> {
    call_with("update_settings", &UpdateArgs { update }).await
}

pub async fn get_recent_logs(limit: Option<usize>) -> Result<Vec<String>, String> {
    call_with("get_recent_logs", &LogArgs { limit }).await
}
